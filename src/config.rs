//! Engine configuration.
//!
//! [`AnalysisConfig`] is plain data passed into the analyzer; nothing in the
//! engine mutates it after construction. It can be loaded from a JSON file:
//!
//! ```json
//! {
//!   "profile": "export",
//!   "snippet_chars": 120,
//!   "spelling": { "max_edit_distance": 1, "max_suggestions": 3 }
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LitloomError, Result};

/// Which of the two detection paths to follow.
///
/// Interactive display and document export apply slightly different
/// heuristics. Both are kept and named so that callers choose one explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionProfile {
    /// Metaphors skip generic nouns, alliteration uses the lowercased
    /// sentence, parts of speech use the detailed tag table.
    #[default]
    Interactive,
    /// No generic-noun stoplist, alliteration only counts words already
    /// lowercase in the source, parts of speech use the coarse tag table.
    Export,
}

impl DetectionProfile {
    /// Whether metaphor detection drops generic nouns such as "man" or "thing".
    pub fn uses_generic_noun_stoplist(self) -> bool {
        matches!(self, DetectionProfile::Interactive)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DetectionProfile::Interactive => "interactive",
            DetectionProfile::Export => "export",
        }
    }
}

impl fmt::Display for DetectionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetectionProfile {
    type Err = LitloomError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interactive" => Ok(DetectionProfile::Interactive),
            "export" => Ok(DetectionProfile::Export),
            other => Err(LitloomError::config(format!(
                "unknown detection profile '{other}'"
            ))),
        }
    }
}

/// Spell checking limits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellingConfig {
    /// Largest edit distance a suggestion may have.
    pub max_edit_distance: usize,
    /// Maximum number of suggestions per misspelled word.
    pub max_suggestions: usize,
}

impl Default for SpellingConfig {
    fn default() -> Self {
        SpellingConfig {
            max_edit_distance: 2,
            max_suggestions: 5,
        }
    }
}

/// Configuration for a [`PoemAnalyzer`](crate::poetry::engine::PoemAnalyzer).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Heuristic profile for figures of speech and part-of-speech naming.
    pub profile: DetectionProfile,
    /// Number of characters kept in the overview snippet.
    pub snippet_chars: usize,
    /// Spell checker settings.
    pub spelling: SpellingConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            profile: DetectionProfile::Interactive,
            snippet_chars: 200,
            spelling: SpellingConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the detection profile.
    pub fn with_profile(mut self, profile: DetectionProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Set the snippet length.
    pub fn with_snippet_chars(mut self, snippet_chars: usize) -> Self {
        self.snippet_chars = snippet_chars;
        self
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            LitloomError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_json(&raw)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> Result<()> {
        let spelling = &self.spelling;
        if spelling.max_edit_distance == 0 || spelling.max_edit_distance > 3 {
            return Err(LitloomError::config(format!(
                "spelling.max_edit_distance must be between 1 and 3, got {}",
                spelling.max_edit_distance
            )));
        }
        if spelling.max_suggestions == 0 {
            return Err(LitloomError::config(
                "spelling.max_suggestions must be at least 1",
            ));
        }
        Ok(())
    }
}
