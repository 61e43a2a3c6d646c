//! Structured analysis results.
//!
//! A report is plain data: it is built once per
//! [`PoemAnalyzer::analyze`](crate::poetry::engine::PoemAnalyzer::analyze)
//! call and never changes afterwards. Every type serializes with serde so
//! the report can be handed to an exporter as JSON.

use serde::{Deserialize, Serialize};

use crate::config::DetectionProfile;
use crate::poetry::figures::FigureReport;
use crate::poetry::pos::PartsOfSpeech;
use crate::poetry::rhyme::RhymeGroup;
use crate::poetry::tone::ToneResult;

/// Counts, snippet and rhyme structure of a poem.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overview {
    /// Leading characters of the trimmed poem, `...` appended when cut.
    pub snippet: String,
    /// Non-empty lines after trimming.
    pub line_count: usize,
    /// Word tokens, punctuation included.
    pub word_count: usize,
    pub rhyme_scheme: String,
    /// All rhyme groups in label order, singletons included.
    pub rhyme_groups: Vec<RhymeGroup>,
}

impl Overview {
    /// Groups where two or more words share a label.
    pub fn rhyming_groups(&self) -> impl Iterator<Item = &RhymeGroup> {
        self.rhyme_groups.iter().filter(|g| g.is_rhyme())
    }
}

/// Full analysis of one poem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub profile: DetectionProfile,
    pub overview: Overview,
    pub parts_of_speech: PartsOfSpeech,
    pub figures: FigureReport,
    pub tone: ToneResult,
}

impl AnalysisReport {
    pub fn line_count(&self) -> usize {
        self.overview.line_count
    }

    pub fn word_count(&self) -> usize {
        self.overview.word_count
    }

    pub fn rhyme_scheme(&self) -> &str {
        &self.overview.rhyme_scheme
    }

    pub fn rhyme_groups(&self) -> &[RhymeGroup] {
        &self.overview.rhyme_groups
    }
}

/// Cut `text` to `max_chars` characters, appending `...` when shortened.
pub fn snippet(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
