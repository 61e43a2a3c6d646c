//! The poem analysis facade.
//!
//! [`PoemAnalyzer`] wires the language collaborators (tokenizer, tagger,
//! sentiment scorer) to the individual analyzers and assembles an
//! [`AnalysisReport`]. It holds no per-call state: every method is a pure
//! function of its input text, so one analyzer can be shared across threads.
//!
//! Any error raised by a collaborator is surfaced as
//! [`LitloomError::AnalysisUnavailable`](crate::error::LitloomError::AnalysisUnavailable).
//!
//! # Examples
//!
//! ```
//! use litloom::poetry::engine::PoemAnalyzer;
//!
//! let analyzer = PoemAnalyzer::new();
//! let report = analyzer.analyze("The cat sat\nOn the mat\nNot a rat").unwrap();
//! assert_eq!(report.line_count(), 3);
//! assert_eq!(report.rhyme_scheme(), "AAA");
//! ```

use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::sentiment::{SentimentScorer, VaderScorer};
use crate::analysis::tagger::{LexiconTagger, Tagger};
use crate::analysis::token::{TaggedToken, Token};
use crate::analysis::tokenizer::{Tokenizer, UnicodeTokenizer};
use crate::config::AnalysisConfig;
use crate::error::{LitloomError, Result};
use crate::poetry::figures::{FigureOfSpeechDetector, FigureReport};
use crate::poetry::pos::{PartsOfSpeech, PosGrouper};
use crate::poetry::report::{self, AnalysisReport, Overview};
use crate::poetry::rhyme::RhymeAnalyzer;
use crate::poetry::tone::{ToneAnalyzer, ToneResult};

/// Analyzes poems with pluggable language collaborators.
#[derive(Clone)]
pub struct PoemAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    tagger: Arc<dyn Tagger>,
    scorer: Arc<dyn SentimentScorer>,
    config: AnalysisConfig,
}

impl PoemAnalyzer {
    /// Create an analyzer with the built-in collaborators and default config.
    pub fn new() -> Self {
        PoemAnalyzer {
            tokenizer: Arc::new(UnicodeTokenizer::new()),
            tagger: Arc::new(LexiconTagger::new()),
            scorer: Arc::new(VaderScorer::new()),
            config: AnalysisConfig::default(),
        }
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Replace the part-of-speech tagger.
    pub fn with_tagger(mut self, tagger: Arc<dyn Tagger>) -> Self {
        self.tagger = tagger;
        self
    }

    /// Replace the sentiment scorer.
    pub fn with_scorer(mut self, scorer: Arc<dyn SentimentScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    pub fn tagger(&self) -> &Arc<dyn Tagger> {
        &self.tagger
    }

    pub fn scorer(&self) -> &Arc<dyn SentimentScorer> {
        &self.scorer
    }

    /// Trimmed, non-empty lines of a poem.
    pub fn poem_lines(text: &str) -> Vec<&str> {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Counts, snippet and rhyme structure.
    pub fn overview(&self, text: &str) -> Result<Overview> {
        let words = self.words(text)?;
        Ok(self.overview_from(text, &words))
    }

    /// Words of the poem grouped by part of speech.
    pub fn parts_of_speech(&self, text: &str) -> Result<PartsOfSpeech> {
        let words = self.words(text)?;
        self.parts_of_speech_from(&words)
    }

    /// Similes, metaphors and alliterations, per sentence.
    pub fn figures(&self, text: &str) -> Result<FigureReport> {
        if text.trim().is_empty() {
            return Ok(FigureReport::default());
        }
        let sentences = self
            .tokenizer
            .tokenize_sentences(text)
            .map_err(|e| e.into_unavailable("sentence tokenization"))?;
        FigureOfSpeechDetector::new(self.config.profile)
            .detect(&sentences, self.tokenizer.as_ref(), self.tagger.as_ref())
            .map_err(|e| e.into_unavailable("figure detection"))
    }

    /// Sentiment tone of the whole text.
    pub fn tone(&self, text: &str) -> Result<ToneResult> {
        ToneAnalyzer::new()
            .analyze(self.scorer.as_ref(), text)
            .map_err(|e| e.into_unavailable("sentiment scoring"))
    }

    /// Run every section over one poem.
    pub fn analyze(&self, text: &str) -> Result<AnalysisReport> {
        let words = self.words(text)?;
        let overview = self.overview_from(text, &words);
        let parts_of_speech = self.parts_of_speech_from(&words)?;
        let figures = self.figures(text)?;
        let tone = self.tone(text)?;

        log::debug!(
            "Analyzed poem: {} lines, {} words, scheme {:?}, {} POS categories, {} similes, {} metaphors, {} alliterations, tone {}",
            overview.line_count,
            overview.word_count,
            overview.rhyme_scheme,
            parts_of_speech.len(),
            figures.similes.len(),
            figures.metaphors.len(),
            figures.alliterations.len(),
            tone.label
        );

        Ok(AnalysisReport {
            profile: self.config.profile,
            overview,
            parts_of_speech,
            figures,
            tone,
        })
    }

    /// Analyze independent poems in parallel. Results keep the input order.
    pub fn analyze_batch<S>(&self, texts: &[S]) -> Vec<Result<AnalysisReport>>
    where
        S: AsRef<str> + Sync,
    {
        log::debug!("Analyzing batch of {} poems", texts.len());
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect()
    }

    fn words(&self, text: &str) -> Result<Vec<Token>> {
        self.tokenizer
            .tokenize_words(text)
            .map_err(|e| e.into_unavailable("word tokenization"))
    }

    fn overview_from(&self, text: &str, words: &[Token]) -> Overview {
        let lines = Self::poem_lines(text);
        let rhyme = RhymeAnalyzer::new().analyze(&lines);
        Overview {
            snippet: report::snippet(text, self.config.snippet_chars),
            line_count: lines.len(),
            word_count: words.len(),
            rhyme_scheme: rhyme.scheme,
            rhyme_groups: rhyme.groups,
        }
    }

    fn parts_of_speech_from(&self, words: &[Token]) -> Result<PartsOfSpeech> {
        if words.is_empty() {
            return Ok(PartsOfSpeech::new());
        }
        let tagged = self.tag(words)?;
        Ok(PosGrouper::new(self.config.profile).group(&tagged))
    }

    fn tag(&self, words: &[Token]) -> Result<Vec<TaggedToken>> {
        let surface: Vec<&str> = words.iter().map(|t| t.text.as_str()).collect();
        let tagged = self
            .tagger
            .tag(&surface)
            .map_err(|e| e.into_unavailable("tagging"))?;
        if tagged.len() != surface.len() {
            return Err(LitloomError::analysis_unavailable(format!(
                "tagger {} returned {} tags for {} tokens",
                self.tagger.name(),
                tagged.len(),
                surface.len()
            )));
        }
        Ok(tagged)
    }
}

impl Default for PoemAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PoemAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoemAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field("tagger", &self.tagger.name())
            .field("scorer", &self.scorer.name())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DetectionProfile;
    use crate::poetry::tone::ToneLabel;

    #[test]
    fn test_poem_lines() {
        let lines = PoemAnalyzer::poem_lines("  first  \n\n   \nsecond\r\n");
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_empty_input() {
        let analyzer = PoemAnalyzer::new();
        for text in ["", "   \n\t  \n"] {
            let report = analyzer.analyze(text).unwrap();
            assert_eq!(report.line_count(), 0);
            assert_eq!(report.word_count(), 0);
            assert_eq!(report.rhyme_scheme(), "");
            assert!(report.rhyme_groups().is_empty());
            assert!(report.parts_of_speech.is_empty());
            assert!(report.figures.is_empty());
            assert_eq!(report.tone.label, ToneLabel::Neutral);
        }
    }

    #[test]
    fn test_overview_counts() {
        let analyzer = PoemAnalyzer::new();
        let overview = analyzer.overview("The cat sat,\n\nOn the mat.").unwrap();
        assert_eq!(overview.line_count, 2);
        // Punctuation tokens count as words.
        assert_eq!(overview.word_count, 8);
        assert_eq!(overview.rhyme_scheme, "AA");
        assert_eq!(overview.snippet, "The cat sat,\n\nOn the mat.");
    }

    #[test]
    fn test_snippet_length_from_config() {
        let analyzer =
            PoemAnalyzer::new().with_config(AnalysisConfig::new().with_snippet_chars(7));
        let overview = analyzer.overview("The cat sat on the mat").unwrap();
        assert_eq!(overview.snippet, "The cat...");
    }

    #[test]
    fn test_report_records_profile() {
        let analyzer = PoemAnalyzer::new()
            .with_config(AnalysisConfig::new().with_profile(DetectionProfile::Export));
        let report = analyzer.analyze("Roses are red.").unwrap();
        assert_eq!(report.profile, DetectionProfile::Export);
    }

    #[test]
    fn test_idempotent() {
        let analyzer = PoemAnalyzer::new();
        let text = "Peter Piper picked a peck of pickled peppers.\nShe sings like an angel.";
        assert_eq!(analyzer.analyze(text).unwrap(), analyzer.analyze(text).unwrap());
    }

    #[test]
    fn test_batch_preserves_order() {
        let analyzer = PoemAnalyzer::new();
        let texts = ["one line", "first\nsecond", "a\nb\nc"];
        let counts: Vec<usize> = analyzer
            .analyze_batch(&texts)
            .into_iter()
            .map(|r| r.unwrap().line_count())
            .collect();
        assert_eq!(counts, vec![1, 2, 3]);
    }

    #[test]
    fn test_debug_lists_collaborators() {
        let debug = format!("{:?}", PoemAnalyzer::new());
        assert!(debug.contains("unicode"));
        assert!(debug.contains("lexicon"));
        assert!(debug.contains("vader"));
    }
}
