//! Sentiment tone classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::sentiment::{SentimentScorer, SentimentScores};
use crate::error::Result;

/// Compound scores at or above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound scores at or below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Coarse tone of a text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToneLabel {
    Positive,
    Negative,
    Neutral,
}

impl ToneLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToneLabel::Positive => "Positive",
            ToneLabel::Negative => "Negative",
            ToneLabel::Neutral => "Neutral",
        }
    }

    /// Descriptive mood note for the label.
    pub fn mood(&self) -> &'static str {
        match self {
            ToneLabel::Positive => "This may suggest a mood of joy, love, or hope.",
            ToneLabel::Negative => "This may suggest a mood of sadness, anger, or despair.",
            ToneLabel::Neutral => {
                "The language is balanced, suggesting an objective or descriptive mood."
            }
        }
    }
}

impl fmt::Display for ToneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment proportions, compound score and derived label.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToneResult {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub compound: f64,
    pub label: ToneLabel,
}

impl ToneResult {
    pub fn mood(&self) -> &'static str {
        self.label.mood()
    }
}

/// Maps sentiment scores to a [`ToneResult`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ToneAnalyzer;

impl ToneAnalyzer {
    pub fn new() -> Self {
        ToneAnalyzer
    }

    /// Label for a compound score. Both thresholds are inclusive.
    pub fn classify(compound: f64) -> ToneLabel {
        if compound >= POSITIVE_THRESHOLD {
            ToneLabel::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            ToneLabel::Negative
        } else {
            ToneLabel::Neutral
        }
    }

    pub fn from_scores(scores: SentimentScores) -> ToneResult {
        ToneResult {
            positive: scores.positive,
            neutral: scores.neutral,
            negative: scores.negative,
            compound: scores.compound,
            label: Self::classify(scores.compound),
        }
    }

    /// Score `text` with `scorer` and classify the result.
    pub fn analyze(&self, scorer: &dyn SentimentScorer, text: &str) -> Result<ToneResult> {
        let scores = scorer.score(text)?;
        log::debug!(
            "Tone scores from {}: compound={:.4}",
            scorer.name(),
            scores.compound
        );
        Ok(Self::from_scores(scores))
    }
}
