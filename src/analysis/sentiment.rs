//! Sentiment scoring.
//!
//! A [`SentimentScorer`] turns text into polarity proportions and a compound
//! score, the input of [`ToneAnalyzer`](crate::poetry::tone::ToneAnalyzer).

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Polarity scores for a piece of text.
///
/// `positive`, `neutral` and `negative` are proportions in `[0, 1]`;
/// `compound` is a normalized summary in `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub compound: f64,
}

impl SentimentScores {
    pub fn new(positive: f64, neutral: f64, negative: f64, compound: f64) -> Self {
        SentimentScores {
            positive,
            neutral,
            negative,
            compound,
        }
    }
}

/// Trait for sentiment scorers.
pub trait SentimentScorer: Send + Sync {
    /// Score the given text.
    fn score(&self, text: &str) -> Result<SentimentScores>;

    /// Get the name of this scorer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod vader;

pub use vader::VaderScorer;
