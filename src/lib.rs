//! # LitLoom
//!
//! A poem analysis library for Rust.
//!
//! ## Features
//!
//! - Rhyme scheme detection with greedy suffix matching
//! - Part-of-speech grouping over Penn Treebank tags
//! - Heuristic simile, metaphor and alliteration detection
//! - Sentiment tone classification
//! - Dictionary-based spell checking
//! - Pluggable tokenizer, tagger and sentiment scorer
//!
//! ## Example
//!
//! ```
//! use litloom::prelude::*;
//!
//! let analyzer = PoemAnalyzer::new();
//! let report = analyzer
//!     .analyze("She sings like an angel.\nPeter Piper picked a peck of pickled peppers.")
//!     .unwrap();
//! assert_eq!(report.figures.similes, vec!["She sings like an angel."]);
//! assert_eq!(report.figures.alliterations.len(), 1);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod poetry;
pub mod spelling;

pub mod prelude {
    pub use crate::analysis::sentiment::{SentimentScorer, SentimentScores};
    pub use crate::analysis::tagger::Tagger;
    pub use crate::analysis::token::{TaggedToken, Token};
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::config::{AnalysisConfig, DetectionProfile};
    pub use crate::error::{LitloomError, Result};
    pub use crate::poetry::{AnalysisReport, PoemAnalyzer};
    pub use crate::spelling::{SpellChecker, SpellingDictionary};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
