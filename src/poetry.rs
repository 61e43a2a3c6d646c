//! Poem analysis: rhyme, parts of speech, figures of speech and tone.
//!
//! [`PoemAnalyzer`] is the entry point; the individual analyzers are usable
//! on their own as well.

pub mod engine;
pub mod figures;
pub mod pos;
pub mod render;
pub mod report;
pub mod rhyme;
pub mod samples;
pub mod tone;

pub use engine::PoemAnalyzer;
pub use figures::{Alliteration, FigureOfSpeechDetector, FigureReport};
pub use pos::{PartsOfSpeech, PosGrouper};
pub use report::{AnalysisReport, Overview};
pub use rhyme::{RhymeAnalysis, RhymeAnalyzer, RhymeGroup};
pub use tone::{ToneAnalyzer, ToneLabel, ToneResult};
