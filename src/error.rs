//! Error types for the LitLoom library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`LitloomError`].
//!
//! # Examples
//!
//! ```
//! use litloom::error::{LitloomError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LitloomError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for LitLoom operations.
#[derive(Error, Debug)]
pub enum LitloomError {
    /// A language collaborator (tokenizer, tagger, sentiment scorer) failed.
    ///
    /// This is fatal to the analysis call that triggered it.
    #[error("Analysis unavailable: {0}")]
    AnalysisUnavailable(String),

    /// I/O errors (reading poems, dictionaries, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument supplied by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LitloomError.
pub type Result<T> = std::result::Result<T, LitloomError>;

impl LitloomError {
    /// Create a new analysis-unavailable error.
    pub fn analysis_unavailable<S: Into<String>>(msg: S) -> Self {
        LitloomError::AnalysisUnavailable(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LitloomError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LitloomError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LitloomError::Other(msg.into())
    }

    /// Whether this error came from an unavailable language collaborator.
    pub fn is_analysis_unavailable(&self) -> bool {
        matches!(self, LitloomError::AnalysisUnavailable(_))
    }

    /// Re-label any error raised by a collaborator as [`LitloomError::AnalysisUnavailable`].
    pub(crate) fn into_unavailable(self, stage: &str) -> Self {
        match self {
            LitloomError::AnalysisUnavailable(_) => self,
            other => LitloomError::AnalysisUnavailable(format!("{stage}: {other}")),
        }
    }
}
