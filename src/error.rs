//! Error types for the paraphrase library.
//!
//! Scoring itself cannot fail once two strings are in hand. Errors only come
//! from the edges: loading configuration, reading batch files, invalid
//! caller input, or a custom analysis stage that chooses to fail.
//!
//! # Examples
//!
//! ```
//! use paraphrase::error::{ParaphraseError, Result};
//!
//! fn check(question: &str) -> Result<()> {
//!     if question.trim().is_empty() {
//!         return Err(ParaphraseError::invalid_argument("question must not be blank"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check("").is_err());
//! assert!(check("How do I learn Rust?").is_ok());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for paraphrase operations.
#[derive(Error, Debug)]
pub enum ParaphraseError {
    /// I/O errors (config files, batch input)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (char filters, tokenization, token filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid scoring configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Caller supplied an argument the operation cannot accept
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ParaphraseError.
pub type Result<T> = std::result::Result<T, ParaphraseError>;

impl ParaphraseError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ParaphraseError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ParaphraseError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ParaphraseError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ParaphraseError::Other(msg.into())
    }
}
