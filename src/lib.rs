//! # Paraphrase
//!
//! Lexical question similarity for Rust.
//!
//! Two questions are normalized into token lists, compared with Jaccard set
//! overlap and term-frequency cosine similarity, and the fused score becomes
//! a verdict with an integer confidence.
//!
//! ## Features
//!
//! - Pure Rust, no model files or network access
//! - Deterministic, symmetric scores
//! - Pluggable text analysis pipeline
//! - Configurable weights and threshold
//! - Duplicate-question pair features
//!
//! ## Example
//!
//! ```
//! use paraphrase::compare_questions;
//!
//! let result = compare_questions(
//!     "What is the capital of France?",
//!     "What's the capital city of France?",
//! )
//! .unwrap();
//! assert!(result.is_similar);
//! assert_eq!(result.confidence, 60);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod features;
pub mod similarity;

pub use error::{ParaphraseError, Result};
pub use similarity::{
    SimilarityClassifier, SimilarityConfig, SimilarityResult, SimilarityScorer, compare_questions,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
