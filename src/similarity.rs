//! Question similarity scoring.
//!
//! This module decides whether two questions express the same intent by
//! fusing Jaccard set overlap with term-frequency cosine similarity.
//!
//! # Examples
//!
//! ```
//! use paraphrase::similarity::compare_questions;
//!
//! let result = compare_questions("How do I learn Python?", "What is the best pizza topping?").unwrap();
//! assert!(!result.is_similar);
//! assert_eq!(result.confidence, 0);
//! ```

pub mod config;
pub mod frequency;
pub mod result;
pub mod scorer;

pub use config::SimilarityConfig;
pub use result::SimilarityResult;
pub use scorer::{SimilarityClassifier, SimilarityExplanation, SimilarityScorer};

use std::sync::LazyLock;

use crate::error::{ParaphraseError, Result};

static DEFAULT_SCORER: LazyLock<Result<SimilarityScorer>> =
    LazyLock::new(|| SimilarityScorer::new(SimilarityConfig::default()));

/// The shared scorer behind [`compare_questions`], built on first use.
pub fn default_scorer() -> Result<&'static SimilarityScorer> {
    match &*DEFAULT_SCORER {
        Ok(scorer) => Ok(scorer),
        Err(e) => Err(ParaphraseError::other(format!(
            "default scorer unavailable: {e}"
        ))),
    }
}

/// Compare two questions with the default configuration.
///
/// Empty strings are valid input and score as not similar.
pub fn compare_questions(question1: &str, question2: &str) -> Result<SimilarityResult> {
    default_scorer()?.compare(question1, question2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scorer_is_shared() {
        let first = default_scorer().unwrap();
        let second = default_scorer().unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.config(), &SimilarityConfig::default());
    }

    #[test]
    fn test_compare_questions_uses_default_config() {
        let result =
            compare_questions("How do I learn Rust?", "How can I learn Rust quickly?").unwrap();
        let expected = SimilarityScorer::new(SimilarityConfig::default())
            .unwrap()
            .compare("How do I learn Rust?", "How can I learn Rust quickly?")
            .unwrap();
        assert_eq!(result, expected);
    }
}
