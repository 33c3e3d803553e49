//! Configuration for question similarity scoring.
//!
//! The fusion weights, decision threshold and normalizer knobs are policy,
//! not algorithm. They live here so they can be tuned without touching the
//! scorer.
//!
//! # Examples
//!
//! ```
//! use paraphrase::similarity::config::SimilarityConfig;
//!
//! let config = SimilarityConfig::default();
//! assert_eq!(config.jaccard_weight, 0.4);
//! assert_eq!(config.cosine_weight, 0.6);
//! assert_eq!(config.threshold, 40);
//! assert!(config.validate().is_ok());
//!
//! // Favor set overlap over term-frequency shape
//! let mut custom = SimilarityConfig::default();
//! custom.jaccard_weight = 0.7;
//! custom.cosine_weight = 0.3;
//! assert!(custom.validate().is_ok());
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::question::NormalizerOptions;
use crate::analysis::token_filter::length::DEFAULT_MIN_TOKEN_LENGTH;
use crate::error::{ParaphraseError, Result};

/// Default weight of Jaccard set overlap in the fused score.
pub const DEFAULT_JACCARD_WEIGHT: f64 = 0.4;

/// Default weight of term-frequency cosine in the fused score.
pub const DEFAULT_COSINE_WEIGHT: f64 = 0.6;

/// Default confidence at or above which two questions count as similar.
pub const DEFAULT_THRESHOLD: u8 = 40;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Configuration for the lexical similarity scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Weight for Jaccard similarity of the distinct token sets (0.0-1.0).
    pub jaccard_weight: f64,
    /// Weight for cosine similarity of the token frequency vectors (0.0-1.0).
    pub cosine_weight: f64,
    /// Minimum confidence (1-100) for a "similar" verdict.
    pub threshold: u8,
    /// Tokens with fewer characters than this are discarded.
    pub min_token_length: usize,
    /// Spell out currency and `@`/`%` symbols before punctuation removal.
    pub expand_symbols: bool,
    /// Delete HTML tags before punctuation removal.
    pub strip_html: bool,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            jaccard_weight: DEFAULT_JACCARD_WEIGHT,
            cosine_weight: DEFAULT_COSINE_WEIGHT,
            threshold: DEFAULT_THRESHOLD,
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            expand_symbols: false,
            strip_html: false,
        }
    }
}

impl SimilarityConfig {
    /// Load a configuration from a JSON file and validate it.
    ///
    /// Missing fields take their default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading similarity config from {}", path.display());

        let content = fs::read_to_string(path)?;
        let config: SimilarityConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a well-formed scorer.
    ///
    /// Weights must be finite, non-negative and sum to 1.0 so the fused score
    /// stays within `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in [
            ("jaccard_weight", self.jaccard_weight),
            ("cosine_weight", self.cosine_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ParaphraseError::config(format!(
                    "{name} must be a finite non-negative number, got {weight}"
                )));
            }
        }

        let sum = self.jaccard_weight + self.cosine_weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ParaphraseError::config(format!(
                "jaccard_weight and cosine_weight must sum to 1.0, got {sum}"
            )));
        }

        // A zero threshold would call pairs with no overlap similar.
        if !(1..=100).contains(&self.threshold) {
            return Err(ParaphraseError::config(format!(
                "threshold must be within 1..=100, got {}",
                self.threshold
            )));
        }

        if self.min_token_length == 0 {
            return Err(ParaphraseError::config(
                "min_token_length must be at least 1",
            ));
        }

        Ok(())
    }

    /// The normalizer settings carried by this configuration.
    pub fn normalizer_options(&self) -> NormalizerOptions {
        NormalizerOptions {
            min_token_length: self.min_token_length,
            expand_symbols: self.expand_symbols,
            strip_html: self.strip_html,
        }
    }
}
