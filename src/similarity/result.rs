//! The verdict returned by a similarity comparison.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether two questions express the same intent, and how confidently.
///
/// `confidence` is always within `0..=100` and `is_similar` is true exactly
/// when `confidence` reaches the threshold the result was built with.
///
/// # Examples
///
/// ```
/// use paraphrase::similarity::result::SimilarityResult;
///
/// let result = SimilarityResult::from_confidence(72, 40);
/// assert!(result.is_similar);
/// assert_eq!(result.confidence, 72);
///
/// let json = serde_json::to_string(&result).unwrap();
/// assert_eq!(json, r#"{"is_similar":true,"confidence":72}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSimilarityResult")]
pub struct SimilarityResult {
    /// True iff `confidence >= threshold`.
    pub is_similar: bool,
    /// Fused similarity scaled to an integer percentage.
    pub confidence: u8,
}

impl SimilarityResult {
    /// Build a result from a confidence, clamping it to 100.
    pub fn from_confidence(confidence: u8, threshold: u8) -> Self {
        let confidence = confidence.min(100);
        SimilarityResult {
            is_similar: confidence >= threshold,
            confidence,
        }
    }

    /// The floor result used when either side has no tokens.
    pub fn not_similar() -> Self {
        SimilarityResult {
            is_similar: false,
            confidence: 0,
        }
    }

    /// Re-derive the verdict for a different threshold.
    pub fn with_threshold(self, threshold: u8) -> Self {
        Self::from_confidence(self.confidence, threshold)
    }
}

/// Unchecked wire form, validated into a [`SimilarityResult`].
#[derive(Deserialize)]
struct RawSimilarityResult {
    is_similar: bool,
    confidence: u8,
}

impl TryFrom<RawSimilarityResult> for SimilarityResult {
    type Error = String;

    fn try_from(raw: RawSimilarityResult) -> Result<Self, Self::Error> {
        if raw.confidence > 100 {
            return Err(format!(
                "confidence must be within 0..=100, got {}",
                raw.confidence
            ));
        }
        // Zero confidence can never be similar under a valid threshold.
        if raw.confidence == 0 && raw.is_similar {
            return Err("a result with zero confidence cannot be similar".to_string());
        }
        Ok(SimilarityResult {
            is_similar: raw.is_similar,
            confidence: raw.confidence,
        })
    }
}

impl Default for SimilarityResult {
    fn default() -> Self {
        Self::not_similar()
    }
}

impl fmt::Display for SimilarityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.is_similar {
            "similar"
        } else {
            "not similar"
        };
        write!(f, "{verdict} ({}% confidence)", self.confidence)
    }
}

/// Convert a fused score in `[0, 1]` to a confidence percentage.
///
/// Rounds half away from zero first, then clamps to 100. The order matters:
/// it keeps confidences reproducible when the fused score oversteps 1.0 by a
/// rounding error. Negative or NaN inputs map to 0.
pub fn confidence_from_score(combined: f64) -> u8 {
    let scaled = (combined * 100.0).round();
    if scaled.is_nan() || scaled <= 0.0 {
        0
    } else {
        scaled.min(100.0) as u8
    }
}
