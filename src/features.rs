//! Hand-crafted question-pair features.
//!
//! These are the classic duplicate-question features: word overlap counts,
//! stop-word versus content-word overlap, length differences, character
//! level edit similarity and fuzzy string ratios. They do not feed the
//! similarity verdict; they are reported next to it so a caller can see more
//! of the pair than two numbers.
//!
//! Features are computed on [`preprocess`]ed text, which is more aggressive
//! than the scorer's normalizer: symbols are spelled out, HTML tags removed
//! and whitespace collapsed, but short words are kept.
//!
//! # Examples
//!
//! ```
//! use paraphrase::features::PairFeatures;
//!
//! let features =
//!     PairFeatures::extract("How do I learn Python?", "How can I learn Python fast?").unwrap();
//! assert_eq!(features.basic.word_common, 4);
//! assert!(features.token.first_word_eq);
//! assert!(!features.token.last_word_eq);
//! ```

pub mod distance;
pub mod fuzzy;

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::mapping::MappingCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::error::Result;

/// Added to ratio denominators so empty sides never divide by zero.
pub const SAFE_DIV: f64 = 0.0001;

/// Char filter chain that cleans a question before feature extraction.
#[derive(Clone)]
pub struct Preprocessor {
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl Preprocessor {
    /// Build the standard chain: lowercase, symbol expansion, HTML tag
    /// removal, punctuation removal, whitespace collapse.
    pub fn new() -> Result<Self> {
        let char_filters: Vec<Arc<dyn CharFilter>> = vec![
            Arc::new(LowercaseCharFilter::new()),
            Arc::new(MappingCharFilter::symbols()?),
            Arc::new(PatternReplaceCharFilter::html_tags()?),
            Arc::new(PatternReplaceCharFilter::punctuation()?),
            Arc::new(PatternReplaceCharFilter::new(r"\s+", " ")?),
        ];
        Ok(Preprocessor { char_filters })
    }

    /// Clean a question.
    ///
    /// Surrounding whitespace is trimmed before the filters run, not after.
    /// A symbol expanded at either end leaves its padding behind, so `"50%"`
    /// becomes `"50 percent "` and that space counts toward the lengths.
    pub fn preprocess(&self, text: &str) -> Result<String> {
        let mut cleaned = text.trim().to_string();
        for char_filter in &self.char_filters {
            cleaned = char_filter.filter(&cleaned)?;
        }
        Ok(cleaned)
    }
}

impl std::fmt::Debug for Preprocessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preprocessor")
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Clean a question with the standard [`Preprocessor`].
pub fn preprocess(text: &str) -> Result<String> {
    Preprocessor::new()?.preprocess(text)
}

/// Lengths and whole-word overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicFeatures {
    /// Characters in the first question.
    pub q1_len: usize,
    /// Characters in the second question.
    pub q2_len: usize,
    /// Words in the first question.
    pub q1_num_words: usize,
    /// Words in the second question.
    pub q2_num_words: usize,
    /// Distinct words present in both questions.
    pub word_common: usize,
    /// Sum of the distinct word counts of both questions.
    pub word_total: usize,
    /// `word_common / word_total` rounded half to even at two decimals, 0 when
    /// there are no words.
    pub word_share: f64,
}

impl BasicFeatures {
    /// Compute basic features of two preprocessed questions.
    pub fn compute(q1: &str, q2: &str) -> Self {
        let q1_words: Vec<&str> = q1.split_whitespace().collect();
        let q2_words: Vec<&str> = q2.split_whitespace().collect();

        let w1: HashSet<&str> = q1_words.iter().copied().collect();
        let w2: HashSet<&str> = q2_words.iter().copied().collect();
        let word_common = w1.intersection(&w2).count();
        let word_total = w1.len() + w2.len();

        let word_share = if word_total > 0 {
            (word_common as f64 / word_total as f64 * 100.0).round_ties_even() / 100.0
        } else {
            0.0
        };

        BasicFeatures {
            q1_len: q1.chars().count(),
            q2_len: q2.chars().count(),
            q1_num_words: q1_words.len(),
            q2_num_words: q2_words.len(),
            word_common,
            word_total,
            word_share,
        }
    }
}

/// Overlap ratios split by stop words and content words.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenFeatures {
    /// Common content words over the smaller content-word set.
    pub cwc_min: f64,
    /// Common content words over the larger content-word set.
    pub cwc_max: f64,
    /// Common stop words over the smaller stop-word set.
    pub csc_min: f64,
    /// Common stop words over the larger stop-word set.
    pub csc_max: f64,
    /// Common distinct tokens over the shorter token list.
    pub ctc_min: f64,
    /// Common distinct tokens over the longer token list.
    pub ctc_max: f64,
    /// Whether both questions end with the same token.
    pub last_word_eq: bool,
    /// Whether both questions start with the same token.
    pub first_word_eq: bool,
}

impl TokenFeatures {
    /// Compute token features of two preprocessed questions.
    ///
    /// All features are zero when either question has no tokens.
    pub fn compute(q1: &str, q2: &str, stop_words: &StopFilter) -> Self {
        let q1_tokens: Vec<&str> = q1.split_whitespace().collect();
        let q2_tokens: Vec<&str> = q2.split_whitespace().collect();

        let (Some(q1_first), Some(q2_first)) = (q1_tokens.first(), q2_tokens.first()) else {
            return TokenFeatures::default();
        };
        let (Some(q1_last), Some(q2_last)) = (q1_tokens.last(), q2_tokens.last()) else {
            return TokenFeatures::default();
        };

        let partition = |tokens: &[&str]| -> (HashSet<String>, HashSet<String>) {
            let (stops, words): (Vec<&str>, Vec<&str>) = tokens
                .iter()
                .copied()
                .partition(|token| stop_words.is_stop_word(token));
            (
                words.into_iter().map(str::to_string).collect(),
                stops.into_iter().map(str::to_string).collect(),
            )
        };
        let (q1_words, q1_stops) = partition(&q1_tokens);
        let (q2_words, q2_stops) = partition(&q2_tokens);

        let common_word_count = q1_words.intersection(&q2_words).count();
        let common_stop_count = q1_stops.intersection(&q2_stops).count();
        let q1_token_set: HashSet<&str> = q1_tokens.iter().copied().collect();
        let q2_token_set: HashSet<&str> = q2_tokens.iter().copied().collect();
        let common_token_count = q1_token_set.intersection(&q2_token_set).count();

        let ratio = |common: usize, a: usize, b: usize| -> (f64, f64) {
            (
                common as f64 / (a.min(b) as f64 + SAFE_DIV),
                common as f64 / (a.max(b) as f64 + SAFE_DIV),
            )
        };
        let (cwc_min, cwc_max) = ratio(common_word_count, q1_words.len(), q2_words.len());
        let (csc_min, csc_max) = ratio(common_stop_count, q1_stops.len(), q2_stops.len());
        let (ctc_min, ctc_max) = ratio(common_token_count, q1_tokens.len(), q2_tokens.len());

        TokenFeatures {
            cwc_min,
            cwc_max,
            csc_min,
            csc_max,
            ctc_min,
            ctc_max,
            last_word_eq: q1_last == q2_last,
            first_word_eq: q1_first == q2_first,
        }
    }
}

/// Token count differences and character-level substring overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthFeatures {
    /// Mean token count of the two questions.
    pub mean_len: f64,
    /// Absolute difference of the token counts.
    pub abs_len_diff: usize,
    /// Longest common substring over the shorter question, 0 if either is empty.
    pub longest_substr_ratio: f64,
}

impl LengthFeatures {
    /// Compute length features of two preprocessed questions.
    pub fn compute(q1: &str, q2: &str) -> Self {
        let q1_count = q1.split_whitespace().count();
        let q2_count = q2.split_whitespace().count();

        let shorter = q1.chars().count().min(q2.chars().count());
        let longest_substr_ratio = if shorter > 0 {
            distance::longest_common_substring(q1, q2) as f64 / shorter as f64
        } else {
            0.0
        };

        LengthFeatures {
            mean_len: (q1_count + q2_count) as f64 / 2.0,
            abs_len_diff: q1_count.abs_diff(q2_count),
            longest_substr_ratio,
        }
    }
}

/// Fuzzy string ratios, each 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyFeatures {
    pub qratio: u8,
    pub partial_ratio: u8,
    pub token_sort_ratio: u8,
    pub token_set_ratio: u8,
}

impl FuzzyFeatures {
    /// Compute fuzzy ratios of two preprocessed questions.
    pub fn compute(q1: &str, q2: &str) -> Self {
        FuzzyFeatures {
            qratio: fuzzy::qratio(q1, q2),
            partial_ratio: fuzzy::partial_ratio(q1, q2),
            token_sort_ratio: fuzzy::token_sort_ratio(q1, q2),
            token_set_ratio: fuzzy::token_set_ratio(q1, q2),
        }
    }
}

/// All pair features of two questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairFeatures {
    /// First question after preprocessing.
    pub q1_clean: String,
    /// Second question after preprocessing.
    pub q2_clean: String,
    pub basic: BasicFeatures,
    pub token: TokenFeatures,
    pub length: LengthFeatures,
    pub fuzzy: FuzzyFeatures,
    /// Character edit similarity, 0-100.
    pub edit_ratio: u8,
}

impl PairFeatures {
    /// Preprocess two raw questions and compute every feature.
    pub fn extract(q1: &str, q2: &str) -> Result<Self> {
        let preprocessor = Preprocessor::new()?;
        let q1_clean = preprocessor.preprocess(q1)?;
        let q2_clean = preprocessor.preprocess(q2)?;
        Ok(Self::from_clean(q1_clean, q2_clean))
    }

    /// Compute every feature for two already preprocessed questions.
    pub fn from_clean(q1_clean: String, q2_clean: String) -> Self {
        let stop_words = StopFilter::new();
        PairFeatures {
            basic: BasicFeatures::compute(&q1_clean, &q2_clean),
            token: TokenFeatures::compute(&q1_clean, &q2_clean, &stop_words),
            length: LengthFeatures::compute(&q1_clean, &q2_clean),
            fuzzy: FuzzyFeatures::compute(&q1_clean, &q2_clean),
            edit_ratio: distance::edit_ratio(&q1_clean, &q2_clean),
            q1_clean,
            q2_clean,
        }
    }
}
