//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw question string before it is tokenized. They
//! run over the whole string, which is what makes punctuation removal join
//! the pieces around it (`"don't"` becomes `"dont"`).
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode lowercasing
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`mapping::MappingCharFilter`] - Literal string mapping
//!
//! # Examples
//!
//! ```
//! use paraphrase::analysis::char_filter::CharFilter;
//! use paraphrase::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::punctuation().unwrap();
//! assert_eq!(filter.filter("What's up?").unwrap(), "Whats up");
//! ```

use crate::error::Result;

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the rewritten text.
    fn filter(&self, input: &str) -> Result<String>;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod mapping;
pub mod pattern_replace;
