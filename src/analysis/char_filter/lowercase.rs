//! Lowercase char filter implementation.

use super::CharFilter;
use crate::error::Result;

/// A char filter that lowercases the entire input.
///
/// Lowercasing happens on the whole string rather than per token so that
/// context-sensitive mappings (such as the Greek final sigma) see the same
/// word boundaries the author wrote.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> Result<String> {
        if input.is_ascii() {
            Ok(input.to_ascii_lowercase())
        } else {
            Ok(input.to_lowercase())
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_ascii() {
        let filter = LowercaseCharFilter::new();
        assert_eq!(
            filter.filter("What Is The CAPITAL").unwrap(),
            "what is the capital"
        );
    }

    #[test]
    fn test_lowercase_unicode() {
        let filter = LowercaseCharFilter::new();
        assert_eq!(filter.filter("ÉCOLE Straße").unwrap(), "école straße");
        // Word-final capital sigma lowercases to the final form.
        assert_eq!(
            filter.filter("\u{39f}\u{394}\u{39f}\u{3a3}").unwrap(),
            "\u{3bf}\u{3b4}\u{3bf}\u{3c2}"
        );
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseCharFilter::new().name(), "lowercase");
    }
}
