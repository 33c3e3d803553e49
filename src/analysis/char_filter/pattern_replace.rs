//! Regex replacement char filter.

use regex::Regex;

use super::CharFilter;
use crate::error::{ParaphraseError, Result};

/// Matches every character that is neither a word character nor whitespace.
pub const PUNCTUATION_PATTERN: &str = r"[^\w\s]";

/// Matches an HTML tag, shortest first.
pub const HTML_TAG_PATTERN: &str = r"<.*?>";

/// A char filter that replaces every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| ParaphraseError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
        })
    }

    /// A filter that deletes punctuation and symbols without leaving a gap.
    ///
    /// `\w` is Unicode-aware, so letters and digits of any script survive.
    pub fn punctuation() -> Result<Self> {
        Self::new(PUNCTUATION_PATTERN, "")
    }

    /// A filter that deletes HTML tags.
    pub fn html_tags() -> Result<Self> {
        Self::new(HTML_TAG_PATTERN, "")
    }

    /// Get the regex pattern used by this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> Result<String> {
        // NoExpand: the replacement is literal text, never a capture reference.
        Ok(self
            .pattern
            .replace_all(input, regex::NoExpand(&self.replacement))
            .into_owned())
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_is_deleted_not_separated() {
        let filter = PatternReplaceCharFilter::punctuation().unwrap();
        assert_eq!(filter.filter("don't").unwrap(), "dont");
        assert_eq!(filter.filter("e-mail, please!").unwrap(), "email please");
    }

    #[test]
    fn test_punctuation_keeps_word_chars_and_whitespace() {
        let filter = PatternReplaceCharFilter::punctuation().unwrap();
        assert_eq!(filter.filter("snake_case  2024").unwrap(), "snake_case  2024");
        assert_eq!(filter.filter("naïve café?").unwrap(), "naïve café");
        assert_eq!(filter.filter("東京は?").unwrap(), "東京は");
    }

    #[test]
    fn test_html_tags() {
        let filter = PatternReplaceCharFilter::html_tags().unwrap();
        assert_eq!(
            filter.filter("<b>bold</b> and <i>italic</i>").unwrap(),
            "bold and italic"
        );
    }

    #[test]
    fn test_literal_replacement() {
        let filter = PatternReplaceCharFilter::new(r"(\d+)", "$1x").unwrap();
        assert_eq!(filter.filter("year 2024").unwrap(), "year $1x");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = PatternReplaceCharFilter::new("(unclosed", "").unwrap_err();
        assert!(matches!(err, ParaphraseError::Analysis(_)));
    }
}
