//! Stop filter implementation.
//!
//! The question scorer does not use a stop list (the length filter plays that
//! role). Stop words matter for the pair features, which compare stop-word
//! overlap separately from content-word overlap.
//!
//! # Examples
//!
//! ```
//! use paraphrase::analysis::token_filter::Filter;
//! use paraphrase::analysis::token_filter::stop::StopFilter;
//! use paraphrase::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![Token::new("the", 0), Token::new("capital", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert!(result[0].is_stopped());
//! assert!(!result[1].is_stopped());
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Stop words used by the question-pair features.
pub const QUESTION_STOP_WORDS: &[&str] = &["the", "is", "in", "on", "at", "to", "a", "an", "of"];

static DEFAULT_STOP_WORDS_SET: LazyLock<Arc<HashSet<String>>> = LazyLock::new(|| {
    Arc::new(
        QUESTION_STOP_WORDS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    )
});

/// A filter that marks stop words as stopped.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the question stop-word list.
    pub fn new() -> Self {
        StopFilter {
            stop_words: Arc::clone(&DEFAULT_STOP_WORDS_SET),
        }
    }

    /// Create a stop filter from a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            stop_words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Number of stop words in the list.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop list is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let stop_words = Arc::clone(&self.stop_words);
        let filtered_tokens: Vec<Token> = tokens
            .map(|token| {
                if !token.is_stopped() && stop_words.contains(&token.text) {
                    token.stop()
                } else {
                    token
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
