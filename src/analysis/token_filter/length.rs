//! Minimum length filter implementation.

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Default minimum token length, in characters.
///
/// Short words like "a", "is" and "to" fall below it, so it doubles as a
/// crude stop-word filter. Changing it changes scores materially.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 3;

/// A filter that stops tokens shorter than a minimum number of characters.
///
/// Length is counted in Unicode scalar values, not bytes.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min_length: usize,
}

impl LengthFilter {
    /// Create a new length filter with the given minimum.
    pub fn new(min_length: usize) -> Self {
        LengthFilter { min_length }
    }

    /// Get the minimum length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TOKEN_LENGTH)
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_length = self.min_length;
        let filtered_tokens: Vec<Token> = tokens
            .map(|token| {
                if !token.is_stopped() && token.char_len() < min_length {
                    token.stop()
                } else {
                    token
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
