//! Remove empty filter implementation.
//!
//! # Examples
//!
//! ```
//! use paraphrase::analysis::token_filter::Filter;
//! use paraphrase::analysis::token_filter::remove_empty::RemoveEmptyFilter;
//! use paraphrase::analysis::token::Token;
//!
//! let filter = RemoveEmptyFilter::new();
//! let tokens = vec![
//!     Token::new("hello", 0),
//!     Token::new("", 1),
//!     Token::new("world", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[1].text, "world");
//! assert_eq!(result[1].position, 1);
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes empty and stopped tokens from the stream.
///
/// Surviving tokens are renumbered so positions stay dense and reflect the
/// order of the final token sequence.
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !token.is_stopped() && !token.is_empty())
            .enumerate()
            .map(|(position, token)| token.with_position(position))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_empty_filter() {
        let filter = RemoveEmptyFilter::new();
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("", 1),
            Token::new("world", 2),
            Token::new("test", 3).stop(),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[0].position, 0);
        assert_eq!(result[1].text, "world");
        assert_eq!(result[1].position, 1);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(RemoveEmptyFilter::new().name(), "remove_empty");
    }
}
