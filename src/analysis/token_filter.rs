//! Token filter implementations for token transformation.
//!
//! Filters receive the tokenizer's stream and produce a new stream. Filters
//! that reject a token mark it stopped instead of dropping it; the
//! [`remove_empty::RemoveEmptyFilter`] at the end of the chain removes stopped
//! tokens and renumbers positions.
//!
//! # Available Filters
//!
//! - [`length::LengthFilter`] - Stops tokens shorter than a minimum length
//! - [`stop::StopFilter`] - Stops listed stop words
//! - [`remove_empty::RemoveEmptyFilter`] - Removes stopped and empty tokens
//!
//! # Examples
//!
//! ```
//! use paraphrase::analysis::token::Token;
//! use paraphrase::analysis::token_filter::Filter;
//! use paraphrase::analysis::token_filter::length::LengthFilter;
//! use paraphrase::analysis::token_filter::remove_empty::RemoveEmptyFilter;
//!
//! let tokens = vec![Token::new("is", 0), Token::new("paris", 1)];
//! let stream = LengthFilter::new(3).filter(Box::new(tokens.into_iter())).unwrap();
//! let kept: Vec<_> = RemoveEmptyFilter::new().filter(stream).unwrap().collect();
//!
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].text, "paris");
//! assert_eq!(kept[0].position, 0);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod length;
pub mod remove_empty;
pub mod stop;
