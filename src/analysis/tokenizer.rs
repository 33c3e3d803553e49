//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split the char-filtered text into a stream of tokens. This is
//! the second stage of the analysis pipeline, after char filters and before
//! token filters.
//!
//! # Examples
//!
//! ```
//! use paraphrase::analysis::tokenizer::Tokenizer;
//! use paraphrase::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("  capital   of\tfrance ").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[2].text, "france");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a single scorer can be shared across
/// threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;
