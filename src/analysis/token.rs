//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows from the tokenizer through the token
//! filters. Filters never drop tokens directly; they mark them stopped and a
//! final [`RemoveEmptyFilter`](crate::analysis::token_filter::remove_empty::RemoveEmptyFilter)
//! clears them out, so every stage sees the full sequence.
//!
//! # Examples
//!
//! ```
//! use paraphrase::analysis::token::Token;
//!
//! let token = Token::new("capital", 2);
//! assert_eq!(token.text, "capital");
//! assert_eq!(token.position, 2);
//! assert_eq!(token.char_len(), 7);
//! assert!(!token.is_stopped());
//! ```

use serde::{Deserialize, Serialize};

/// A single word unit produced by a tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// Whether this token has been marked as stopped (removed) by a filter
    pub stopped: bool,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            stopped: false,
        }
    }

    /// Length of the token text in Unicode scalar values.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Mark this token as stopped.
    pub fn stop(mut self) -> Self {
        self.stopped = true;
        self
    }

    /// Check if this token is stopped.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Clone this token with updated position.
    pub fn with_position(&self, position: usize) -> Self {
        let mut token = self.clone();
        token.position = position;
        token
    }
}

/// A stream of tokens passed between analysis stages.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;
