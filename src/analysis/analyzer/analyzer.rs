//! Core analyzer trait definition.
//!
//! An [`Analyzer`] is the complete text processing pipeline that turns a raw
//! question into its token sequence:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Token Stream
//! ```
//!
//! # Examples
//!
//! ```
//! use paraphrase::analysis::analyzer::Analyzer;
//! use paraphrase::analysis::analyzer::QuestionAnalyzer;
//!
//! let analyzer = QuestionAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("What is the capital of France?").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[0].text, "what");
//! assert_eq!(tokens[3].text, "france");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so one scorer can serve many callers at
/// once without coordination.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the text and collect the token texts in order.
    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}
