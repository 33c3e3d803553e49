//! Text analysis for questions.
//!
//! Raw text flows through char filters, a tokenizer and token filters:
//!
//! ```text
//! "What's 50% of $20?"
//!   -> char filters   "whats 50 of 20"
//!   -> tokenizer      ["whats", "50", "of", "20"]
//!   -> token filters  ["whats"]
//! ```
//!
//! [`analyzer::QuestionAnalyzer`] assembles the chain used for similarity
//! scoring. Custom chains are built with [`analyzer::PipelineAnalyzer`].

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
