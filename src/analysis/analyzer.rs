//! Analyzer implementations that combine char filters, a tokenizer and
//! token filters.

pub mod analyzer;
pub mod pipeline;
pub mod question;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use question::{NormalizerOptions, QuestionAnalyzer};
