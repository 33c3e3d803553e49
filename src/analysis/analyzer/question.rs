//! Question analyzer: the text normalizer used by the similarity scorer.
//!
//! # Pipeline
//!
//! 1. LowercaseCharFilter (whole string)
//! 2. MappingCharFilter symbol expansion (optional, off by default)
//! 3. PatternReplaceCharFilter HTML tag removal (optional, off by default)
//! 4. PatternReplaceCharFilter deleting `[^\w\s]`
//! 5. WhitespaceTokenizer
//! 6. LengthFilter (minimum 3 characters by default)
//! 7. RemoveEmptyFilter
//!
//! # Examples
//!
//! ```
//! use paraphrase::analysis::analyzer::QuestionAnalyzer;
//!
//! let analyzer = QuestionAnalyzer::new().unwrap();
//! assert_eq!(
//!     analyzer.normalize("Don't I know it's 5 a.m.?").unwrap(),
//!     vec!["dont", "know", "its"]
//! );
//! assert!(analyzer.normalize("a an to !!!").unwrap().is_empty());
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::mapping::MappingCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::length::{DEFAULT_MIN_TOKEN_LENGTH, LengthFilter};
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// Knobs for the question normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerOptions {
    /// Tokens with fewer characters than this are discarded.
    pub min_token_length: usize,
    /// Spell out `%`, `$`, `₹`, `€` and `@` before punctuation removal.
    pub expand_symbols: bool,
    /// Delete HTML tags before punctuation removal.
    pub strip_html: bool,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            expand_symbols: false,
            strip_html: false,
        }
    }
}

/// Analyzer that turns a raw question into its ordered token sequence.
#[derive(Clone, Debug)]
pub struct QuestionAnalyzer {
    inner: PipelineAnalyzer,
    options: NormalizerOptions,
}

impl QuestionAnalyzer {
    /// Create a question analyzer with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(NormalizerOptions::default())
    }

    /// Create a question analyzer with the given options.
    pub fn with_options(options: NormalizerOptions) -> Result<Self> {
        let mut analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()));

        if options.expand_symbols {
            analyzer = analyzer.add_char_filter(Arc::new(MappingCharFilter::symbols()?));
        }
        if options.strip_html {
            analyzer = analyzer.add_char_filter(Arc::new(PatternReplaceCharFilter::html_tags()?));
        }

        let analyzer = analyzer
            .add_char_filter(Arc::new(PatternReplaceCharFilter::punctuation()?))
            .add_filter(Arc::new(LengthFilter::new(options.min_token_length)))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("question");

        Ok(QuestionAnalyzer {
            inner: analyzer,
            options,
        })
    }

    /// Normalize a question into its ordered token sequence.
    ///
    /// Never fails for the built-in stages; any input, including the empty
    /// string, yields a possibly empty sequence.
    pub fn normalize(&self, text: &str) -> Result<Vec<String>> {
        self.terms(text)
    }

    /// The options this analyzer was built with.
    pub fn options(&self) -> &NormalizerOptions {
        &self.options
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for QuestionAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "question"
    }
}
