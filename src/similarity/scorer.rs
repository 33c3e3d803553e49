//! Lexical question similarity scorer.
//!
//! The scorer normalizes both questions with an [`Analyzer`], then fuses two
//! measures over the resulting token sequences:
//!
//! ```text
//! combined   = jaccard * jaccard_weight + cosine * cosine_weight
//! confidence = min(round(combined * 100), 100)
//! is_similar = confidence >= threshold
//! ```
//!
//! If either side normalizes to no tokens the result is the
//! [`not_similar`](SimilarityResult::not_similar) floor.
//!
//! # Examples
//!
//! ```
//! use paraphrase::similarity::config::SimilarityConfig;
//! use paraphrase::similarity::scorer::SimilarityScorer;
//!
//! let scorer = SimilarityScorer::new(SimilarityConfig::default()).unwrap();
//! let result = scorer
//!     .compare("What is the capital of France?", "What's the capital city of France?")
//!     .unwrap();
//!
//! assert!(result.is_similar);
//! assert_eq!(result.confidence, 60);
//! ```

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::question::QuestionAnalyzer;
use crate::error::Result;
use crate::similarity::config::SimilarityConfig;
use crate::similarity::frequency::{TermFrequencies, cosine, jaccard};
use crate::similarity::result::{SimilarityResult, confidence_from_score};

/// Anything that can decide whether two questions are similar.
///
/// [`SimilarityScorer`] is the local lexical implementation. Another
/// implementation (for example one that asks a hosted model) can sit behind
/// the same contract. An `Err` means the classifier could not produce a
/// verdict; it must never be reported as a zero-confidence result.
pub trait SimilarityClassifier: Send + Sync {
    /// Classify a pair of questions.
    fn classify(&self, question1: &str, question2: &str) -> Result<SimilarityResult>;

    /// Get the name of this classifier (for logging and output).
    fn name(&self) -> &'static str;
}

/// The intermediate values behind one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Jaccard similarity of the distinct token sets.
    pub jaccard: f64,
    /// Cosine similarity of the token frequency vectors.
    pub cosine: f64,
    /// Weighted fusion of the two measures.
    pub combined: f64,
    /// Final verdict.
    pub result: SimilarityResult,
}

impl ScoreBreakdown {
    fn empty() -> Self {
        ScoreBreakdown {
            jaccard: 0.0,
            cosine: 0.0,
            combined: 0.0,
            result: SimilarityResult::not_similar(),
        }
    }
}

/// A human-inspectable account of why two questions scored as they did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityExplanation {
    /// Normalized tokens of the first question, in original order.
    pub tokens1: Vec<String>,
    /// Normalized tokens of the second question, in original order.
    pub tokens2: Vec<String>,
    /// Distinct tokens present in both questions, sorted.
    pub shared_tokens: Vec<String>,
    /// Jaccard, cosine, fused score and verdict.
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
}

/// Scores question pairs with fused Jaccard and cosine similarity.
///
/// The scorer holds no mutable state; one instance can be shared across
/// threads and called concurrently.
#[derive(Clone)]
pub struct SimilarityScorer {
    analyzer: Arc<dyn Analyzer>,
    config: SimilarityConfig,
}

impl SimilarityScorer {
    /// Create a scorer that normalizes with a [`QuestionAnalyzer`] built
    /// from the configuration.
    pub fn new(config: SimilarityConfig) -> Result<Self> {
        config.validate()?;
        let analyzer = QuestionAnalyzer::with_options(config.normalizer_options())?;
        Ok(SimilarityScorer {
            analyzer: Arc::new(analyzer),
            config,
        })
    }

    /// Create a scorer with a custom analyzer.
    ///
    /// The normalizer fields of `config` are ignored; the analyzer decides
    /// how text becomes tokens.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>, config: SimilarityConfig) -> Result<Self> {
        config.validate()?;
        Ok(SimilarityScorer { analyzer, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Get the analyzer used for normalization.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Normalize a question into its token sequence.
    pub fn normalize(&self, text: &str) -> Result<Vec<String>> {
        self.analyzer.terms(text)
    }

    /// Score two already-normalized token sequences.
    pub fn score<S: AsRef<str>>(&self, words1: &[S], words2: &[S]) -> SimilarityResult {
        self.breakdown(words1, words2).result
    }

    /// Score two token sequences and keep the intermediate values.
    pub fn breakdown<S: AsRef<str>>(&self, words1: &[S], words2: &[S]) -> ScoreBreakdown {
        if words1.is_empty() || words2.is_empty() {
            return ScoreBreakdown::empty();
        }

        let freqs1 = TermFrequencies::from_tokens(words1);
        let freqs2 = TermFrequencies::from_tokens(words2);
        self.fuse(&freqs1, &freqs2)
    }

    /// Normalize and score two questions.
    pub fn compare(&self, question1: &str, question2: &str) -> Result<SimilarityResult> {
        let words1 = self.normalize(question1)?;
        let words2 = self.normalize(question2)?;
        let breakdown = self.breakdown(&words1, &words2);

        debug!(
            "compared {} vs {} tokens: jaccard={:.4} cosine={:.4} -> {}",
            words1.len(),
            words2.len(),
            breakdown.jaccard,
            breakdown.cosine,
            breakdown.result
        );

        Ok(breakdown.result)
    }

    /// Normalize and score two questions, returning every intermediate value.
    pub fn explain(&self, question1: &str, question2: &str) -> Result<SimilarityExplanation> {
        let tokens1 = self.normalize(question1)?;
        let tokens2 = self.normalize(question2)?;

        let freqs1 = TermFrequencies::from_tokens(&tokens1);
        let freqs2 = TermFrequencies::from_tokens(&tokens2);
        let shared_tokens = freqs1.shared_terms(&freqs2);
        let breakdown = if freqs1.is_empty() || freqs2.is_empty() {
            ScoreBreakdown::empty()
        } else {
            self.fuse(&freqs1, &freqs2)
        };

        Ok(SimilarityExplanation {
            tokens1,
            tokens2,
            shared_tokens,
            breakdown,
        })
    }

    fn fuse(&self, freqs1: &TermFrequencies, freqs2: &TermFrequencies) -> ScoreBreakdown {
        let jaccard = jaccard(freqs1, freqs2);
        let cosine = cosine(freqs1, freqs2);
        let combined = jaccard * self.config.jaccard_weight + cosine * self.config.cosine_weight;
        let confidence = confidence_from_score(combined);

        ScoreBreakdown {
            jaccard,
            cosine,
            combined,
            result: SimilarityResult::from_confidence(confidence, self.config.threshold),
        }
    }
}

impl SimilarityClassifier for SimilarityScorer {
    fn classify(&self, question1: &str, question2: &str) -> Result<SimilarityResult> {
        self.compare(question1, question2)
    }

    fn name(&self) -> &'static str {
        "lexical"
    }
}

impl std::fmt::Debug for SimilarityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityScorer")
            .field("analyzer", &self.analyzer.name())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::PipelineAnalyzer;
    use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

    fn scorer() -> SimilarityScorer {
        SimilarityScorer::new(SimilarityConfig::default()).unwrap()
    }

    #[test]
    fn test_capital_of_france() {
        let explanation = scorer()
            .explain(
                "What is the capital of France?",
                "What's the capital city of France?",
            )
            .unwrap();

        assert_eq!(explanation.tokens1, vec!["what", "the", "capital", "france"]);
        assert_eq!(
            explanation.tokens2,
            vec!["whats", "the", "capital", "city", "france"]
        );
        assert_eq!(explanation.shared_tokens, vec!["capital", "france", "the"]);
        assert_eq!(explanation.breakdown.jaccard, 0.5);
        // 0.5 * 0.4 + 0.6708 * 0.6 = 0.6025
        assert_eq!(explanation.breakdown.result.confidence, 60);
        assert!(explanation.breakdown.result.is_similar);
    }

    #[test]
    fn test_unrelated_questions() {
        let result = scorer()
            .compare("How do I learn Python?", "What is the best pizza topping?")
            .unwrap();
        assert_eq!(result.confidence, 0);
        assert!(!result.is_similar);
    }

    #[test]
    fn test_empty_side() {
        let s = scorer();
        assert_eq!(
            s.compare("", "Any question").unwrap(),
            SimilarityResult::not_similar()
        );
        assert_eq!(
            s.compare("Any question", "!!!").unwrap(),
            SimilarityResult::not_similar()
        );

        let explanation = s.explain("a an to", "Any question").unwrap();
        assert!(explanation.tokens1.is_empty());
        assert_eq!(explanation.breakdown.combined, 0.0);
    }

    #[test]
    fn test_identity() {
        let s = scorer();
        for question in [
            "How do I learn Rust?",
            "buy buy buy sell",
            "Why why why why why?",
        ] {
            let result = s.compare(question, question).unwrap();
            assert_eq!(result.confidence, 100, "{question}");
            assert!(result.is_similar);
        }
    }

    #[test]
    fn test_score_token_sequences() {
        let s = scorer();
        let result = s.score(&["buy", "buy", "sell"], &["buy", "sell", "sell"]);
        // jaccard 1.0, cosine 0.8 -> 0.4 + 0.48 = 0.88
        assert_eq!(result.confidence, 88);

        let empty: [&str; 0] = [];
        assert_eq!(s.score(&empty, &["buy"]), SimilarityResult::not_similar());
    }

    #[test]
    fn test_custom_threshold() {
        let config = SimilarityConfig {
            threshold: 95,
            ..SimilarityConfig::default()
        };
        let s = SimilarityScorer::new(config).unwrap();
        let result = s.score(&["buy", "buy", "sell"], &["buy", "sell", "sell"]);
        assert_eq!(result.confidence, 88);
        assert!(!result.is_similar);
    }

    #[test]
    fn test_custom_weights() {
        let config = SimilarityConfig {
            jaccard_weight: 1.0,
            cosine_weight: 0.0,
            ..SimilarityConfig::default()
        };
        let s = SimilarityScorer::new(config).unwrap();
        let result = s.score(&["buy", "buy", "sell"], &["buy", "sell", "sell"]);
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimilarityConfig {
            cosine_weight: 0.9,
            ..SimilarityConfig::default()
        };
        assert!(SimilarityScorer::new(config).is_err());
    }

    #[test]
    fn test_custom_analyzer() {
        // No lowercasing, no length filter.
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()));
        let s = SimilarityScorer::with_analyzer(Arc::new(analyzer), SimilarityConfig::default())
            .unwrap();

        let result = s.compare("a B", "a b").unwrap();
        // jaccard 1/3, cosine 1/2 -> 0.1333 + 0.3 = 0.4333
        assert_eq!(result.confidence, 43);
    }

    #[test]
    fn test_classifier_trait() {
        let classifier: Box<dyn SimilarityClassifier> = Box::new(scorer());
        assert_eq!(classifier.name(), "lexical");
        let result = classifier
            .classify("How do I learn Rust?", "How can I learn Rust quickly?")
            .unwrap();
        assert!(result.is_similar);
    }

    #[test]
    fn test_explanation_serializes_flat() {
        let explanation = scorer().explain("learn rust", "learn rust").unwrap();
        let value = serde_json::to_value(&explanation).unwrap();
        assert_eq!(value["result"]["confidence"], 100);
        assert_eq!(value["jaccard"], 1.0);
        assert_eq!(value["shared_tokens"][0], "learn");
    }
}
