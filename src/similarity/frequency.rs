//! Term frequency tables and the two set/vector similarity measures.
//!
//! A [`TermFrequencies`] table is built once per token sequence. Both
//! measures read from it: Jaccard uses the key sets, cosine uses the counts.
//!
//! Dot products and squared magnitudes are accumulated as integers, so the
//! result does not depend on hash map iteration order.

use std::collections::HashMap;

/// Token occurrence counts for one token sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequencies {
    counts: HashMap<String, u64>,
    total: u64,
}

impl TermFrequencies {
    /// Count the occurrences of each token.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut counts: HashMap<String, u64> = HashMap::with_capacity(tokens.len());
        for token in tokens {
            *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
        }

        TermFrequencies {
            counts,
            total: tokens.len() as u64,
        }
    }

    /// Occurrence count of `term`, zero if absent.
    pub fn count(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn distinct_terms(&self) -> usize {
        self.counts.len()
    }

    /// Total number of tokens counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Check if no tokens were counted.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Check if `term` occurs at least once.
    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Iterate over the distinct terms, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Distinct terms present in both tables, sorted.
    pub fn shared_terms(&self, other: &TermFrequencies) -> Vec<String> {
        let mut shared: Vec<String> = self
            .terms()
            .filter(|term| other.contains(term))
            .map(str::to_string)
            .collect();
        shared.sort();
        shared
    }

    fn squared_magnitude(&self) -> u64 {
        self.counts.values().map(|c| c * c).sum()
    }

    fn dot(&self, other: &TermFrequencies) -> u64 {
        // Only terms present in both sides contribute.
        let (small, large) = if self.distinct_terms() <= other.distinct_terms() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .map(|(term, count)| count * large.count(term))
            .sum()
    }
}

/// Jaccard similarity of the distinct token sets: `|A ∩ B| / |A ∪ B|`.
///
/// Returns 0.0 when both sets are empty.
pub fn jaccard(a: &TermFrequencies, b: &TermFrequencies) -> f64 {
    let intersection = a.terms().filter(|term| b.contains(term)).count();
    let union = a.distinct_terms() + b.distinct_terms() - intersection;

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Cosine similarity of the token frequency vectors.
///
/// Returns 0.0 when either vector has zero magnitude.
pub fn cosine(a: &TermFrequencies, b: &TermFrequencies) -> f64 {
    let magnitude1 = (a.squared_magnitude() as f64).sqrt();
    let magnitude2 = (b.squared_magnitude() as f64).sqrt();

    if magnitude1 == 0.0 || magnitude2 == 0.0 {
        return 0.0;
    }

    a.dot(b) as f64 / (magnitude1 * magnitude2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tf(tokens: &[&str]) -> TermFrequencies {
        TermFrequencies::from_tokens(tokens)
    }

    #[test]
    fn test_counts() {
        let freqs = tf(&["buy", "sell", "buy"]);
        assert_eq!(freqs.count("buy"), 2);
        assert_eq!(freqs.count("sell"), 1);
        assert_eq!(freqs.count("hold"), 0);
        assert_eq!(freqs.distinct_terms(), 2);
        assert_eq!(freqs.total(), 3);
        assert!(!freqs.is_empty());
        assert!(tf(&[]).is_empty());
    }

    #[test]
    fn test_jaccard() {
        let a = tf(&["what", "the", "capital", "france"]);
        let b = tf(&["whats", "the", "capital", "city", "france"]);
        // shared: the, capital, france; union: 6
        assert_eq!(jaccard(&a, &b), 0.5);
        assert_eq!(jaccard(&b, &a), 0.5);
    }

    #[test]
    fn test_jaccard_ignores_multiplicity() {
        let a = tf(&["buy", "buy", "buy"]);
        let b = tf(&["buy"]);
        assert_eq!(jaccard(&a, &b), 1.0);
    }

    #[test]
    fn test_jaccard_empty() {
        assert_eq!(jaccard(&tf(&[]), &tf(&[])), 0.0);
        assert_eq!(jaccard(&tf(&["one"]), &tf(&[])), 0.0);
    }

    #[test]
    fn test_cosine() {
        let a = tf(&["what", "the", "capital", "france"]);
        let b = tf(&["whats", "the", "capital", "city", "france"]);
        let expected = 3.0 / (2.0 * 5.0_f64.sqrt());
        assert!((cosine(&a, &b) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_uses_counts() {
        let a = tf(&["buy", "buy", "sell"]);
        let b = tf(&["buy", "sell", "sell"]);
        // dot = 2*1 + 1*2 = 4, |a| = |b| = sqrt(5)
        assert!((cosine(&a, &b) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_zero_magnitude() {
        assert_eq!(cosine(&tf(&[]), &tf(&["one"])), 0.0);
        assert_eq!(cosine(&tf(&["one"]), &tf(&[])), 0.0);
    }

    #[test]
    fn test_cosine_disjoint() {
        assert_eq!(cosine(&tf(&["apple"]), &tf(&["orange"])), 0.0);
    }

    #[test]
    fn test_cosine_is_symmetric_bitwise() {
        let a = tf(&["alpha", "beta", "beta", "gamma", "delta", "delta", "delta"]);
        let b = tf(&["beta", "gamma", "gamma", "epsilon"]);
        assert_eq!(cosine(&a, &b).to_bits(), cosine(&b, &a).to_bits());
    }

    #[test]
    fn test_shared_terms_sorted() {
        let a = tf(&["zeta", "alpha", "mid"]);
        let b = tf(&["mid", "zeta", "other"]);
        assert_eq!(a.shared_terms(&b), vec!["mid", "zeta"]);
    }
}
