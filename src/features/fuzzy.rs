//! Fuzzy string ratios for question pairs.
//!
//! Every ratio is an integer percentage built on the indel similarity
//! `2 * lcs / (len1 + len2)`, where `lcs` is the longest common subsequence
//! in characters. Percentages round half to even.
//!
//! # Examples
//!
//! ```
//! use paraphrase::features::fuzzy;
//!
//! assert_eq!(fuzzy::ratio("this is a test", "this is a test!"), 97);
//! assert_eq!(fuzzy::partial_ratio("this is a test", "this is a test!"), 100);
//! assert_eq!(
//!     fuzzy::token_sort_ratio("fuzzy wuzzy was a bear", "wuzzy fuzzy was a bear"),
//!     100
//! );
//! ```

use std::collections::BTreeSet;

use crate::features::distance::lcs_len;

/// Similarity of two whole strings. Equal strings score 100, an empty
/// string against a non-empty one scores 0.
pub fn ratio(s1: &str, s2: &str) -> u8 {
    if s1 == s2 {
        return 100;
    }
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    to_percent(indel_similarity(&s1_chars, &s2_chars))
}

/// [`ratio`] after [`full_process`]; 0 when either side has nothing left.
pub fn qratio(s1: &str, s2: &str) -> u8 {
    let p1 = full_process(s1);
    let p2 = full_process(s2);
    if p1.is_empty() || p2.is_empty() {
        return 0;
    }
    ratio(&p1, &p2)
}

/// Best [`ratio`] of the shorter string against every window of the longer
/// string with the same length.
pub fn partial_ratio(s1: &str, s2: &str) -> u8 {
    if s1 == s2 {
        return 100;
    }
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    if s1_chars.is_empty() || s2_chars.is_empty() {
        return 0;
    }

    let (shorter, longer) = if s1_chars.len() <= s2_chars.len() {
        (&s1_chars, &s2_chars)
    } else {
        (&s2_chars, &s1_chars)
    };

    let mut best = 0.0f64;
    for window in longer.windows(shorter.len()) {
        best = best.max(indel_similarity(shorter, window));
        if best >= 1.0 {
            break;
        }
    }
    to_percent(best)
}

/// [`ratio`] of both strings with their tokens sorted.
pub fn token_sort_ratio(s1: &str, s2: &str) -> u8 {
    ratio(&sorted_tokens(s1), &sorted_tokens(s2))
}

/// Best [`ratio`] among the shared tokens and the shared tokens extended by
/// each side's remaining tokens. A string whose tokens are a subset of the
/// other's scores 100.
pub fn token_set_ratio(s1: &str, s2: &str) -> u8 {
    let p1 = full_process(s1);
    let p2 = full_process(s2);
    if p1.is_empty() || p2.is_empty() {
        return 0;
    }

    let tokens1: BTreeSet<&str> = p1.split_whitespace().collect();
    let tokens2: BTreeSet<&str> = p2.split_whitespace().collect();

    let join = |tokens: Vec<&str>| tokens.join(" ");
    let sorted_sect = join(tokens1.intersection(&tokens2).copied().collect());
    let diff1to2 = join(tokens1.difference(&tokens2).copied().collect());
    let diff2to1 = join(tokens2.difference(&tokens1).copied().collect());

    let combined_1to2 = format!("{sorted_sect} {diff1to2}").trim().to_string();
    let combined_2to1 = format!("{sorted_sect} {diff2to1}").trim().to_string();

    ratio(&sorted_sect, &combined_1to2)
        .max(ratio(&sorted_sect, &combined_2to1))
        .max(ratio(&combined_1to2, &combined_2to1))
}

/// Lowercase, turn every non-word character into a space, trim.
pub fn full_process(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

fn sorted_tokens(s: &str) -> String {
    let processed = full_process(s);
    let mut tokens: Vec<&str> = processed.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn indel_similarity(s1: &[char], s2: &[char]) -> f64 {
    let total = s1.len() + s2.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * lcs_len(s1, s2) as f64 / total as f64
}

fn to_percent(similarity: f64) -> u8 {
    (similarity * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        assert_eq!(ratio("this is a test", "this is a test!"), 97);
        assert_eq!(ratio("fuzzy wuzzy was a bear", "wuzzy fuzzy was a bear"), 91);
        assert_eq!(ratio("same", "same"), 100);
        assert_eq!(ratio("", ""), 100);
        assert_eq!(ratio("", "abc"), 0);
    }

    #[test]
    fn test_qratio() {
        assert_eq!(qratio("this is a test", "this is a test!"), 100);
        assert_eq!(qratio("How do I learn Python", "how can i learn python fast"), 79);
        assert_eq!(qratio("?!", "anything"), 0);
        assert_eq!(qratio("", ""), 0);
    }

    #[test]
    fn test_partial_ratio() {
        assert_eq!(partial_ratio("this is a test", "this is a test!"), 100);
        assert_eq!(partial_ratio("YANKEES", "NEW YORK YANKEES"), 100);
        assert_eq!(partial_ratio("NEW YORK YANKEES", "YANKEES"), 100);
        assert_eq!(partial_ratio("rusty", "trust me"), 80);
        assert_eq!(partial_ratio("", "abc"), 0);
    }

    #[test]
    fn test_token_sort_ratio() {
        assert_eq!(
            token_sort_ratio("fuzzy wuzzy was a bear", "wuzzy fuzzy was a bear"),
            100
        );
        assert_eq!(
            token_sort_ratio("fuzzy was a bear", "fuzzy fuzzy was a bear"),
            84
        );
        assert_eq!(
            token_sort_ratio("how do i learn python", "how can i learn python fast"),
            79
        );
    }

    #[test]
    fn test_token_set_ratio() {
        assert_eq!(
            token_set_ratio("fuzzy was a bear", "fuzzy fuzzy was a bear"),
            100
        );
        assert_eq!(
            token_set_ratio("how do i learn python", "how can i learn python fast"),
            92
        );
        assert_eq!(token_set_ratio("", "anything"), 0);
        // Nothing shared: falls back to the ratio of the remainders.
        assert_eq!(token_set_ratio("apple", "orange"), 36);
    }

    #[test]
    fn test_full_process() {
        assert_eq!(full_process("  What's UP, doc?  "), "what s up  doc");
        assert_eq!(full_process("snake_case"), "snake_case");
    }
}
