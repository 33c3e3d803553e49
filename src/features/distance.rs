//! Character-level string distances used by the pair features.
//!
//! All functions work on Unicode scalar values, not bytes.

use std::cmp::min;

/// Levenshtein edit distance between two strings.
///
/// Keeps two rows of the dynamic programming table instead of the full
/// matrix.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut current = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        current[0] = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            current[j + 1] = min(
                min(previous[j + 1] + 1, current[j] + 1),
                previous[j] + cost,
            );
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[s2_chars.len()]
}

/// Edit similarity as an integer percentage.
///
/// `100 * (1 - distance / longest)`, rounded. Two empty strings are
/// identical and score 100.
pub fn edit_ratio(s1: &str, s2: &str) -> u8 {
    let longest = s1.chars().count().max(s2.chars().count());
    if longest == 0 {
        return 100;
    }

    let distance = levenshtein_distance(s1, s2);
    let ratio = 1.0 - distance as f64 / longest as f64;
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Length in characters of the longest substring shared by both strings.
pub fn longest_common_substring(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    let mut previous = vec![0usize; s2_chars.len() + 1];
    let mut current = vec![0usize; s2_chars.len() + 1];
    let mut longest = 0;

    for c1 in &s1_chars {
        for (j, c2) in s2_chars.iter().enumerate() {
            current[j + 1] = if c1 == c2 { previous[j] + 1 } else { 0 };
            longest = longest.max(current[j + 1]);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    longest
}

/// Length of the longest common subsequence of two strings.
pub fn longest_common_subsequence(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    lcs_len(&s1_chars, &s2_chars)
}

pub(crate) fn lcs_len(s1: &[char], s2: &[char]) -> usize {
    let mut previous = vec![0usize; s2.len() + 1];
    let mut current = vec![0usize; s2.len() + 1];

    for c1 in s1 {
        for (j, c2) in s2.iter().enumerate() {
            current[j + 1] = if c1 == c2 {
                previous[j] + 1
            } else {
                previous[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[s2.len()]
}
