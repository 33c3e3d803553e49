//! Literal string mapping char filter.

use std::collections::BTreeMap;

use aho_corasick::{AhoCorasick, MatchKind};

use super::CharFilter;
use crate::error::{ParaphraseError, Result};

/// Currency and symbol spellings used when symbol expansion is enabled.
///
/// Replacements are padded with spaces so the spelled-out word becomes a
/// token of its own.
pub const SYMBOL_EXPANSIONS: &[(&str, &str)] = &[
    ("%", " percent "),
    ("$", " dollar "),
    ("₹", " rupee "),
    ("€", " euro "),
    ("@", " at "),
];

/// A char filter that replaces literal substrings, longest match first.
#[derive(Clone, Debug)]
pub struct MappingCharFilter {
    ac: AhoCorasick,
    replacements: Vec<String>,
}

impl MappingCharFilter {
    /// Create a mapping filter from `pattern -> replacement` pairs.
    pub fn new<I, K, V>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        // BTreeMap keeps pattern ids stable across runs.
        let mapping: BTreeMap<String, String> = mapping
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        if mapping.keys().any(|k| k.is_empty()) {
            return Err(ParaphraseError::analysis(
                "Mapping patterns must not be empty",
            ));
        }

        let (keys, replacements): (Vec<String>, Vec<String>) = mapping.into_iter().unzip();

        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&keys)
            .map_err(|e| ParaphraseError::analysis(format!("Invalid mapping: {e}")))?;

        Ok(Self { ac, replacements })
    }

    /// The symbol expansion filter (`%` to `percent`, `$` to `dollar`, ...).
    pub fn symbols() -> Result<Self> {
        Self::new(SYMBOL_EXPANSIONS.iter().copied())
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> Result<String> {
        let mut output = String::with_capacity(input.len());
        let mut last_match_end = 0;

        for m in self.ac.find_iter(input) {
            output.push_str(&input[last_match_end..m.start()]);
            output.push_str(&self.replacements[m.pattern().as_usize()]);
            last_match_end = m.end();
        }

        output.push_str(&input[last_match_end..]);
        Ok(output)
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}
