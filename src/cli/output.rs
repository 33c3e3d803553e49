//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, ParaphraseArgs};
use crate::error::Result;
use crate::features::PairFeatures;
use crate::similarity::{SimilarityExplanation, SimilarityResult};

/// Result structure for the explain command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExplainOutput {
    pub explanation: SimilarityExplanation,
    pub features: PairFeatures,
}

/// Outcome of one line of a batch file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRecord {
    /// 1-based line number in the input file.
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SimilarityResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchRecord {
    pub fn scored(line: usize, result: SimilarityResult) -> Self {
        BatchRecord {
            line,
            result: Some(result),
            error: None,
        }
    }

    pub fn failed<S: Into<String>>(line: usize, error: S) -> Self {
        BatchRecord {
            line,
            result: None,
            error: Some(error.into()),
        }
    }
}

/// Batch totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Pairs scored successfully.
    pub pairs: usize,
    /// Scored pairs judged similar.
    pub similar: usize,
    /// Lines that could not be scored.
    pub errors: usize,
    /// Mean confidence over scored pairs, 0 when none were scored.
    pub mean_confidence: f64,
    pub duration_ms: u64,
}

impl BatchSummary {
    /// Tally a list of records.
    pub fn from_records(records: &[BatchRecord], duration_ms: u64) -> Self {
        let scored: Vec<&SimilarityResult> =
            records.iter().filter_map(|r| r.result.as_ref()).collect();
        let pairs = scored.len();
        let similar = scored.iter().filter(|r| r.is_similar).count();
        let total_confidence: u64 = scored.iter().map(|r| u64::from(r.confidence)).sum();
        let mean_confidence = if pairs > 0 {
            total_confidence as f64 / pairs as f64
        } else {
            0.0
        };

        BatchSummary {
            pairs,
            similar,
            errors: records.len() - pairs,
            mean_confidence,
            duration_ms,
        }
    }
}

/// Result structure for the batch command.
#[derive(Debug, Serialize, Deserialize)]
pub struct BatchReport {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub records: Vec<BatchRecord>,
    pub summary: BatchSummary,
}

/// Output a comparison verdict.
pub fn output_comparison(result: &SimilarityResult, args: &ParaphraseArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{result}");
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output an explanation with its pair features.
pub fn output_explanation(output: &ExplainOutput, args: &ParaphraseArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", format_explanation(output));
            Ok(())
        }
        OutputFormat::Json => output_json(output, args),
    }
}

/// Output a batch report.
pub fn output_batch(report: &BatchReport, args: &ParaphraseArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", format_batch(report));
            Ok(())
        }
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &ParaphraseArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Render an explanation for a terminal.
fn format_explanation(output: &ExplainOutput) -> String {
    let explanation = &output.explanation;
    let breakdown = &explanation.breakdown;
    let features = &output.features;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Verdict: {}", breakdown.result);
    let _ = writeln!(out, "═══════");
    let _ = writeln!(out, "Tokens 1: [{}]", explanation.tokens1.join(", "));
    let _ = writeln!(out, "Tokens 2: [{}]", explanation.tokens2.join(", "));
    let _ = writeln!(out, "Shared:   [{}]", explanation.shared_tokens.join(", "));
    let _ = writeln!(out);
    let _ = writeln!(out, "Jaccard:  {:.4}", breakdown.jaccard);
    let _ = writeln!(out, "Cosine:   {:.4}", breakdown.cosine);
    let _ = writeln!(out, "Combined: {:.4}", breakdown.combined);
    let _ = writeln!(out);
    let _ = writeln!(out, "Pair Features:");
    let _ = writeln!(out, "  word share:       {:.2}", features.basic.word_share);
    let _ = writeln!(
        out,
        "  common words:     {} of {}",
        features.basic.word_common, features.basic.word_total
    );
    let _ = writeln!(
        out,
        "  content overlap:  {:.3} / {:.3}",
        features.token.cwc_min, features.token.cwc_max
    );
    let _ = writeln!(
        out,
        "  stop overlap:     {:.3} / {:.3}",
        features.token.csc_min, features.token.csc_max
    );
    let _ = writeln!(
        out,
        "  first/last equal: {} / {}",
        features.token.first_word_eq, features.token.last_word_eq
    );
    let _ = writeln!(
        out,
        "  length diff:      {}",
        features.length.abs_len_diff
    );
    let _ = writeln!(
        out,
        "  substring ratio:  {:.3}",
        features.length.longest_substr_ratio
    );
    let _ = writeln!(out, "  edit ratio:       {}", features.edit_ratio);
    let _ = writeln!(
        out,
        "  fuzzy ratios:     qratio {} partial {} token sort {} token set {}",
        features.fuzzy.qratio,
        features.fuzzy.partial_ratio,
        features.fuzzy.token_sort_ratio,
        features.fuzzy.token_set_ratio
    );
    out
}

/// Render a batch report for a terminal.
fn format_batch(report: &BatchReport) -> String {
    let mut out = String::new();

    for record in &report.records {
        match (&record.result, &record.error) {
            (Some(result), _) => {
                let _ = writeln!(out, "line {}: {}", record.line, result);
            }
            (None, Some(error)) => {
                let _ = writeln!(out, "line {}: error: {}", record.line, error);
            }
            (None, None) => {}
        }
    }
    if !report.records.is_empty() {
        let _ = writeln!(out);
    }

    let summary = &report.summary;
    let _ = writeln!(out, "Summary:");
    let _ = writeln!(out, "  pairs:           {}", summary.pairs);
    let _ = writeln!(out, "  similar:         {}", summary.similar);
    let _ = writeln!(out, "  errors:          {}", summary.errors);
    let _ = writeln!(out, "  mean confidence: {:.1}", summary.mean_confidence);
    let _ = writeln!(
        out,
        "  duration:        {}",
        format_duration(summary.duration_ms)
    );
    out
}

/// Format milliseconds into a human-readable duration.
fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms} ms")
    } else {
        format!("{:.2} s", ms as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<BatchRecord> {
        vec![
            BatchRecord::scored(1, SimilarityResult::from_confidence(60, 40)),
            BatchRecord::failed(2, "missing field `question2`"),
            BatchRecord::scored(3, SimilarityResult::from_confidence(0, 40)),
        ]
    }

    #[test]
    fn test_batch_summary() {
        let summary = BatchSummary::from_records(&records(), 12);
        assert_eq!(summary.pairs, 2);
        assert_eq!(summary.similar, 1);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.mean_confidence, 30.0);
        assert_eq!(summary.duration_ms, 12);
    }

    #[test]
    fn test_batch_summary_empty() {
        let summary = BatchSummary::from_records(&[], 0);
        assert_eq!(summary.pairs, 0);
        assert_eq!(summary.mean_confidence, 0.0);
    }

    #[test]
    fn test_batch_record_json() {
        let json = serde_json::to_string(&records()[0]).unwrap();
        assert_eq!(
            json,
            r#"{"line":1,"result":{"is_similar":true,"confidence":60}}"#
        );
        let json = serde_json::to_string(&records()[1]).unwrap();
        assert_eq!(json, r#"{"line":2,"error":"missing field `question2`"}"#);
    }

    #[test]
    fn test_format_batch() {
        let records = records();
        let report = BatchReport {
            summary: BatchSummary::from_records(&records, 1500),
            records,
        };
        let text = format_batch(&report);
        assert!(text.contains("line 1: similar (60% confidence)"));
        assert!(text.contains("line 2: error: missing field `question2`"));
        assert!(text.contains("mean confidence: 30.0"));
        assert!(text.contains("1.50 s"));
    }

    #[test]
    fn test_format_explanation() {
        let scorer = crate::similarity::SimilarityScorer::new(Default::default()).unwrap();
        let q1 = "What is the capital of France?";
        let q2 = "What's the capital city of France?";
        let output = ExplainOutput {
            explanation: scorer.explain(q1, q2).unwrap(),
            features: PairFeatures::extract(q1, q2).unwrap(),
        };
        let text = format_explanation(&output);
        assert!(text.starts_with("Verdict: similar (60% confidence)"));
        assert!(text.contains("Shared:   [capital, france, the]"));
        assert!(text.contains("Jaccard:  0.5000"));
        assert!(text.contains("fuzzy ratios:     qratio "));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(250), "250 ms");
        assert_eq!(format_duration(2500), "2.50 s");
    }
}
