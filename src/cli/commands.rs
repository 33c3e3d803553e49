//! Command implementations for the paraphrase CLI.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{ParaphraseError, Result};
use crate::features::PairFeatures;
use crate::similarity::{SimilarityConfig, SimilarityScorer};

/// One line of a batch file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPair {
    pub question1: String,
    pub question2: String,
}

/// A batch file line, parsed or not.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchLine {
    /// 1-based line number.
    pub line: usize,
    pub pair: std::result::Result<QuestionPair, String>,
}

/// Execute a CLI command.
pub fn execute_command(args: ParaphraseArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let scorer = SimilarityScorer::new(config)?;
    debug!("Using scorer {scorer:?}");

    match &args.command {
        Command::Compare(compare_args) => compare(compare_args, &scorer, &args),
        Command::Explain(compare_args) => explain(compare_args, &scorer, &args),
        Command::Batch(batch_args) => batch(batch_args, &scorer, &args),
    }
}

/// Load the similarity configuration, falling back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<SimilarityConfig> {
    match path {
        Some(path) => SimilarityConfig::from_file(path),
        None => Ok(SimilarityConfig::default()),
    }
}

/// Compare a question pair.
fn compare(args: &CompareArgs, scorer: &SimilarityScorer, cli_args: &ParaphraseArgs) -> Result<()> {
    validate_questions(&args.question1, &args.question2)?;

    let result = scorer.compare(&args.question1, &args.question2)?;
    output_comparison(&result, cli_args)
}

/// Explain a question pair.
fn explain(args: &CompareArgs, scorer: &SimilarityScorer, cli_args: &ParaphraseArgs) -> Result<()> {
    validate_questions(&args.question1, &args.question2)?;

    let output = ExplainOutput {
        explanation: scorer.explain(&args.question1, &args.question2)?,
        features: PairFeatures::extract(&args.question1, &args.question2)?,
    };
    output_explanation(&output, cli_args)
}

/// Score every pair in a batch file.
fn batch(args: &BatchArgs, scorer: &SimilarityScorer, cli_args: &ParaphraseArgs) -> Result<()> {
    info!("Reading question pairs from: {}", args.input.display());

    let lines = load_pairs(&args.input)?;
    let report = score_batch(scorer, &lines);

    info!(
        "Scored {} pairs ({} errors) in {} ms",
        report.summary.pairs, report.summary.errors, report.summary.duration_ms
    );

    let report = if args.summary_only {
        BatchReport {
            records: Vec::new(),
            summary: report.summary,
        }
    } else {
        report
    };
    output_batch(&report, cli_args)
}

/// Reject blank questions.
pub fn validate_questions(question1: &str, question2: &str) -> Result<()> {
    if question1.trim().is_empty() {
        return Err(ParaphraseError::invalid_argument(
            "question1 must not be empty",
        ));
    }
    if question2.trim().is_empty() {
        return Err(ParaphraseError::invalid_argument(
            "question2 must not be empty",
        ));
    }
    Ok(())
}

/// Read a JSONL file of question pairs.
///
/// Blank lines are skipped. Lines that fail to parse are kept with their
/// error so the batch can report them.
pub fn load_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<BatchLine>> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let pair = serde_json::from_str::<QuestionPair>(&line).map_err(|e| {
            warn!("Error parsing pair on line {}: {}", line_num + 1, e);
            e.to_string()
        });
        lines.push(BatchLine {
            line: line_num + 1,
            pair,
        });
    }

    Ok(lines)
}

/// Score parsed batch lines in parallel, keeping input order.
pub fn score_batch(scorer: &SimilarityScorer, lines: &[BatchLine]) -> BatchReport {
    let start_time = Instant::now();

    let records: Vec<BatchRecord> = lines
        .par_iter()
        .map(|batch_line| match &batch_line.pair {
            Ok(pair) => match scorer.compare(&pair.question1, &pair.question2) {
                Ok(result) => BatchRecord::scored(batch_line.line, result),
                Err(e) => BatchRecord::failed(batch_line.line, e.to_string()),
            },
            Err(e) => BatchRecord::failed(batch_line.line, e.clone()),
        })
        .collect();

    let duration_ms = start_time.elapsed().as_millis() as u64;
    BatchReport {
        summary: BatchSummary::from_records(&records, duration_ms),
        records,
    }
}
