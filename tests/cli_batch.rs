//! Integration tests for batch scoring and configuration files.

use std::ffi::OsString;
use std::io::Write;

use paraphrase::cli::args::{Command, ParaphraseArgs};
use paraphrase::cli::commands::{execute_command, load_config, load_pairs, score_batch};
use paraphrase::error::{ParaphraseError, Result};
use paraphrase::similarity::SimilarityScorer;

use clap::Parser;
use tempfile::NamedTempFile;

fn write_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

#[test]
fn test_batch_file_scoring() -> Result<()> {
    let file = write_file(&[
        r#"{"question1": "What is the capital of France?", "question2": "What's the capital city of France?"}"#,
        r#"{"question1": "How do I learn Python?", "question2": "What is the best pizza topping?"}"#,
        r#"{"question1": "broken"#,
        "",
        r#"{"question1": "How do I learn Rust?", "question2": "How can I learn Rust quickly?"}"#,
    ]);

    let scorer = SimilarityScorer::new(load_config(None)?)?;
    let lines = load_pairs(file.path())?;
    let report = score_batch(&scorer, &lines);

    let line_numbers: Vec<usize> = report.records.iter().map(|r| r.line).collect();
    assert_eq!(line_numbers, vec![1, 2, 3, 5]);

    let confidences: Vec<Option<u8>> = report
        .records
        .iter()
        .map(|r| r.result.map(|result| result.confidence))
        .collect();
    assert_eq!(confidences, vec![Some(60), Some(0), None, Some(70)]);
    assert!(report.records[2].error.is_some());

    assert_eq!(report.summary.pairs, 3);
    assert_eq!(report.summary.similar, 2);
    assert_eq!(report.summary.errors, 1);
    assert!((report.summary.mean_confidence - 130.0 / 3.0).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_batch_empty_questions_score_zero() -> Result<()> {
    let file = write_file(&[r#"{"question1": "", "question2": "How do I learn Rust?"}"#]);

    let scorer = SimilarityScorer::new(load_config(None)?)?;
    let report = score_batch(&scorer, &load_pairs(file.path())?);

    let result = report.records[0].result.unwrap();
    assert_eq!(result.confidence, 0);
    assert!(!result.is_similar);

    Ok(())
}

#[test]
fn test_config_file_applies_threshold() -> Result<()> {
    let config_file = write_file(&[r#"{"threshold": 70}"#]);
    let config = load_config(Some(config_file.path()))?;
    assert_eq!(config.threshold, 70);
    assert_eq!(config.jaccard_weight, 0.4);

    let pairs = write_file(&[
        r#"{"question1": "What is the capital of France?", "question2": "What's the capital city of France?"}"#,
    ]);
    let scorer = SimilarityScorer::new(config)?;
    let report = score_batch(&scorer, &load_pairs(pairs.path())?);
    assert_eq!(report.summary.similar, 0);

    Ok(())
}

#[test]
fn test_invalid_config_file() {
    let config_file = write_file(&[r#"{"jaccard_weight": 0.9, "cosine_weight": 0.9}"#]);
    let err = load_config(Some(config_file.path())).unwrap_err();
    assert!(matches!(err, ParaphraseError::Config(_)));

    let config_file = write_file(&["not json"]);
    let err = load_config(Some(config_file.path())).unwrap_err();
    assert!(matches!(err, ParaphraseError::Json(_)));
}

#[test]
fn test_compare_command_rejects_blank_question() {
    let args = ParaphraseArgs::try_parse_from(["paraphrase", "compare", "  ", "How?"]).unwrap();
    assert!(matches!(args.command, Command::Compare(_)));

    let err = execute_command(args).unwrap_err();
    assert!(matches!(err, ParaphraseError::InvalidArgument(_)));
}

#[test]
fn test_batch_command_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("pairs.jsonl");
    let args = ParaphraseArgs::try_parse_from([
        OsString::from("paraphrase"),
        OsString::from("batch"),
        missing.into_os_string(),
    ])
    .unwrap();

    let err = execute_command(args).unwrap_err();
    assert!(matches!(err, ParaphraseError::Io(_)));
}
