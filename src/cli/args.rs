//! Command line argument parsing for the paraphrase CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Paraphrase - decide whether two questions ask the same thing
#[derive(Parser, Debug, Clone)]
#[command(name = "paraphrase")]
#[command(about = "Lexical question similarity scoring")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ParaphraseArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Similarity configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ParaphraseArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compare two questions
    Compare(CompareArgs),

    /// Show the tokens, scores and pair features behind a comparison
    Explain(CompareArgs),

    /// Score every question pair in a JSONL file
    Batch(BatchArgs),
}

/// Arguments for comparing a question pair
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// First question
    #[arg(value_name = "QUESTION1")]
    pub question1: String,

    /// Second question
    #[arg(value_name = "QUESTION2")]
    pub question2: String,
}

/// Arguments for batch scoring
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// JSONL file with one {"question1": .., "question2": ..} object per line
    #[arg(value_name = "PAIRS_FILE")]
    pub input: PathBuf,

    /// Only print the summary
    #[arg(long)]
    pub summary_only: bool,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
