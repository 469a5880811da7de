//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// joblens - Extract job postings from scanned PDFs and evaluate the results.
#[derive(Debug, Parser)]
#[command(name = "joblens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (failures only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract job postings from a scanned PDF via the OpenRouter API
    Extract(ExtractArgs),

    /// Score two extraction outputs against each other
    Score(ScoreArgs),

    /// Check an extraction output against expected field values
    Check(CheckArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Path to the PDF file
    pub pdf: PathBuf,

    /// Directory for the extracted JSON
    #[arg(short, long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Model to use (overrides the configured default)
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// First extraction output (JSON)
    pub file_a: PathBuf,

    /// Second extraction output (JSON)
    pub file_b: PathBuf,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Extraction output to check (JSON array of postings)
    pub file: PathBuf,

    /// Expectations TOML file
    #[arg(short, long)]
    pub expected: PathBuf,

    /// Source identifier within the expectations file (defaults to the
    /// input file's stem)
    #[arg(short, long)]
    pub source_id: Option<String>,

    /// Pass/fail threshold for the fuzzy score (0-100, inclusive)
    #[arg(short, long)]
    pub threshold: Option<u32>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
