use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::types::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "brad-similarity",
    version,
    about = "Score reported domains against known ones for typosquatting"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to config file (TOML). Default: config/brad.toml
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Increase verbosity (debug, trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank a corpus of known domains against a target
    Rank {
        /// Domain to check
        target: String,
        /// Corpus file: one domain per line, or reports as JSONL
        #[arg(long)]
        corpus: PathBuf,
        /// Keep at most this many results (0 = all)
        #[arg(long)]
        max_results: Option<usize>,
        /// Drop results scoring below this value
        #[arg(long)]
        min_score: Option<f64>,
        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormatArg>,
        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Score a single pair of domains
    Compare {
        a: String,
        b: String,
    },
    /// Export pairwise features of decided reports as CSV
    ExportFeatures {
        /// Reports JSONL with `domain` and `investigatorDecision`
        #[arg(long)]
        reports: PathBuf,
        /// Destination CSV
        #[arg(long, default_value = "domain_features.csv")]
        output: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Json,
    Jsonl,
    Csv,
    Markdown,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Jsonl => OutputFormat::Jsonl,
            OutputFormatArg::Csv => OutputFormat::Csv,
            OutputFormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}
