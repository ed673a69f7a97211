//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Reduced transcript, then the target, one per line
    #[default]
    Text,
    /// A single JSON object with every applied merge
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "phonoreduce")]
#[command(about = "Merge acoustically close IPA syllables until a target count remains")]
#[command(version)]
pub struct Cli {
    /// Transcript file, `.`-separated IPA syllables (prompted for when omitted)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Target number of distinct syllables (prompted for when omitted)
    #[arg(short, long, allow_negative_numbers = true)]
    pub target: Option<i64>,

    /// Reducer configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log every merge to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
