//! CLI argument parsing for movierank
//!
//! Uses clap derive. Configuration flags override values from the
//! optional config file.

pub mod parse;

use clap::Parser;
use std::path::PathBuf;

pub use movierank_core::format::OutputFormat;
use parse::{parse_output_format, parse_positive_count};

/// Movierank - rank movies from a Title|Director|Year|Rating file
#[derive(Parser, Debug)]
#[command(name = "movierank")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Movie file to analyze (prompted for when omitted)
    pub file: Option<PathBuf>,

    /// Number of top-rated movies to show [default: 10]
    #[arg(long = "top", short = 'n', value_parser = parse_positive_count)]
    pub top: Option<usize>,

    /// Maximum number of movies to accept; later input is not read [default: 300]
    #[arg(long, value_parser = parse_positive_count)]
    pub max_records: Option<usize>,

    /// Path to a config.toml with analyzer settings
    #[arg(long, env = "MOVIERANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also write the report to this file
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `movierank_core=trace`)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}
