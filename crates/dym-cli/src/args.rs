//! Command-line argument parsing

use crate::commands::Command;
use clap::{Parser, ValueEnum};

/// dym - did-you-mean typo interception
///
/// Detects hostnames that look like typos of popular domains and decides
/// whether to warn, redirect, or pass through. These commands exercise the
/// engine outside a proxy host.
#[derive(Parser, Debug)]
#[command(name = "dym")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format for logs
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Log file path
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<String>,

    /// Run in quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// Compact format
    Compact,
}
