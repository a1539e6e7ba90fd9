//! Check command - one-shot suggestion lookup

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use dym_core::InterceptEngine;

/// Check command arguments
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Hostname to check
    pub host: String,

    /// Override the configured search radius (1-3)
    #[arg(long, value_name = "N")]
    pub max_distance: Option<usize>,
}

/// Execute check command
pub fn execute(args: &CheckArgs, config_path: Option<&str>) -> Result<()> {
    let mut config = super::load_config(config_path)?;
    if let Some(distance) = args.max_distance {
        config.matcher.max_distance = distance;
    }

    let engine =
        InterceptEngine::from_config(&config).context("Failed to build interception engine")?;

    match engine.matcher().suggest(&args.host) {
        Some(domain) => {
            println!(
                "{} looks like a typo of {}",
                args.host,
                domain.canonical_form().green().bold()
            );
        }
        None => {
            println!("{} {}", args.host, "(no suggestion)".dimmed());
        }
    }

    Ok(())
}
