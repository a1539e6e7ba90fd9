//! Domains command - list the active dictionary

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

/// Domains command arguments
#[derive(Args, Debug)]
pub struct DomainsArgs {
    /// Print normalized keys alongside canonical forms
    #[arg(long)]
    pub keys: bool,
}

/// Execute domains command
pub fn execute(args: &DomainsArgs, config_path: Option<&str>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let dictionary = config
        .matcher
        .build_dictionary()
        .context("Failed to build dictionary")?;

    println!(
        "{} correction targets (search radius {}):",
        dictionary.len(),
        config.matcher.max_distance
    );

    for domain in dictionary.entries() {
        if args.keys {
            println!(
                "  {}  {}",
                domain.canonical_form(),
                domain.normalized_key().dimmed()
            );
        } else {
            println!("  {}", domain.canonical_form());
        }
    }

    Ok(())
}
