//! Decide command - simulate one intercepted request

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use dym_core::{Decision, InterceptEngine, OverrideKind, RequestInfo};

/// Decide command arguments
#[derive(Args, Debug)]
pub struct DecideArgs {
    /// Hostname of the simulated request
    pub host: String,

    /// Request scheme
    #[arg(long, default_value = "https")]
    pub scheme: String,

    /// Full request URL (default: `{scheme}://{host}/`)
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Seed a whitelist override before deciding (repeatable)
    #[arg(long, value_name = "HOST")]
    pub whitelist: Vec<String>,

    /// Seed a blacklist override before deciding (repeatable)
    #[arg(long, value_name = "HOST")]
    pub blacklist: Vec<String>,

    /// Print the decision as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute decide command
pub fn execute(args: &DecideArgs, config_path: Option<&str>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let engine =
        InterceptEngine::from_config(&config).context("Failed to build interception engine")?;

    for host in &args.blacklist {
        engine.record_override(host, OverrideKind::Blacklist);
    }
    for host in &args.whitelist {
        engine.record_override(host, OverrideKind::Whitelist);
    }

    let url = args
        .url
        .clone()
        .unwrap_or_else(|| format!("{}://{}/", args.scheme, args.host));
    let request = RequestInfo::new(&args.host, &args.scheme, url);

    let decision = engine.decide(&request);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
        return Ok(());
    }

    match &decision {
        Decision::PassThrough => {
            println!("{}  {}", "pass".green().bold(), args.host);
        }
        Decision::Redirect { to, target_url } => {
            println!(
                "{}  {} -> {} (301 {})",
                "redirect".red().bold(),
                args.host,
                to.canonical_form(),
                target_url
            );
        }
        Decision::Warn { suggestion, .. } => {
            println!(
                "{}  {} - did you mean {}?",
                "warn".yellow().bold(),
                args.host,
                suggestion.canonical_form().bold()
            );
            if let Some(page) = decision.warn_context() {
                println!("  original:  {}", page.original_url);
                println!("  corrected: {}", page.corrected_url);
            }
        }
    }

    Ok(())
}
