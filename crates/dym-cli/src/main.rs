//! dym CLI
//!
//! Operator interface for the typo-interception engine: one-shot suggestion
//! checks, decision simulation, and configuration management.

mod args;
mod commands;
mod logging;

use anyhow::Result;
use args::Args;
use clap::Parser;
use commands::Command;
use tracing::error;

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(&args)?;

    let result = run(&args);
    if let Err(ref e) = result {
        error!("Fatal error: {:#}", e);
    }
    result
}

fn run(args: &Args) -> Result<()> {
    let config_path = args.config.as_deref();

    match &args.command {
        Command::Check(check_args) => commands::check::execute(check_args, config_path),
        Command::Decide(decide_args) => commands::decide::execute(decide_args, config_path),
        Command::Domains(domains_args) => commands::domains::execute(domains_args, config_path),
        Command::Config(config_args) => commands::config::execute(config_args, config_path),
        Command::Completions(comp_args) => commands::completions::execute(comp_args),
    }
}
