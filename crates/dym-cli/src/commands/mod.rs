//! CLI commands

pub mod check;
pub mod completions;
pub mod config;
pub mod decide;
pub mod domains;

use anyhow::{Context, Result};
use clap::Subcommand;
use dym_core::Config;
use std::path::PathBuf;

/// CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up the closest popular domain for a hostname
    Check(check::CheckArgs),

    /// Simulate one intercepted request and print the decision
    Decide(decide::DecideArgs),

    /// List the active popular-domain dictionary
    Domains(domains::DomainsArgs),

    /// Configuration management
    Config(config::ConfigArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load the configuration selected by `--config`, falling back to the
/// search paths and then to built-in defaults.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path {
        return Config::load(path).with_context(|| format!("Failed to load config from {path}"));
    }

    if let Some(path) = find_config_file() {
        return Config::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    Ok(Config::default())
}

/// Search the default config file locations.
pub fn find_config_file() -> Option<PathBuf> {
    let candidates = [PathBuf::from("dym.toml"), PathBuf::from("config.toml")];

    for path in candidates {
        if path.exists() {
            return Some(path);
        }
    }

    if let Some(dirs) = directories::ProjectDirs::from("", "", "dym") {
        let path = dirs.config_dir().join("config.toml");
        if path.exists() {
            return Some(path);
        }
    }

    None
}
