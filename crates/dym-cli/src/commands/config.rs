//! Config command - configuration management

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use dym_core::Config;
use std::path::PathBuf;
use tracing::info;

/// Config command arguments
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show {
        /// Config file to show (default: detect)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Generate a configuration file with defaults
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "dym.toml")]
        output: PathBuf,
    },

    /// Validate a configuration file
    Validate {
        /// Config file to validate
        file: PathBuf,
    },

    /// Show config file locations
    Paths,
}

/// Execute config command
pub fn execute(args: &ConfigArgs, config_path: Option<&str>) -> Result<()> {
    match &args.action {
        ConfigAction::Show { file } => show_config(file.as_deref(), config_path),
        ConfigAction::Generate { output } => generate_config(output),
        ConfigAction::Validate { file } => validate_config(file),
        ConfigAction::Paths => show_paths(),
    }
}

fn show_config(file: Option<&std::path::Path>, config_path: Option<&str>) -> Result<()> {
    let config = if let Some(path) = file {
        Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?
    } else {
        super::load_config(config_path)?
    };

    let toml_str = config.to_toml().context("Failed to serialize config")?;
    println!("{toml_str}");
    Ok(())
}

fn generate_config(output: &std::path::Path) -> Result<()> {
    let toml_str = Config::default()
        .to_toml()
        .context("Failed to serialize config")?;

    let content = format!(
        "# dym configuration\n\
         # An empty [matcher] domains list selects the built-in dictionary\n\n\
         {toml_str}"
    );

    std::fs::write(output, content)
        .with_context(|| format!("Failed to write config to {}", output.display()))?;

    info!("Generated config file: {}", output.display());
    println!("Configuration file generated: {}", output.display());

    Ok(())
}

fn validate_config(file: &std::path::Path) -> Result<()> {
    let config = Config::load(file)
        .with_context(|| format!("Failed to load config from {}", file.display()))?;

    config
        .validate()
        .context("Configuration validation failed")?;

    // Exercise dictionary construction too; duplicate keys are a
    // construction-time failure, not a decide-time one.
    let dictionary = config
        .matcher
        .build_dictionary()
        .context("Dictionary construction failed")?;

    println!("✓ Configuration is valid");
    println!("  Max distance: {}", config.matcher.max_distance);
    println!("  Domains: {}", dictionary.len());
    println!("  Sentinel host: {}", config.engine.sentinel_host);

    Ok(())
}

fn show_paths() -> Result<()> {
    println!("Configuration file search paths:");
    println!();
    println!("  1. ./dym.toml");
    println!("  2. ./config.toml");

    if let Some(dirs) = directories::ProjectDirs::from("", "", "dym") {
        println!("  3. {}/config.toml", dirs.config_dir().display());
    }

    Ok(())
}
