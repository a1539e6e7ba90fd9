//! Logging initialization

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::args::{Args, LogFormat};

/// Initialize logging based on CLI arguments
///
/// Diagnostics go to stderr so command output on stdout stays clean; an
/// optional log file receives a plain-text copy.
pub fn init(args: &Args) -> Result<()> {
    let level = if args.quiet {
        Level::ERROR
    } else {
        match args.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(env_filter);

    let file_layer = match args.log_file {
        Some(ref path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file: {path}"))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(std::sync::Arc::new(file)),
            )
        }
        None => None,
    };

    let stderr_layer = match args.log_format {
        LogFormat::Text => fmt::layer()
            .with_target(args.verbose >= 2)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .boxed(),
    };

    registry.with(stderr_layer).with(file_layer).init();

    Ok(())
}
