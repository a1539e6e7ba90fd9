//! Configuration management
//!
//! Strongly-typed TOML configuration for the engine and its host embedding,
//! with defaults that reproduce the built-in behavior when no file is given.

use crate::control::DEFAULT_SENTINEL_HOST;
use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::matcher::DEFAULT_MAX_DISTANCE;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fuzzy matcher settings
    pub matcher: MatcherConfig,

    /// Engine/host embedding settings
    pub engine: EngineConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| Error::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(Error::from)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.matcher.max_distance == 0 {
            return Err(Error::config_value(
                "matcher.max_distance",
                "must be at least 1",
            ));
        }
        if self.matcher.max_distance > 3 {
            return Err(Error::config_value(
                "matcher.max_distance",
                "radii above 3 flood short domain keys with false positives",
            ));
        }
        if self.engine.sentinel_host.is_empty() {
            return Err(Error::config_value(
                "engine.sentinel_host",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

/// Fuzzy matcher configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Maximum edit distance for a match (1-3)
    pub max_distance: usize,
    /// Inline dictionary; empty means the built-in list
    pub domains: Vec<String>,
    /// Dictionary file, one domain per line; takes precedence over `domains`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains_file: Option<String>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            domains: Vec::new(),
            domains_file: None,
        }
    }
}

impl MatcherConfig {
    /// Build the dictionary this configuration selects.
    pub fn build_dictionary(&self) -> Result<Dictionary> {
        if let Some(path) = &self.domains_file {
            Dictionary::from_file(path)
        } else if !self.domains.is_empty() {
            Dictionary::from_names(&self.domains)
        } else {
            Ok(Dictionary::builtin().clone())
        }
    }
}

/// Engine/host embedding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Sentinel hostname whose requests carry override updates
    pub sentinel_host: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sentinel_host: DEFAULT_SENTINEL_HOST.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Enable JSON format logging
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}
