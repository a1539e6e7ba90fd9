//! Error types for dym-core
//!
//! Centralized error handling using `thiserror` for ergonomic error definitions.
//! Every variant is a construction-time failure; `suggest`, `decide`, and
//! `record_override` are infallible by contract.

use thiserror::Error;

/// Main error type for dym-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Two dictionary entries collapse to the same normalized key
    #[error("Duplicate normalized key '{key}': '{first}' and '{second}' are indistinguishable after dot removal")]
    DuplicateNormalizedKey {
        /// The colliding key (canonical form with dots removed)
        key: String,
        /// Canonical form that registered the key first
        first: String,
        /// Canonical form that collided with it
        second: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path to the missing config file
        path: String,
    },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    ConfigValue {
        /// Configuration key
        key: String,
        /// Error message
        message: String,
    },

    /// Dictionary file error
    #[error("Dictionary file error for '{path}': {message}")]
    DictionaryFile {
        /// Path to the dictionary file
        path: String,
        /// Error message
        message: String,
    },

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a duplicate-key error
    pub fn duplicate_key(
        key: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self::DuplicateNormalizedKey {
            key: key.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create a config value error
    pub fn config_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValue {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a dictionary file error
    pub fn dictionary_file(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DictionaryFile {
            path: path.into(),
            message: message.into(),
        }
    }
}
