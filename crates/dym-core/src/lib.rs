//! # dym-core
//!
//! Host-independent typo-domain interception engine.
//!
//! ## Architecture
//!
//! This crate provides:
//! - **Fuzzy domain matching** - deletion-indexed edit-distance lookup over
//!   a fixed popular-domain dictionary
//! - **Decision engine** - per-host override state turning matches into
//!   pass/warn/redirect decisions
//! - **Control path** - sentinel-request query parsing for whitelist and
//!   blacklist updates
//! - **Configuration** - TOML-backed settings for the dictionary, search
//!   radius, and logging
//!
//! ## Example
//!
//! ```rust
//! use dym_core::{Config, Decision, InterceptEngine, RequestInfo};
//!
//! let engine = InterceptEngine::from_config(&Config::default())?;
//!
//! let request = RequestInfo::new("gamil.com", "https", "https://gamil.com/");
//! match engine.decide(&request) {
//!     Decision::Warn { suggestion, .. } => {
//!         assert_eq!(suggestion.canonical_form(), "gmail.com");
//!     }
//!     other => panic!("expected a warning, got {other:?}"),
//! }
//! # Ok::<(), dym_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod control;
pub mod decision;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod request;

// Re-exports for convenience
pub use config::Config;
pub use decision::{Decision, WarnContext};
pub use dictionary::{Dictionary, PopularDomain};
pub use engine::{DecisionStats, InterceptEngine, OverrideKind, OverrideStore};
pub use error::{Error, Result};
pub use matcher::DomainMatcher;
pub use request::RequestInfo;
