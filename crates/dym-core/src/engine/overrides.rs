//! Per-host override state
//!
//! Remembers explicit user decisions for the lifetime of the engine. Keys
//! are the exact hostname string as received; no case or scheme
//! normalization is applied, so `Example.com` and `example.com` carry
//! independent states.

use dashmap::DashMap;

/// A user's explicit decision for one host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideKind {
    /// Never intercept this host.
    Whitelist,
    /// Always redirect this host silently instead of warning.
    Blacklist,
}

/// Process-lifetime store of per-host overrides. Last write wins.
// TODO: back with an external store so overrides survive restarts
#[derive(Debug, Default)]
pub struct OverrideStore {
    entries: DashMap<String, OverrideKind>,
}

impl OverrideStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Set the override for a host unconditionally.
    pub fn set(&self, host: &str, kind: OverrideKind) {
        self.entries.insert(host.to_string(), kind);
    }

    /// The current override for a host, if any.
    pub fn get(&self, host: &str) -> Option<OverrideKind> {
        self.entries.get(host).map(|entry| *entry.value())
    }

    /// Number of hosts with an override.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no overrides are recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all overrides.
    pub fn clear(&self) {
        self.entries.clear();
    }
}
