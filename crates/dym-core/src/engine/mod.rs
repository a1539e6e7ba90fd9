//! Interception decision engine
//!
//! Turns one intercepted request plus the per-host override state into a
//! single decision, and accepts override updates from the control path.

mod overrides;

pub use overrides::{OverrideKind, OverrideStore};

use crate::config::Config;
use crate::control;
use crate::decision::{corrected_url, Decision};
use crate::error::Result;
use crate::matcher::DomainMatcher;
use crate::request::RequestInfo;
use parking_lot::RwLock;
use tracing::{debug, info};

/// Counters for decisions made over the engine's lifetime.
#[derive(Debug, Default, Clone)]
pub struct DecisionStats {
    /// Requests examined.
    pub requests: u64,
    /// Requests passed through untouched.
    pub passed: u64,
    /// Requests answered with a warning page.
    pub warned: u64,
    /// Requests redirected to the corrected domain.
    pub redirected: u64,
    /// Pass-throughs forced by a whitelist entry.
    pub whitelist_skips: u64,
}

/// The decision engine: an immutable matcher plus mutable override state.
///
/// All operations take `&self`, so one engine value can be shared across
/// the host's worker threads.
pub struct InterceptEngine {
    matcher: DomainMatcher,
    overrides: OverrideStore,
    sentinel_host: String,
    stats: RwLock<DecisionStats>,
}

impl InterceptEngine {
    /// Create an engine around an existing matcher, with the default
    /// sentinel hostname and no overrides.
    pub fn new(matcher: DomainMatcher) -> Self {
        Self {
            matcher,
            overrides: OverrideStore::new(),
            sentinel_host: control::DEFAULT_SENTINEL_HOST.to_string(),
            stats: RwLock::default(),
        }
    }

    /// Build the engine a configuration describes.
    ///
    /// Validates the configuration, then assembles the dictionary (file
    /// over inline list over built-in) and the matcher. Construction is the
    /// only fallible operation; everything after it is infallible.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let dictionary = config.matcher.build_dictionary()?;
        let matcher = DomainMatcher::with_max_distance(dictionary, config.matcher.max_distance);

        info!(
            domains = matcher.dictionary().len(),
            max_distance = matcher.max_distance(),
            sentinel = %config.engine.sentinel_host,
            "interception engine ready"
        );

        Ok(Self {
            matcher,
            overrides: OverrideStore::new(),
            sentinel_host: config.engine.sentinel_host.clone(),
            stats: RwLock::default(),
        })
    }

    /// The matcher this engine consults.
    pub fn matcher(&self) -> &DomainMatcher {
        &self.matcher
    }

    /// The per-host override store.
    pub fn overrides(&self) -> &OverrideStore {
        &self.overrides
    }

    /// Whether a hostname addresses the control endpoint rather than a
    /// destination. The host routes such requests to [`handle_control`]
    /// instead of [`decide`].
    ///
    /// [`handle_control`]: Self::handle_control
    /// [`decide`]: Self::decide
    pub fn is_control_request(&self, host: &str) -> bool {
        host == self.sentinel_host
    }

    /// Decide what to do with one intercepted request.
    ///
    /// A whitelist entry short-circuits everything, including hosts that
    /// are close typos of popular domains. Otherwise a match either warns
    /// (no override) or redirects (blacklisted host).
    pub fn decide(&self, request: &RequestInfo) -> Decision {
        let state = self.overrides.get(&request.host);
        let mut whitelist_skip = false;

        let decision = if state == Some(OverrideKind::Whitelist) {
            whitelist_skip = true;
            debug!(host = %request.host, "whitelisted, passing through");
            Decision::PassThrough
        } else if let Some(suggestion) = self.matcher.suggest(&request.host) {
            if state == Some(OverrideKind::Blacklist) {
                let target_url = corrected_url(&request.scheme, suggestion.canonical_form());
                debug!(host = %request.host, target = %target_url, "blacklisted, redirecting");
                Decision::Redirect {
                    to: suggestion.clone(),
                    target_url,
                }
            } else {
                debug!(
                    host = %request.host,
                    suggestion = suggestion.canonical_form(),
                    "serving warning page"
                );
                Decision::Warn {
                    requested: request.host.clone(),
                    suggestion: suggestion.clone(),
                    original_url: request.url.clone(),
                }
            }
        } else {
            Decision::PassThrough
        };

        let mut stats = self.stats.write();
        stats.requests += 1;
        if whitelist_skip {
            stats.whitelist_skips += 1;
        }
        match &decision {
            Decision::PassThrough => stats.passed += 1,
            Decision::Redirect { .. } => stats.redirected += 1,
            Decision::Warn { .. } => stats.warned += 1,
        }

        decision
    }

    /// Record a user override for a host. Last write wins; the next
    /// `decide` call for the exact same host string reflects it.
    ///
    /// Any string is accepted, including hosts never seen before and hosts
    /// absent from the popular dictionary.
    pub fn record_override(&self, host: &str, kind: OverrideKind) {
        debug!(host, ?kind, "recording override");
        self.overrides.set(host, kind);
    }

    /// Apply the query string of a control request.
    pub fn handle_control(&self, query: &str) {
        for command in control::parse_query(query) {
            self.record_override(&command.host, command.kind);
        }
    }

    /// Snapshot of the decision counters.
    pub fn stats(&self) -> DecisionStats {
        self.stats.read().clone()
    }

    /// Reset the decision counters.
    pub fn reset_stats(&self) {
        *self.stats.write() = DecisionStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn engine(names: &[&str]) -> InterceptEngine {
        let dictionary = Dictionary::from_names(names.iter().copied()).unwrap();
        InterceptEngine::new(DomainMatcher::new(dictionary))
    }

    fn request(host: &str) -> RequestInfo {
        RequestInfo::new(host, "https", format!("https://{host}/"))
    }

    #[test]
    fn test_no_match_passes_through() {
        let engine = engine(&["gmail.com"]);
        assert_eq!(engine.decide(&request("example.org")), Decision::PassThrough);
    }

    #[test]
    fn test_typo_warns_by_default() {
        let engine = engine(&["gmail.com"]);

        match engine.decide(&request("gamil.com")) {
            Decision::Warn {
                requested,
                suggestion,
                original_url,
            } => {
                assert_eq!(requested, "gamil.com");
                assert_eq!(suggestion.canonical_form(), "gmail.com");
                assert_eq!(original_url, "https://gamil.com/");
            }
            other => panic!("expected Warn, got {other:?}"),
        }
    }

    #[test]
    fn test_whitelist_dominates_matching() {
        let engine = engine(&["gmail.com"]);
        engine.record_override("gamil.com", OverrideKind::Whitelist);

        assert_eq!(engine.decide(&request("gamil.com")), Decision::PassThrough);
    }

    #[test]
    fn test_blacklist_redirects() {
        let engine = engine(&["gmail.com"]);
        engine.record_override("gamil.com", OverrideKind::Blacklist);

        match engine.decide(&request("gamil.com")) {
            Decision::Redirect { to, target_url } => {
                assert_eq!(to.canonical_form(), "gmail.com");
                assert_eq!(target_url, "https://gmail.com/");
            }
            other => panic!("expected Redirect, got {other:?}"),
        }
    }

    #[test]
    fn test_blacklist_without_match_passes_through() {
        let engine = engine(&["gmail.com"]);
        engine.record_override("example.org", OverrideKind::Blacklist);

        assert_eq!(engine.decide(&request("example.org")), Decision::PassThrough);
    }

    #[test]
    fn test_stats_counters() {
        let engine = engine(&["gmail.com"]);
        engine.record_override("ok.com", OverrideKind::Whitelist);
        engine.record_override("gmial.com", OverrideKind::Blacklist);

        engine.decide(&request("ok.com")); // whitelist skip
        engine.decide(&request("gamil.com")); // warn
        engine.decide(&request("gmial.com")); // redirect
        engine.decide(&request("unrelated.org")); // plain pass

        let stats = engine.stats();
        assert_eq!(stats.requests, 4);
        assert_eq!(stats.passed, 2);
        assert_eq!(stats.warned, 1);
        assert_eq!(stats.redirected, 1);
        assert_eq!(stats.whitelist_skips, 1);

        engine.reset_stats();
        assert_eq!(engine.stats().requests, 0);
    }

    #[test]
    fn test_control_routing() {
        let engine = engine(&["gmail.com"]);
        assert!(engine.is_control_request("mitm.it"));
        assert!(!engine.is_control_request("gmail.com"));
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InterceptEngine>();
    }
}
