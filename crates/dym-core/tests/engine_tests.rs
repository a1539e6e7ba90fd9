//! Integration tests for the interception decision engine

use dym_core::{Config, Decision, InterceptEngine, OverrideKind, RequestInfo};

fn two_domain_engine() -> InterceptEngine {
    let mut config = Config::default();
    config.matcher.domains = vec!["google.com".to_string(), "gmail.com".to_string()];
    InterceptEngine::from_config(&config).unwrap()
}

fn https_request(host: &str) -> RequestInfo {
    RequestInfo::new(host, "https", format!("https://{host}/"))
}

// ============ End-to-end scenarios ============

#[test]
fn test_fresh_typo_serves_warning() {
    let engine = two_domain_engine();

    let decision = engine.decide(&https_request("gogle.com"));
    match decision {
        Decision::Warn {
            ref requested,
            ref suggestion,
            ref original_url,
        } => {
            assert_eq!(requested, "gogle.com");
            assert_eq!(suggestion.canonical_form(), "google.com");
            assert_eq!(original_url, "https://gogle.com/");
        }
        ref other => panic!("expected Warn, got {other:?}"),
    }

    // Renderer fields derive from the decision alone.
    let ctx = decision.warn_context().unwrap();
    assert_eq!(ctx.original_host, "gogle.com");
    assert_eq!(ctx.corrected_host, "google.com");
    assert_eq!(ctx.corrected_url, "https://google.com/");
    assert_eq!(ctx.original_url, "https://gogle.com/");
}

#[test]
fn test_blacklisted_typo_redirects() {
    let engine = two_domain_engine();
    engine.record_override("gogle.com", OverrideKind::Blacklist);

    match engine.decide(&https_request("gogle.com")) {
        Decision::Redirect { to, target_url } => {
            assert_eq!(to.canonical_form(), "google.com");
            assert_eq!(target_url, "https://google.com/");
        }
        other => panic!("expected Redirect, got {other:?}"),
    }
}

#[test]
fn test_redirect_keeps_request_scheme() {
    let engine = two_domain_engine();
    engine.record_override("gogle.com", OverrideKind::Blacklist);

    let request = RequestInfo::new("gogle.com", "http", "http://gogle.com/search?q=x");
    match engine.decide(&request) {
        Decision::Redirect { target_url, .. } => {
            assert_eq!(target_url, "http://google.com/");
        }
        other => panic!("expected Redirect, got {other:?}"),
    }
}

// ============ Override semantics ============

#[test]
fn test_whitelist_dominates_even_for_close_typos() {
    let engine = two_domain_engine();
    engine.record_override("gogle.com", OverrideKind::Whitelist);

    assert_eq!(
        engine.decide(&https_request("gogle.com")),
        Decision::PassThrough
    );
}

#[test]
fn test_override_is_idempotent_and_last_write_wins() {
    let engine = two_domain_engine();

    engine.record_override("gogle.com", OverrideKind::Whitelist);
    engine.record_override("gogle.com", OverrideKind::Whitelist);
    assert_eq!(engine.overrides().len(), 1);
    assert_eq!(
        engine.decide(&https_request("gogle.com")),
        Decision::PassThrough
    );

    engine.record_override("gogle.com", OverrideKind::Blacklist);
    assert!(matches!(
        engine.decide(&https_request("gogle.com")),
        Decision::Redirect { .. }
    ));
}

#[test]
fn test_override_keys_are_exact_strings() {
    let engine = two_domain_engine();
    engine.record_override("Gogle.com", OverrideKind::Whitelist);

    // The lowercase request still warns; only the exact string is whitelisted.
    assert!(matches!(
        engine.decide(&https_request("gogle.com")),
        Decision::Warn { .. }
    ));
}

#[test]
fn test_override_accepts_unknown_hosts() {
    let engine = two_domain_engine();

    // Hosts outside the dictionary are accepted and simply never match.
    engine.record_override("not-a-popular-domain.org", OverrideKind::Blacklist);
    assert_eq!(
        engine.decide(&https_request("not-a-popular-domain.org")),
        Decision::PassThrough
    );
}

// ============ Control path ============

#[test]
fn test_control_query_blacklists_host() {
    let engine = two_domain_engine();
    engine.handle_control("blacklist=gogle.com");

    assert!(matches!(
        engine.decide(&https_request("gogle.com")),
        Decision::Redirect { .. }
    ));
}

#[test]
fn test_control_query_whitelist_overwrites_blacklist() {
    let engine = two_domain_engine();
    engine.handle_control("blacklist=gogle.com&whitelist=gogle.com");

    assert_eq!(
        engine.decide(&https_request("gogle.com")),
        Decision::PassThrough
    );
}

#[test]
fn test_custom_sentinel_host() {
    let mut config = Config::default();
    config.engine.sentinel_host = "control.local".to_string();
    let engine = InterceptEngine::from_config(&config).unwrap();

    assert!(engine.is_control_request("control.local"));
    assert!(!engine.is_control_request("mitm.it"));
}

// ============ Construction ============

#[test]
fn test_invalid_config_rejected_at_construction() {
    let mut config = Config::default();
    config.matcher.max_distance = 0;
    assert!(InterceptEngine::from_config(&config).is_err());
}

#[test]
fn test_duplicate_dictionary_entries_rejected_at_construction() {
    let mut config = Config::default();
    config.matcher.domains = vec!["abc.com".to_string(), "ab.c.com".to_string()];
    assert!(InterceptEngine::from_config(&config).is_err());
}

#[test]
fn test_builtin_dictionary_by_default() {
    let engine = InterceptEngine::from_config(&Config::default()).unwrap();
    assert!(matches!(
        engine.decide(&https_request("gamil.com")),
        Decision::Warn { .. }
    ));
}
