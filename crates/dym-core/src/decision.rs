//! Decision outcomes handed back to the interception host.

use crate::dictionary::PopularDomain;
use serde::Serialize;

/// Outcome of one `decide` call. Exactly one case is active per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Decision {
    /// No action; the request proceeds untouched.
    PassThrough,
    /// The host must issue a 301 redirect.
    Redirect {
        /// Corrected destination domain.
        to: PopularDomain,
        /// `{scheme}://{canonical_form}/`, ready for the `Location` header.
        target_url: String,
    },
    /// The host must render a warning page offering the correction.
    Warn {
        /// Hostname exactly as requested.
        requested: String,
        /// Closest popular domain.
        suggestion: PopularDomain,
        /// Full URL of the intercepted request.
        original_url: String,
    },
}

/// Build the corrected root URL for a scheme and canonical domain.
pub fn corrected_url(scheme: &str, canonical_form: &str) -> String {
    format!("{scheme}://{canonical_form}/")
}

/// Named substitution fields for the warning-page renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarnContext {
    /// Full URL of the intercepted request.
    pub original_url: String,
    /// Hostname exactly as requested.
    pub original_host: String,
    /// Canonical form of the suggested domain.
    pub corrected_host: String,
    /// Root URL of the suggested domain, same scheme as the request.
    pub corrected_url: String,
}

impl Decision {
    /// Renderer parameters for a `Warn` decision; `None` otherwise.
    ///
    /// The scheme for `corrected_url` is recovered from `original_url`;
    /// URLs without a scheme fall back to `https`.
    pub fn warn_context(&self) -> Option<WarnContext> {
        let Decision::Warn {
            requested,
            suggestion,
            original_url,
        } = self
        else {
            return None;
        };

        let scheme = original_url
            .split_once("://")
            .map_or("https", |(scheme, _)| scheme);

        Some(WarnContext {
            original_url: original_url.clone(),
            original_host: requested.clone(),
            corrected_host: suggestion.canonical_form().to_string(),
            corrected_url: corrected_url(scheme, suggestion.canonical_form()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn gmail() -> PopularDomain {
        Dictionary::builtin().lookup_key("gmailcom").unwrap().clone()
    }

    #[test]
    fn test_corrected_url() {
        assert_eq!(corrected_url("https", "gmail.com"), "https://gmail.com/");
        assert_eq!(corrected_url("http", "google.com"), "http://google.com/");
    }

    #[test]
    fn test_warn_context_fields() {
        let decision = Decision::Warn {
            requested: "gamil.com".to_string(),
            suggestion: gmail(),
            original_url: "http://gamil.com/inbox".to_string(),
        };

        let ctx = decision.warn_context().unwrap();
        assert_eq!(ctx.original_url, "http://gamil.com/inbox");
        assert_eq!(ctx.original_host, "gamil.com");
        assert_eq!(ctx.corrected_host, "gmail.com");
        assert_eq!(ctx.corrected_url, "http://gmail.com/");
    }

    #[test]
    fn test_warn_context_scheme_fallback() {
        let decision = Decision::Warn {
            requested: "gamil.com".to_string(),
            suggestion: gmail(),
            original_url: "gamil.com/inbox".to_string(),
        };

        let ctx = decision.warn_context().unwrap();
        assert_eq!(ctx.corrected_url, "https://gmail.com/");
    }

    #[test]
    fn test_warn_context_only_for_warn() {
        assert!(Decision::PassThrough.warn_context().is_none());

        let redirect = Decision::Redirect {
            to: gmail(),
            target_url: "https://gmail.com/".to_string(),
        };
        assert!(redirect.warn_context().is_none());
    }

    #[test]
    fn test_serialized_tag() {
        let json = serde_json::to_string(&Decision::PassThrough).unwrap();
        assert!(json.contains("\"action\":\"pass_through\""));
    }
}
