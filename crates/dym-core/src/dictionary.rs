//! Popular-domain dictionary
//!
//! Holds the trusted correction targets and their normalized lookup keys.
//! Keys are the canonical form with every `.` removed; matching on the raw
//! form would let the index pair `reddit.com` with `reddit.rs` on TLD
//! punctuation alone.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Correction targets the engine ships with.
pub const DEFAULT_POPULAR_DOMAINS: &[&str] = &[
    "google.com",
    "gmail.com",
    "youtube.com",
    "github.com",
    "stackoverflow.com",
    "stackexchange.com",
    "reddit.com",
    "lobste.rs",
    "news.ycombinator.com",
];

static BUILTIN: Lazy<Dictionary> = Lazy::new(|| {
    Dictionary::from_names(DEFAULT_POPULAR_DOMAINS.iter().copied())
        .expect("built-in domain list is collision-free")
});

/// Strip every `.` from a hostname, producing its lookup key.
pub fn normalized_key(host: &str) -> String {
    host.chars().filter(|&c| c != '.').collect()
}

/// One entry in the trusted dictionary.
///
/// Carries both forms so a match can be mapped back to the user-visible
/// domain without a separate reverse lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopularDomain {
    /// User-visible form, e.g. `gmail.com`.
    canonical_form: String,
    /// Matching form with dots removed, e.g. `gmailcom`. Never shown to the user.
    normalized_key: String,
}

impl PopularDomain {
    fn new(name: &str) -> Self {
        Self {
            canonical_form: name.to_string(),
            normalized_key: normalized_key(name),
        }
    }

    /// The domain as it appears on the wire and in warning pages.
    pub fn canonical_form(&self) -> &str {
        &self.canonical_form
    }

    /// The dot-stripped form used for distance comparisons.
    pub fn normalized_key(&self) -> &str {
        &self.normalized_key
    }
}

/// The fixed set of popular domains, loaded once at engine construction.
///
/// Construction rejects entries whose normalized keys collide; allowing a
/// collision would make the key-to-domain mapping ambiguous.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<PopularDomain>,
    by_key: HashMap<String, usize>,
}

impl Dictionary {
    /// Build a dictionary from canonical domain names.
    ///
    /// Names are trimmed; empty names are skipped. Fails with
    /// [`Error::DuplicateNormalizedKey`] when two names reduce to the same key.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<PopularDomain> = Vec::new();
        let mut by_key: HashMap<String, usize> = HashMap::new();

        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }

            let domain = PopularDomain::new(name);
            if let Some(&existing) = by_key.get(&domain.normalized_key) {
                return Err(Error::duplicate_key(
                    domain.normalized_key.clone(),
                    entries[existing].canonical_form.clone(),
                    domain.canonical_form,
                ));
            }

            by_key.insert(domain.normalized_key.clone(), entries.len());
            entries.push(domain);
        }

        Ok(Self { entries, by_key })
    }

    /// The built-in dictionary, constructed once and shared.
    pub fn builtin() -> &'static Dictionary {
        &BUILTIN
    }

    /// Load a dictionary from a file.
    ///
    /// File format:
    /// - One domain per line
    /// - Lines starting with # are comments
    /// - Empty lines are ignored
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::dictionary_file(path.display().to_string(), e.to_string()))?;

        let dictionary = Self::parse(&content)?;
        info!(
            "Loaded {} domains from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Parse dictionary content in the one-domain-per-line format.
    pub fn parse(content: &str) -> Result<Self> {
        let names = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));
        Self::from_names(names)
    }

    /// Look up an entry by its normalized key.
    pub fn lookup_key(&self, key: &str) -> Option<&PopularDomain> {
        self.by_key.get(key).map(|&idx| &self.entries[idx])
    }

    /// All entries, in construction order.
    pub fn entries(&self) -> &[PopularDomain] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_key() {
        assert_eq!(normalized_key("gmail.com"), "gmailcom");
        assert_eq!(normalized_key("news.ycombinator.com"), "newsycombinatorcom");
        assert_eq!(normalized_key("nodots"), "nodots");
        assert_eq!(normalized_key(""), "");
    }

    #[test]
    fn test_builtin_dictionary() {
        let dict = Dictionary::builtin();
        assert_eq!(dict.len(), DEFAULT_POPULAR_DOMAINS.len());

        let gmail = dict.lookup_key("gmailcom").unwrap();
        assert_eq!(gmail.canonical_form(), "gmail.com");
        assert_eq!(gmail.normalized_key(), "gmailcom");
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = Dictionary::from_names(["abc.com", "ab.c.com"]).unwrap_err();
        match err {
            Error::DuplicateNormalizedKey { key, first, second } => {
                assert_eq!(key, "abccom");
                assert_eq!(first, "abc.com");
                assert_eq!(second, "ab.c.com");
            }
            other => panic!("expected DuplicateNormalizedKey, got {other}"),
        }
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let content = "# trusted domains\n\ngoogle.com\n  gmail.com  \n# trailing comment\n";
        let dict = Dictionary::parse(content).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.lookup_key("gmailcom").is_some());
    }

    #[test]
    fn test_from_file_missing() {
        let err = Dictionary::from_file("/nonexistent/dym-domains.txt").unwrap_err();
        assert!(matches!(err, Error::DictionaryFile { .. }));
    }

    #[test]
    fn test_empty_dictionary_allowed() {
        let dict = Dictionary::from_names(Vec::<&str>::new()).unwrap();
        assert!(dict.is_empty());
        assert!(dict.lookup_key("anything").is_none());
    }
}
