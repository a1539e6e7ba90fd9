//! Fuzzy domain matching
//!
//! Finds the closest popular domain to an arbitrary hostname and decides
//! whether the hostname is plausibly a typo of it. The matcher is read-only
//! after construction and safe to share across concurrent callers.

mod distance;
mod index;

pub use distance::levenshtein;
pub use index::Candidate;

use crate::dictionary::{normalized_key, Dictionary, PopularDomain};
use index::DeletionIndex;
use tracing::{debug, trace};

/// Default search radius. Wider radii flood short domain keys with false
/// positives.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Bounded edit-distance matcher over the popular-domain dictionary.
pub struct DomainMatcher {
    dictionary: Dictionary,
    index: DeletionIndex,
}

impl DomainMatcher {
    /// Create a matcher with the default search radius.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_max_distance(dictionary, DEFAULT_MAX_DISTANCE)
    }

    /// Create a matcher with an explicit search radius.
    pub fn with_max_distance(dictionary: Dictionary, max_distance: usize) -> Self {
        let index = DeletionIndex::build(
            dictionary.entries().iter().map(PopularDomain::normalized_key),
            max_distance,
        );
        Self { dictionary, index }
    }

    /// The dictionary this matcher was built over.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The search radius fixed at construction.
    pub fn max_distance(&self) -> usize {
        self.index.max_distance()
    }

    /// The closest popular domain, if `host` is plausibly a typo of one.
    ///
    /// Returns `None` when no dictionary key lies within the search radius,
    /// and when the host already is a popular domain (exact matches are
    /// never flagged as typos of themselves). Empty and malformed hostnames
    /// simply fail to match.
    pub fn suggest(&self, host: &str) -> Option<&PopularDomain> {
        let key = normalized_key(host);
        let candidates = self.index.lookup(&key);
        let first = candidates.first()?;

        // Displace the running best when the challenger is strictly closer,
        // or when the running best is the query itself.
        let mut best = first;
        for candidate in &candidates[1..] {
            if candidate.distance < best.distance || best.term == key {
                best = candidate;
            }
        }

        if best.term == key {
            trace!(host, "host already is a popular domain");
            return None;
        }

        let domain = self.dictionary.lookup_key(&best.term)?;
        debug!(
            host,
            suggestion = domain.canonical_form(),
            distance = best.distance,
            "typo candidate matched"
        );
        Some(domain)
    }
}
