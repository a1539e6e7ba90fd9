//! Deletion-based lookup index over normalized keys.
//!
//! Every dictionary key precomputes the strings reachable by deleting up to
//! `max_distance` characters. A query generates the same variants for the
//! input; any key sharing a variant is a candidate, and the true edit
//! distance then filters and annotates the survivors. Two strings within
//! edit distance `d` of each other always share at least one variant when
//! both sides delete up to `d` characters, so the index never misses a key
//! inside the radius.

use super::distance::levenshtein;
use std::collections::{HashMap, HashSet};

/// A dictionary key within the search radius of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Normalized dictionary key.
    pub term: String,
    /// Levenshtein distance from the query.
    pub distance: usize,
}

/// Immutable delete-variant index over the dictionary keys.
#[derive(Debug)]
pub struct DeletionIndex {
    /// Variant (including each key itself) to the keys producing it.
    variants: HashMap<String, Vec<String>>,
    max_distance: usize,
}

impl DeletionIndex {
    /// Build the index for the given keys and search radius.
    pub fn build<'a, I>(keys: I, max_distance: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut variants: HashMap<String, Vec<String>> = HashMap::new();

        for key in keys {
            for variant in delete_variants(key, max_distance) {
                variants.entry(variant).or_default().push(key.to_string());
            }
        }

        Self {
            variants,
            max_distance,
        }
    }

    /// The search radius fixed at construction.
    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// All dictionary keys within `max_distance` of `query`, annotated with
    /// their distances, closest first; equal distances are ordered by term
    /// so results are deterministic.
    pub fn lookup(&self, query: &str) -> Vec<Candidate> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut found = Vec::new();

        for variant in delete_variants(query, self.max_distance) {
            let Some(terms) = self.variants.get(&variant) else {
                continue;
            };
            for term in terms {
                if !seen.insert(term) {
                    continue;
                }
                let distance = levenshtein(query, term);
                if distance <= self.max_distance {
                    found.push(Candidate {
                        term: term.clone(),
                        distance,
                    });
                }
            }
        }

        found.sort_by(|a, b| {
            a.distance
                .cmp(&b.distance)
                .then_with(|| a.term.cmp(&b.term))
        });
        found
    }
}

/// The word itself plus every string reachable by deleting up to
/// `max_distance` characters.
fn delete_variants(word: &str, max_distance: usize) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(word.to_string());
    let mut result = vec![word.to_string()];
    let mut frontier = vec![word.to_string()];

    for _ in 0..max_distance {
        let mut next = Vec::new();
        for current in &frontier {
            let chars: Vec<char> = current.chars().collect();
            for skip in 0..chars.len() {
                let shorter: String = chars
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, &c)| c)
                    .collect();
                if seen.insert(shorter.clone()) {
                    result.push(shorter.clone());
                    next.push(shorter);
                }
            }
        }
        frontier = next;
    }

    result
}
