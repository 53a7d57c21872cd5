use std::collections::HashSet;

use crate::config::Limit;

/// Ordering applied to candidates before truncating to the limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    /// Seed order, then case, suffix and plain-before-leet.
    #[default]
    Generation,
    /// Byte-wise lexicographic order.
    Lexicographic,
}

/// Duplicate-free collection of candidate strings that remembers insertion order.
///
/// A plain hash set would make "the first N" depend on the hasher's seed, so the
/// order lives in a `Vec` and the `HashSet` only answers membership.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { order: Vec::with_capacity(capacity), seen: HashSet::with_capacity(capacity) }
    }

    /// Inserts `candidate` unless already present. Returns whether it was new.
    pub fn insert(&mut self, candidate: String) -> bool {
        if self.seen.contains(&candidate) {
            return false;
        }
        self.seen.insert(candidate.clone());
        self.order.push(candidate);
        true
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.seen.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates candidates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl PartialEq for CandidateSet {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for CandidateSet {}

impl Extend<String> for CandidateSet {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        for candidate in iter {
            self.insert(candidate);
        }
    }
}

impl FromIterator<String> for CandidateSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        let mut set = CandidateSet::new();
        set.extend(iter);
        set
    }
}

/// Returns at most `limit` candidates in the requested order.
pub fn select(candidates: CandidateSet, limit: Limit, order: Order) -> Vec<String> {
    let mut phrases = candidates.into_vec();
    if order == Order::Lexicographic {
        phrases.sort_unstable();
    }
    phrases.truncate(limit.get());
    phrases
}
