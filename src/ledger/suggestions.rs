//! Autocomplete suggestion memory.
//!
//! An append-only, case-insensitively de-duplicated set of strings with
//! stable insertion order. Party and city suggestions are rebuilt from the
//! live collection; the item-type set starts from the configured garment
//! vocabulary and grows with observed values.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct SuggestionSet {
    entries: Vec<String>,
    seen: HashSet<String>,
}

impl SuggestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set seeded with a fixed vocabulary, keeping its order.
    pub fn seeded<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for value in seed {
            set.insert(value.as_ref());
        }
        set
    }

    /// Inserts a value unless a case-insensitive equal is already present.
    /// Blank values are ignored. Returns whether the value was added.
    pub fn insert(&mut self, value: &str) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return false;
        }
        let key = trimmed.to_lowercase();
        if !self.seen.insert(key) {
            return false;
        }
        self.entries.push(trimmed.to_string());
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(&value.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn into_vec(self) -> Vec<String> {
        self.entries
    }

    /// Entries sorted for display, the way the party and city dropdowns
    /// present them.
    pub fn sorted(&self) -> Vec<String> {
        let mut out = self.entries.clone();
        out.sort();
        out
    }
}

impl Extend<String> for SuggestionSet {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        for value in iter {
            self.insert(&value);
        }
    }
}
