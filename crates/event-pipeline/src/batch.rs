//! Insertion-ordered key/value mapping built for one publish cycle.

use std::collections::HashMap;

/// An insertion-ordered mapping from key to serialized event.
///
/// Entries live in a growable vector; a side table maps each key to its
/// position. Re-inserting an existing key replaces the value in place, so
/// the key keeps the position of its first insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert or overwrite `key`. Returns the previous value, if any.
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        match self.index.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_str())
    }

    /// Entry at insertion position `position`.
    pub fn get_index(&self, position: usize) -> Option<(&str, &str)> {
        self.entries
            .get(position)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consume the batch, returning the values in insertion order.
    pub fn into_values(self) -> Vec<String> {
        self.entries.into_iter().map(|(_, v)| v).collect()
    }
}
