//! Section and Entry
//!
//! A named, ordered group of key/value entries.

use std::collections::HashMap;

use super::fold;

/// A single key/value pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Key label, casing as first written
    pub key: String,

    /// Value, stored verbatim (may be empty)
    pub value: String,
}

/// A named group of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Label, casing as first written
    label: String,

    /// Entries in insertion order
    entries: Vec<Entry>,

    /// Folded key → index into `entries`
    index: HashMap<String, usize>,
}

impl Section {
    /// Create a new empty section
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value by key (case-insensitive)
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(&fold(key))
            .map(|&i| self.entries[i].value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(&fold(key))
    }

    /// Insert or update a value.
    ///
    /// An update keeps the entry's position and original key casing;
    /// an insert appends. Returns the previous value, if any.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Option<String> {
        let value = value.into();
        let folded = fold(key);

        match self.index.get(&folded) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].value, value)),
            None => {
                self.entries.push(Entry {
                    key: key.to_string(),
                    value,
                });
                self.index.insert(folded, self.entries.len() - 1);
                None
            }
        }
    }

    /// Remove a key (case-insensitive), returning its value if it existed
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let removed_at = self.index.remove(&fold(key))?;
        let entry = self.entries.remove(removed_at);

        for i in self.index.values_mut() {
            if *i > removed_at {
                *i -= 1;
            }
        }

        Some(entry.value)
    }

    /// Key labels in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.key.clone()).collect()
    }

    /// Iterate over entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}
