//! Document Module
//!
//! In-memory model of an INI file.
//!
//! ## Structure
//! ```text
//! Document
//!  ├── Section "Application"
//!  │    ├── Entry Name=MyApp
//!  │    └── Entry Version=1.0
//!  └── Section "Database"
//!       └── Entry Timeout=30
//! ```
//!
//! ## Lookup
//! Section and key names are case-insensitive but case-preserving. Both
//! levels keep an ordered `Vec` (serialization order) plus a `HashMap`
//! from the folded name to the position in that `Vec`.

mod section;

use std::collections::HashMap;

pub use section::{Entry, Section};

/// Fold a section or key name for case-insensitive comparison
pub fn fold(name: &str) -> String {
    name.to_lowercase()
}

/// Ordered collection of sections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Sections in document order
    sections: Vec<Section>,

    /// Folded section name → index into `sections`
    index: HashMap<String, usize>,
}

impl Document {
    /// Create a new empty Document
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Look up a section by name (case-insensitive)
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.index.get(&fold(name)).map(|&i| &self.sections[i])
    }

    /// Look up a section by name for mutation (case-insensitive)
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        match self.index.get(&fold(name)) {
            Some(&i) => Some(&mut self.sections[i]),
            None => None,
        }
    }

    /// Get the section with this name, appending a new one if absent.
    ///
    /// An existing section keeps its original label casing.
    pub fn section_or_insert(&mut self, label: &str) -> &mut Section {
        let folded = fold(label);
        let i = match self.index.get(&folded) {
            Some(&i) => i,
            None => {
                self.sections.push(Section::new(label));
                let i = self.sections.len() - 1;
                self.index.insert(folded, i);
                i
            }
        };
        &mut self.sections[i]
    }

    /// Remove a section (case-insensitive), returning it if it existed
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        let removed_at = self.index.remove(&fold(name))?;
        let section = self.sections.remove(removed_at);

        // Everything after the removed slot shifted left by one
        for i in self.index.values_mut() {
            if *i > removed_at {
                *i -= 1;
            }
        }

        Some(section)
    }

    /// Look up a value (case-insensitive section and key)
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }

    /// Insert or update a value, creating the section if needed.
    ///
    /// Returns the previous value, if any.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) -> Option<String> {
        self.section_or_insert(section).set(key, value)
    }

    /// Remove a key from a section, returning its value if it existed
    pub fn remove(&mut self, section: &str, key: &str) -> Option<String> {
        self.section_mut(section)?.remove(key)
    }

    /// Iterate over sections in document order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Section labels in document order
    pub fn section_labels(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.label().to_string()).collect()
    }

    /// Total number of entries across all sections
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }
}
