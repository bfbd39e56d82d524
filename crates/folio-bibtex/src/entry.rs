//! BibTeX entry data structures

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A parsed BibTeX entry.
///
/// Field keys are case-folded to lowercase at insertion time; when the source
/// repeats a key, the last occurrence wins. The cite key is never empty — the
/// scanner rejects headers without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibEntry {
    /// Entry type, lowercased (`article`, `inproceedings`, ...)
    pub entry_type: String,
    /// Citation key from the entry header
    pub cite_key: String,
    /// Field map with lowercased keys
    pub fields: HashMap<String, String>,
}

impl BibEntry {
    /// Create an entry with no fields yet.
    pub fn new(entry_type: impl Into<String>, cite_key: impl Into<String>) -> Self {
        Self {
            entry_type: entry_type.into().to_lowercase(),
            cite_key: cite_key.into(),
            fields: HashMap::new(),
        }
    }

    /// Get a field value by key (case-insensitive).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(&key.to_lowercase()).map(String::as_str)
    }

    /// Set a field, case-folding the key. Overwrites any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into().to_lowercase(), value.into());
    }

    /// Get the title field.
    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    /// Get the author field.
    pub fn author(&self) -> Option<&str> {
        self.get("author")
    }

    /// Get the year field.
    pub fn year(&self) -> Option<&str> {
        self.get("year")
    }
}
