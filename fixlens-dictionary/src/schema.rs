/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Schema definitions for FIX tag dictionaries.
//!
//! This module defines the structures the decoder consults:
//! - [`DictionaryEntry`]: Field name and value enumeration for one tag
//! - [`TagDictionary`]: Complete tag table for a FIX version
//!
//! Dictionaries are plain data. They are loaded from JSON files of the form
//! `{"version": "FIX.4.4", "fields": [{"tag": 54, "name": "Side", "values": {"1": "BUY"}}]}`
//! and never mutated by the decoder.

use fixlens_core::error::DictionaryError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Bundled FIX 4.4 tag table.
const EMBEDDED_FIX44: &str = include_str!("../data/fix44.json");

/// Definition of one FIX tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Field tag number.
    pub tag: u32,
    /// Field name. Empty means the tag is known but unnamed.
    #[serde(default)]
    pub name: String,
    /// Labels for coded values. Empty means values pass through literally.
    #[serde(default)]
    pub values: HashMap<String, String>,
}

impl DictionaryEntry {
    /// Creates a new entry without value labels.
    ///
    /// # Arguments
    /// * `tag` - The field tag number
    /// * `name` - The field name
    #[must_use]
    pub fn new(tag: u32, name: impl Into<String>) -> Self {
        Self {
            tag,
            name: name.into(),
            values: HashMap::new(),
        }
    }

    /// Adds a label for a coded value.
    #[must_use]
    pub fn with_value(mut self, code: impl Into<String>, label: impl Into<String>) -> Self {
        self.values.insert(code.into(), label.into());
        self
    }

    /// Returns true if the entry carries a field name.
    #[inline]
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Returns the label for an exact raw value.
    #[must_use]
    pub fn label(&self, raw: &str) -> Option<&str> {
        self.values.get(raw).map(String::as_str)
    }

    /// Returns the label for a raw value, or the raw value itself.
    #[must_use]
    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        self.label(raw).unwrap_or(raw)
    }
}

/// On-disk layout of a dictionary file.
#[derive(Debug, Deserialize)]
struct DictionaryFile {
    version: String,
    fields: Vec<DictionaryEntry>,
}

/// Read-only tag table for one FIX version.
#[derive(Debug, Clone, Default)]
pub struct TagDictionary {
    /// Version label of the data (e.g. `FIX.4.4`).
    version: String,
    /// Entries indexed by tag.
    entries: HashMap<u32, DictionaryEntry>,
    /// Tags indexed by field name.
    by_name: HashMap<String, u32>,
}

impl TagDictionary {
    /// Creates a new empty dictionary.
    ///
    /// # Arguments
    /// * `version` - Version label of the data
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            entries: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Returns the bundled FIX 4.4 dictionary.
    ///
    /// # Errors
    /// Returns `DictionaryError` if the bundled data cannot be parsed.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_json_str(EMBEDDED_FIX44)
    }

    /// Parses a dictionary from JSON text.
    ///
    /// # Errors
    /// Returns `DictionaryError::Parse` for malformed JSON and
    /// `DictionaryError::DuplicateTag` if a tag is defined twice.
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let file: DictionaryFile =
            serde_json::from_str(json).map_err(|e| DictionaryError::Parse(e.to_string()))?;

        let mut dict = Self::new(file.version);
        for entry in file.fields {
            if dict.entries.contains_key(&entry.tag) {
                return Err(DictionaryError::DuplicateTag(entry.tag));
            }
            dict.add_entry(entry);
        }
        Ok(dict)
    }

    /// Loads a dictionary from a JSON file.
    ///
    /// # Errors
    /// Returns `DictionaryError::Io` if the file cannot be read, or any error
    /// of [`TagDictionary::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let json = std::fs::read_to_string(path.as_ref())
            .map_err(|e| DictionaryError::Io(format!("{}: {e}", path.as_ref().display())))?;
        Self::from_json_str(&json)
    }

    /// Adds an entry, replacing any previous definition of the same tag.
    pub fn add_entry(&mut self, entry: DictionaryEntry) {
        if let Some(previous) = self.entries.get(&entry.tag) {
            self.by_name.remove(&previous.name);
        }
        if entry.has_name() {
            self.by_name.insert(entry.name.clone(), entry.tag);
        }
        self.entries.insert(entry.tag, entry);
    }

    /// Returns the version label of the data.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Gets an entry by tag.
    #[must_use]
    pub fn get(&self, tag: u32) -> Option<&DictionaryEntry> {
        self.entries.get(&tag)
    }

    /// Gets an entry by field name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&DictionaryEntry> {
        self.by_name.get(name).and_then(|tag| self.entries.get(tag))
    }

    /// Gets an entry from a tag as it appears in message text.
    ///
    /// Anything that is not a canonical decimal tag number is unknown.
    #[must_use]
    pub fn lookup_str(&self, tag: &str) -> Option<&DictionaryEntry> {
        if tag.is_empty() || tag.starts_with('0') || !tag.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        tag.parse().ok().and_then(|tag| self.get(tag))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the dictionary holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over all entries.
    pub fn entries(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.values()
    }
}
