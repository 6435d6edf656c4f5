/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Raw tag/value mapping of a single FIX message.

use smallvec::SmallVec;

/// Mapping from tag identifier to raw value for one message.
///
/// Tags and values borrow from the message text. Tags are unique: inserting a
/// tag that is already present replaces its value in place, so for repeating
/// groups only the last occurrence survives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap<'a> {
    fields: SmallVec<[(&'a str, &'a str); 32]>,
}

impl<'a> FieldMap<'a> {
    /// Creates an empty field map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tag/value pair, returning the value it replaced.
    pub fn insert(&mut self, tag: &'a str, value: &'a str) -> Option<&'a str> {
        match self.fields.iter_mut().find(|(t, _)| *t == tag) {
            Some(slot) => Some(std::mem::replace(&mut slot.1, value)),
            None => {
                self.fields.push((tag, value));
                None
            }
        }
    }

    /// Gets the raw value of a tag.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&'a str> {
        self.fields
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, value)| *value)
    }

    /// Returns true if the tag is present.
    #[must_use]
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// Returns the number of distinct tags.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the map holds no fields.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over tag/value pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.fields.iter().copied()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for FieldMap<'a> {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (tag, value) in iter {
            map.insert(tag, value);
        }
        map
    }
}
