/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Zero-copy field splitting.
//!
//! Splits one message on its separator and each segment on its first `=`.
//! Tags and values are slices of the original message text.

use fixlens_core::field::FieldMap;
use fixlens_core::message::RawMessage;
use memchr::{memchr, memmem};

/// Equals sign between tag and value.
const EQUALS: u8 = b'=';

/// Iterator over the separator-delimited segments of a message.
///
/// An empty separator yields the whole message as a single segment.
#[derive(Debug, Clone)]
pub struct Segments<'a, 'd> {
    /// Text not yet consumed.
    remaining: Option<&'a str>,
    /// Field separator.
    delimiter: &'d str,
}

impl<'a, 'd> Segments<'a, 'd> {
    /// Creates a segment iterator.
    ///
    /// # Arguments
    /// * `text` - The message text
    /// * `delimiter` - The field separator
    #[must_use]
    pub const fn new(text: &'a str, delimiter: &'d str) -> Self {
        Self {
            remaining: Some(text),
            delimiter,
        }
    }
}

impl<'a> Iterator for Segments<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.remaining?;
        if self.delimiter.is_empty() {
            self.remaining = None;
            return Some(rest);
        }

        // A match of a valid UTF-8 needle always falls on char boundaries
        match memmem::find(rest.as_bytes(), self.delimiter.as_bytes()) {
            Some(pos) => {
                self.remaining = Some(&rest[pos + self.delimiter.len()..]);
                Some(&rest[..pos])
            }
            None => {
                self.remaining = None;
                Some(rest)
            }
        }
    }
}

/// Splits a segment into its tag and value.
///
/// A segment without `=` is all tag and has an empty value.
#[inline]
fn split_pair(segment: &str) -> (&str, &str) {
    match memchr(EQUALS, segment.as_bytes()) {
        Some(pos) => (&segment[..pos], &segment[pos + 1..]),
        None => (segment, ""),
    }
}

/// Splits a message into a tag/value map.
///
/// Segments with an empty tag, such as the one produced by a trailing
/// separator, are skipped. A tag that occurs more than once keeps its last
/// value.
///
/// # Arguments
/// * `message` - One complete FIX message
/// * `delimiter` - The field separator used by the message
#[must_use]
pub fn split_key_vals<'a>(message: &RawMessage<'a>, delimiter: &str) -> FieldMap<'a> {
    Segments::new(message.as_str(), delimiter)
        .map(split_pair)
        .filter(|(tag, _)| !tag.is_empty())
        .collect()
}
