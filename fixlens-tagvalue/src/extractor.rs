/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Message boundary detection.
//!
//! Input text may hold any number of messages glued together with no reliable
//! separator, surrounded by arbitrary noise. Boundaries are recovered from FIX
//! structure alone: a message starts at `8=FIX` (optionally preceded by
//! delimiter residue) and ends at the first `10=` followed by three digits,
//! plus at most one trailing non-digit character.

use fixlens_core::error::DecodeError;
use fixlens_core::message::RawMessage;
use regex::{Matches, Regex};
use std::sync::LazyLock;

/// Pattern matching one complete message, shortest body first.
static MESSAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9a-zA-Z:\s]*8=FIX(.*?)[^0-9]10=[0-9]{3}[^0-9\n]?")
        .expect("message pattern is a valid regex")
});

/// Iterator over the messages found in a text blob, in input order.
#[derive(Debug)]
pub struct Extractor<'a> {
    matches: Matches<'static, 'a>,
}

impl<'a> Extractor<'a> {
    /// Creates an extractor over the given text.
    ///
    /// # Arguments
    /// * `text` - Text that may contain FIX messages
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            matches: MESSAGE_PATTERN.find_iter(text),
        }
    }
}

impl<'a> Iterator for Extractor<'a> {
    type Item = RawMessage<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches.next().map(|m| RawMessage::new(m.as_str()))
    }
}

/// Extracts every FIX message from a text blob.
///
/// # Arguments
/// * `text` - Text that may contain zero or more concatenated messages
///
/// # Errors
/// Returns `DecodeError::EmptyInput` if the text is empty and
/// `DecodeError::NoMessagesFound` if nothing in it looks like a FIX message.
pub fn extract_messages(text: &str) -> Result<Vec<RawMessage<'_>>, DecodeError> {
    if text.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let messages: Vec<RawMessage<'_>> = Extractor::new(text).collect();
    if messages.is_empty() {
        return Err(DecodeError::NoMessagesFound);
    }

    Ok(messages)
}
