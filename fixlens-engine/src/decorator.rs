/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Dictionary-based message decoration.
//!
//! Turns a raw tag/value map into a [`DecodedMessage`]. Decoding is lossy but
//! safe: tags the dictionary does not name are left out, and values without
//! an enumeration label are kept as they are.

use crate::detail::DetailDispatcher;
use fixlens_core::error::DecodeError;
use fixlens_core::field::FieldMap;
use fixlens_core::message::DecodedMessage;
use fixlens_dictionary::{DictionaryEntry, TagDictionary};
use fixlens_store::CorrelationStore;
use std::sync::Arc;
use tracing::{debug, trace};

/// Resolves raw fields into readable ones and records correlations.
#[derive(Debug)]
pub struct MessageDecorator<'d, 's, S: CorrelationStore + ?Sized> {
    dictionary: &'d TagDictionary,
    store: &'s S,
    strict_correlation: bool,
}

impl<'d, 's, S: CorrelationStore + ?Sized> MessageDecorator<'d, 's, S> {
    /// Creates a decorator.
    ///
    /// # Arguments
    /// * `dictionary` - Tag dictionary used for names and value labels
    /// * `store` - Correlation store read and written while decorating
    #[must_use]
    pub const fn new(dictionary: &'d TagDictionary, store: &'s S) -> Self {
        Self {
            dictionary,
            store,
            strict_correlation: true,
        }
    }

    /// Sets whether a missing correlated message is an error.
    #[must_use]
    pub const fn with_strict_correlation(mut self, strict: bool) -> Self {
        self.strict_correlation = strict;
        self
    }

    /// Decorates one message.
    ///
    /// The readable fields are stored under their ClOrdID if that id has not
    /// been seen before, then the message-type detail is attached.
    ///
    /// # Errors
    /// Returns `DecodeError::MissingCorrelation` if the detail needs an
    /// original message that is unknown, in strict mode.
    pub fn decorate(&self, fields: &FieldMap<'_>) -> Result<DecodedMessage, DecodeError> {
        let mut message = DecodedMessage::new();
        let mut dropped = 0usize;

        for (tag, value) in fields.iter() {
            match self.resolve(tag) {
                Some(entry) => message.insert(entry.name.as_str(), entry.resolve(value)),
                None => dropped += 1,
            }
        }

        if let Some(cl_ord_id) = message.cl_ord_id()
            && self
                .store
                .insert_if_absent(cl_ord_id, Arc::new(message.clone()))
        {
            trace!(cl_ord_id, "stored first message for client order id");
        }

        let detail = DetailDispatcher::new(self.store)
            .with_strict_correlation(self.strict_correlation)
            .dispatch(&message)?;

        debug!(
            msg_type = message.msg_type().unwrap_or_default(),
            fields = message.len(),
            dropped,
            "decorated message"
        );

        Ok(message.with_detail(detail))
    }

    /// Returns the tags that decoration would leave out, in message order.
    #[must_use]
    pub fn unresolved_tags<'a>(&self, fields: &FieldMap<'a>) -> Vec<&'a str> {
        fields
            .iter()
            .filter(|(tag, _)| self.resolve(tag).is_none())
            .map(|(tag, _)| tag)
            .collect()
    }

    fn resolve(&self, tag: &str) -> Option<&'d DictionaryEntry> {
        self.dictionary.lookup_str(tag).filter(|e| e.has_name())
    }
}
