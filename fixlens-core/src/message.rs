/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Message types for the decode pipeline.
//!
//! This module provides:
//! - [`RawMessage`]: Zero-copy view of one FIX message inside a larger text
//! - [`DecodedMessage`]: Human-readable field-name/value view of a message
//! - [`MsgDetail`]: Message-type-specific derived data

use crate::types::names;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Zero-copy view of exactly one FIX message.
///
/// Starts at the BeginString field (possibly preceded by delimiter residue)
/// and ends at the three-digit CheckSum value plus at most one trailing
/// character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawMessage<'a> {
    text: &'a str,
}

impl<'a> RawMessage<'a> {
    /// Wraps a message substring.
    #[inline]
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Returns the message text.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.text
    }

    /// Returns the length of the message in bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the message text is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the protocol version token that follows `8=` (e.g. `FIX.4.4`).
    #[must_use]
    pub fn begin_string(&self) -> Option<&'a str> {
        let start = self.text.find("8=FIX")? + 2;
        let rest = &self.text[start..];
        let end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '.'))
            .unwrap_or(rest.len());
        Some(&rest[..end])
    }
}

impl AsRef<str> for RawMessage<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

impl fmt::Display for RawMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Message-type-specific data derived while decoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MsgDetail {
    /// Fill progress of an execution report relative to its original order.
    ExecutionReport {
        /// `100 * CumQty / OrderQty`, absent when it cannot be computed.
        #[serde(rename = "percentComplete", skip_serializing_if = "Option::is_none")]
        percent_complete: Option<f64>,
    },
    /// Reason carried by a session-level reject.
    Reject {
        /// The Text field, or an empty string.
        text: String,
    },
    /// Price of the order a cancel request refers to.
    OrderCancelRequest {
        /// Price of the original order, if it carried one.
        #[serde(rename = "originalPrice", skip_serializing_if = "Option::is_none")]
        original_price: Option<String>,
    },
}

/// Human-readable view of one FIX message.
///
/// Keys are dictionary field names, values are either enumeration labels or
/// the raw values. Fields keep the order in which they appeared in the message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedMessage {
    fields: Vec<(String, String)>,
    detail: Option<MsgDetail>,
}

impl DecodedMessage {
    /// Creates an empty decoded message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Gets a field value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the resolved message type (e.g. `EXECUTION_REPORT`).
    #[must_use]
    pub fn msg_type(&self) -> Option<&str> {
        self.get(names::MSG_TYPE)
    }

    /// Returns the client order id.
    #[must_use]
    pub fn cl_ord_id(&self) -> Option<&str> {
        self.get(names::CL_ORD_ID)
    }

    /// Returns the original client order id.
    #[must_use]
    pub fn orig_cl_ord_id(&self) -> Option<&str> {
        self.get(names::ORIG_CL_ORD_ID)
    }

    /// Returns the derived detail, if a rule applied to this message type.
    #[inline]
    #[must_use]
    pub fn detail(&self) -> Option<&MsgDetail> {
        self.detail.as_ref()
    }

    /// Attaches the derived detail.
    #[must_use]
    pub fn with_detail(mut self, detail: Option<MsgDetail>) -> Self {
        self.detail = detail;
        self
    }

    /// Returns the number of named fields.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field was resolved.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over field names and values in message order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl Serialize for DecodedMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.serialize_entry(names::MSG_DETAIL, &self.detail)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_message_begin_string() {
        let raw = RawMessage::new("8=FIX.4.1\u{1}9=61\u{1}35=A\u{1}10=003\u{1}");
        assert_eq!(raw.begin_string(), Some("FIX.4.1"));

        let raw = RawMessage::new("|8=FIXT.1.1|9=5|35=0|10=000");
        assert_eq!(raw.begin_string(), Some("FIXT.1.1"));

        assert_eq!(RawMessage::new("hello").begin_string(), None);
    }

    #[test]
    fn test_decoded_message_accessors() {
        let mut msg = DecodedMessage::new();
        msg.insert("MsgType", "ORDER_SINGLE");
        msg.insert("ClOrdID", "1");
        msg.insert("ClOrdID", "2");

        assert_eq!(msg.len(), 2);
        assert_eq!(msg.msg_type(), Some("ORDER_SINGLE"));
        assert_eq!(msg.cl_ord_id(), Some("2"));
        assert_eq!(msg.orig_cl_ord_id(), None);
        assert!(msg.detail().is_none());
    }

    #[test]
    fn test_serialize_with_detail() {
        let mut msg = DecodedMessage::new();
        msg.insert("MsgType", "REJECT");
        let msg = msg.with_detail(Some(MsgDetail::Reject {
            text: "bad".to_string(),
        }));

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"MsgType": "REJECT", "MsgDetail": {"text": "bad"}})
        );
    }

    #[test]
    fn test_serialize_without_detail() {
        let mut msg = DecodedMessage::new();
        msg.insert("MsgType", "HEARTBEAT");

        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"MsgType": "HEARTBEAT", "MsgDetail": null})
        );
    }

    #[test]
    fn test_serialize_detail_omits_absent_values() {
        let detail = MsgDetail::ExecutionReport {
            percent_complete: None,
        };
        assert_eq!(serde_json::to_value(&detail).unwrap(), serde_json::json!({}));

        let detail = MsgDetail::OrderCancelRequest {
            original_price: Some("10".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&detail).unwrap(),
            serde_json::json!({"originalPrice": "10"})
        );
    }
}
