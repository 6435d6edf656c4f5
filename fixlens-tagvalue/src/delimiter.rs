/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Field separator inference.
//!
//! In a well-formed header BodyLength (9) is immediately followed by MsgType
//! (35). Whatever lies between the end of the BodyLength value and the start
//! of the `35=` tag is therefore the separator, be it SOH, `|`, a caret
//! notation such as `^A`, or any longer token.

use fixlens_core::error::DecodeError;
use fixlens_core::message::RawMessage;
use fixlens_core::types::tags;
use regex::Regex;
use std::sync::LazyLock;

/// BodyLength field with its numeric value.
static BODY_LENGTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9]9=[0-9]+").expect("body length pattern is a valid regex")
});

/// Start of the MsgType tag, captured without its leading separator byte.
static MSG_TYPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9](35=)").expect("msg type pattern is a valid regex")
});

/// Infers the field separator of a message.
///
/// The returned slice borrows from the message.
///
/// # Arguments
/// * `message` - One complete FIX message
///
/// # Errors
/// Returns `DecodeError::MalformedHeader` if the BodyLength field, or a MsgType
/// field after it, cannot be located.
pub fn guess_delimiter<'a>(message: &RawMessage<'a>) -> Result<&'a str, DecodeError> {
    let text = message.as_str();

    let body_length_end = BODY_LENGTH_PATTERN
        .find(text)
        .ok_or(DecodeError::MalformedHeader {
            tag: tags::BODY_LENGTH,
        })?
        .end();

    let msg_type_start = MSG_TYPE_PATTERN
        .captures_at(text, body_length_end)
        .and_then(|caps| caps.get(1))
        .ok_or(DecodeError::MalformedHeader {
            tag: tags::MSG_TYPE,
        })?
        .start();

    Ok(&text[body_length_end..msg_type_start])
}
