/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixLens Tag-Value
//!
//! Zero-copy scanning of FIX tag=value text for the FixLens decoder.
//!
//! Unlike a session-level decoder, this crate makes no assumption about the
//! field separator. Text pasted from logs, e-mails or terminals may use SOH,
//! `|`, `^A` or nothing at all between fields, so the pipeline is:
//!
//! 1. [`extract_messages`]: find message boundaries from FIX structure alone
//! 2. [`guess_delimiter`]: infer the separator from the BodyLength/MsgType pair
//! 3. [`split_key_vals`]: split the message into a [`FieldMap`]

pub mod delimiter;
pub mod extractor;
pub mod splitter;

pub use delimiter::guess_delimiter;
pub use extractor::{Extractor, extract_messages};
pub use fixlens_core::field::FieldMap;
pub use fixlens_core::message::RawMessage;
pub use splitter::{Segments, split_key_vals};

/// SOH (Start of Header), the standard FIX field separator.
pub const SOH: &str = "\u{1}";
