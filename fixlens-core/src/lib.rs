/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixLens Core
//!
//! Core types and error definitions for the FixLens FIX decoder.
//!
//! This crate provides the building blocks shared by every FixLens crate:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Field types**: [`FieldMap`], the raw tag/value view of one message
//! - **Message types**: [`RawMessage`], [`DecodedMessage`] and [`MsgDetail`]
//! - **Tags**: Numeric identifiers and names of the fields the decoder relies on
//!
//! ## Zero-Copy Design
//!
//! Raw messages and field maps borrow from the input text. Only the decoded,
//! human-readable view owns its strings, since it outlives the input when
//! cached for correlation.

pub mod error;
pub mod field;
pub mod message;
pub mod types;

pub use error::{DecodeError, DictionaryError, FixlensError, Result};
pub use field::FieldMap;
pub use message::{DecodedMessage, MsgDetail, RawMessage};
