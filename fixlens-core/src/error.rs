/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for the FixLens decoder.
//!
//! This module provides a unified error hierarchy using `thiserror` for typed,
//! domain-specific errors across all FixLens operations.

use thiserror::Error;

/// Result type alias using [`FixlensError`] as the error type.
pub type Result<T> = std::result::Result<T, FixlensError>;

/// Top-level error type for all FixLens operations.
#[derive(Debug, Error)]
pub enum FixlensError {
    /// Error while decoding FIX text.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error while loading a tag dictionary.
    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while decoding FIX text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The input text has zero length.
    #[error("no text found, paste well formed FIX messages")]
    EmptyInput,

    /// The input is present but contains no recognizable FIX message.
    #[error("no well formed FIX message found")]
    NoMessagesFound,

    /// A header field needed to infer the delimiter could not be located.
    #[error("malformed header: tag {tag} not locatable")]
    MalformedHeader {
        /// The tag that could not be located (9 or 35).
        tag: u32,
    },

    /// A derived field needs a prior message that was never seen.
    #[error("no correlated message for OrigClOrdID {orig_cl_ord_id:?}")]
    MissingCorrelation {
        /// The referenced client order id, if the message carried one.
        orig_cl_ord_id: Option<String>,
    },

    /// The input exceeds the configured maximum size.
    #[error("input too large: {size} bytes exceeds maximum {max_size}")]
    InputTooLarge {
        /// Actual input size in bytes.
        size: usize,
        /// Maximum allowed size in bytes.
        max_size: usize,
    },
}

/// Errors that occur while loading a tag dictionary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The dictionary data is not valid.
    #[error("invalid dictionary data: {0}")]
    Parse(String),

    /// The dictionary file could not be read.
    #[error("dictionary i/o error: {0}")]
    Io(String),

    /// The same tag is defined twice.
    #[error("duplicate definition for tag {0}")]
    DuplicateTag(u32),
}
