/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixLens
//!
//! Turns raw FIX text, as pasted from logs, e-mails or terminals, into
//! readable messages.
//!
//! FixLens finds every FIX message in a blob of text, works out which field
//! separator it uses, and resolves numeric tags and coded values through a
//! tag dictionary. A few message types get extra derived data computed from
//! earlier messages of the same order.
//!
//! ## Features
//!
//! - **Forgiving extraction**: Messages are found anywhere in the text
//! - **Separator inference**: SOH, `|`, `^A` or any other separator
//! - **Embedded dictionary**: FIX 4.4 names and value labels out of the box
//! - **Order correlation**: Cancel requests and execution reports are linked
//!   to the order they refer to
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fixlens::prelude::*;
//!
//! let parser = FixParser::new()?;
//! for message in parser.parse("8=FIX.4.4|9=5|35=0|10=000|")? {
//!     println!("{}", serde_json::to_string(&message)?);
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Message types and error definitions
//! - [`dictionary`]: Tag dictionary loading and lookup
//! - [`tagvalue`]: Extraction, separator inference and splitting
//! - [`store`]: Correlation storage
//! - [`engine`]: Decode pipeline facade

pub mod core {
    //! Message types and error definitions.
    pub use fixlens_core::*;
}

pub mod dictionary {
    //! Tag dictionary loading and lookup.
    pub use fixlens_dictionary::*;
}

pub mod tagvalue {
    //! Extraction, separator inference and splitting.
    pub use fixlens_tagvalue::*;
}

pub mod store {
    //! Correlation storage.
    pub use fixlens_store::*;
}

pub mod engine {
    //! Decode pipeline facade.
    pub use fixlens_engine::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use fixlens_core::{
        DecodeError, DecodedMessage, DictionaryError, FieldMap, FixlensError, MsgDetail,
        RawMessage, Result,
    };

    // Dictionary
    pub use fixlens_dictionary::{DictionaryEntry, TagDictionary};

    // Tag-value text
    pub use fixlens_tagvalue::{SOH, extract_messages, guess_delimiter, split_key_vals};

    // Store
    pub use fixlens_store::{CorrelationStore, MemoryStore};

    // Engine
    pub use fixlens_engine::{
        DecoderConfig, DelimiterMode, DetailDispatcher, FixParser, FixParserBuilder,
        MessageDecorator, MsgKind,
    };
}
