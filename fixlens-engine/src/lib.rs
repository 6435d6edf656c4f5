/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixLens Engine
//!
//! Decode pipeline for the FixLens FIX decoder.
//!
//! This crate wires the pieces together:
//! - **Decorator**: Resolves tags and coded values through the dictionary
//! - **Detail dispatch**: Derives per-message-type data from correlated messages
//! - **Parser**: [`FixParser`], the entry point from raw text to decoded messages
//! - **Configuration**: [`DecoderConfig`] and its builder

pub mod config;
pub mod decorator;
pub mod detail;
pub mod parser;

pub use config::{DecoderConfig, DecoderConfigBuilder, DelimiterMode};
pub use decorator::MessageDecorator;
pub use detail::{DetailDispatcher, MsgKind};
pub use parser::{FixParser, FixParserBuilder};
