/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixLens Dictionary
//!
//! Tag dictionary used to turn numeric FIX tags and coded values into
//! readable names.
//!
//! This crate provides:
//! - **Schema definitions**: [`DictionaryEntry`] and [`TagDictionary`]
//! - **Loading**: JSON data files, from a string or from disk
//! - **Embedded dictionary**: A bundled FIX 4.4 tag table

pub mod schema;

pub use schema::{DictionaryEntry, TagDictionary};
