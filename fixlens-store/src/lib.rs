/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixLens Store
//!
//! Correlation of decoded messages by client order id.
//!
//! This crate provides:
//! - **CorrelationStore trait**: Abstract first-write-wins lookup table
//! - **MemoryStore**: In-memory, optionally bounded implementation

pub mod memory;
pub mod traits;

pub use memory::MemoryStore;
pub use traits::CorrelationStore;
