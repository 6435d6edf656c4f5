/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! In-memory correlation store implementation.
//!
//! Not persistent: entries live as long as the store. By default the store
//! grows without bound; long-running callers should either set a capacity
//! limit or clear it at session boundaries.

use crate::traits::CorrelationStore;
use fixlens_core::message::DecodedMessage;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tracing::warn;

/// In-memory correlation store.
///
/// Check-and-insert happens under a single write lock, so concurrent decoders
/// racing on the same ClOrdID always agree on which message was first.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// First message seen per client order id.
    entries: RwLock<HashMap<String, Arc<DecodedMessage>>>,
    /// Maximum number of ids retained, if bounded.
    capacity_limit: Option<usize>,
}

impl MemoryStore {
    /// Creates a new, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that retains at most `limit` ids.
    ///
    /// Once full, new ids are refused; existing entries are kept so that
    /// first-write-wins still holds.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of correlated ids
    #[must_use]
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity_limit: Some(limit),
        }
    }

    /// Returns the configured capacity limit.
    #[must_use]
    pub const fn capacity_limit(&self) -> Option<usize> {
        self.capacity_limit
    }

    /// Checks if an id has been correlated.
    #[must_use]
    pub fn contains(&self, cl_ord_id: &str) -> bool {
        self.entries.read().contains_key(cl_ord_id)
    }
}

impl CorrelationStore for MemoryStore {
    fn get(&self, cl_ord_id: &str) -> Option<Arc<DecodedMessage>> {
        self.entries.read().get(cl_ord_id).cloned()
    }

    fn insert_if_absent(&self, cl_ord_id: &str, message: Arc<DecodedMessage>) -> bool {
        let mut entries = self.entries.write();
        let len = entries.len();
        match entries.entry(cl_ord_id.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(_) if self.capacity_limit.is_some_and(|limit| len >= limit) => {
                warn!(cl_ord_id, len, "correlation store full, dropping entry");
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(message);
                true
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }

    fn clear(&self) {
        self.entries.write().clear();
    }
}
