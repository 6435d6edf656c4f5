/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Correlation store trait definition.

use fixlens_core::message::DecodedMessage;
use std::sync::Arc;

/// Lookup table from client order id (ClOrdID) to the first decoded message
/// that carried it.
///
/// Entries are never overwritten: once an id is present, later messages with
/// the same id leave the cached original untouched. Implementations shared
/// between threads must perform the check and the insert as one atomic step.
pub trait CorrelationStore: Send + Sync {
    /// Returns the first message seen with the given client order id.
    fn get(&self, cl_ord_id: &str) -> Option<Arc<DecodedMessage>>;

    /// Stores a message unless the id is already present.
    ///
    /// # Returns
    /// `true` if the message was stored, `false` if the id was already taken
    /// or the store refused it.
    fn insert_if_absent(&self, cl_ord_id: &str, message: Arc<DecodedMessage>) -> bool;

    /// Returns the number of correlated ids.
    fn len(&self) -> usize;

    /// Returns true if nothing has been stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry.
    fn clear(&self);
}
