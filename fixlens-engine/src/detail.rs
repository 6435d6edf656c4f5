/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Message-type-specific derived data.
//!
//! Only a closed set of message types carries a detail object. Each kind maps
//! to one computation; every other message type gets no detail at all.

use fixlens_core::error::DecodeError;
use fixlens_core::message::{DecodedMessage, MsgDetail};
use fixlens_core::types::names;
use fixlens_store::CorrelationStore;
use std::sync::Arc;
use tracing::warn;

/// Message types with a detail computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MsgKind {
    /// Execution Report (8).
    ExecutionReport,
    /// Session-level Reject (3).
    Reject,
    /// Order Cancel Request (F).
    OrderCancelRequest,
    /// Any message type without a detail rule.
    Other,
}

impl std::str::FromStr for MsgKind {
    type Err = std::convert::Infallible;

    /// Creates a MsgKind from a resolved message type name.
    ///
    /// # Arguments
    /// * `s` - The MsgType label (e.g., "EXECUTION_REPORT")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "EXECUTION_REPORT" => Self::ExecutionReport,
            "REJECT" => Self::Reject,
            "ORDER_CANCEL_REQUEST" => Self::OrderCancelRequest,
            _ => Self::Other,
        })
    }
}

impl MsgKind {
    /// Returns the kind of a decoded message.
    #[must_use]
    pub fn of(message: &DecodedMessage) -> Self {
        message
            .msg_type()
            .and_then(|label| label.parse().ok())
            .unwrap_or(Self::Other)
    }

    /// Returns true if this kind produces a detail object.
    #[must_use]
    pub const fn has_detail(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// Computes the detail object of a decoded message.
///
/// Correlated lookups go through the store by the message's OrigClOrdID.
#[derive(Debug)]
pub struct DetailDispatcher<'s, S: CorrelationStore + ?Sized> {
    store: &'s S,
    strict_correlation: bool,
}

impl<'s, S: CorrelationStore + ?Sized> DetailDispatcher<'s, S> {
    /// Creates a dispatcher that treats missing correlations as errors.
    #[must_use]
    pub const fn new(store: &'s S) -> Self {
        Self {
            store,
            strict_correlation: true,
        }
    }

    /// Sets whether a missing correlated message is an error.
    #[must_use]
    pub const fn with_strict_correlation(mut self, strict: bool) -> Self {
        self.strict_correlation = strict;
        self
    }

    /// Computes the detail for a message.
    ///
    /// # Returns
    /// `None` for message types without a detail rule.
    ///
    /// # Errors
    /// Returns `DecodeError::MissingCorrelation` for an order cancel request
    /// whose original order was never seen, in strict mode.
    pub fn dispatch(&self, message: &DecodedMessage) -> Result<Option<MsgDetail>, DecodeError> {
        match MsgKind::of(message) {
            MsgKind::ExecutionReport => Ok(Some(self.execution_report(message))),
            MsgKind::Reject => Ok(Some(reject(message))),
            MsgKind::OrderCancelRequest => self.order_cancel_request(message).map(Some),
            MsgKind::Other => Ok(None),
        }
    }

    fn original(&self, message: &DecodedMessage) -> Option<Arc<DecodedMessage>> {
        message.orig_cl_ord_id().and_then(|id| self.store.get(id))
    }

    fn execution_report(&self, message: &DecodedMessage) -> MsgDetail {
        let percent_complete = self.original(message).and_then(|_| {
            let qty = parse_qty(message.get(names::ORDER_QTY)).filter(|qty| *qty != 0.0)?;
            let cum_qty = parse_qty(message.get(names::CUM_QTY))?;
            Some(100.0 * cum_qty / qty)
        });
        MsgDetail::ExecutionReport { percent_complete }
    }

    fn order_cancel_request(&self, message: &DecodedMessage) -> Result<MsgDetail, DecodeError> {
        match self.original(message) {
            Some(original) => Ok(MsgDetail::OrderCancelRequest {
                original_price: original.get(names::PRICE).map(str::to_string),
            }),
            None if self.strict_correlation => Err(DecodeError::MissingCorrelation {
                orig_cl_ord_id: message.orig_cl_ord_id().map(str::to_string),
            }),
            None => {
                warn!(
                    orig_cl_ord_id = message.orig_cl_ord_id().unwrap_or(""),
                    "cancel request without a known original order"
                );
                Ok(MsgDetail::OrderCancelRequest {
                    original_price: None,
                })
            }
        }
    }
}

fn reject(message: &DecodedMessage) -> MsgDetail {
    MsgDetail::Reject {
        text: message.get(names::TEXT).unwrap_or_default().to_string(),
    }
}

/// Parses a quantity; non-finite and non-numeric values are unusable.
fn parse_qty(value: Option<&str>) -> Option<f64> {
    value?.trim().parse::<f64>().ok().filter(|qty| qty.is_finite())
}
