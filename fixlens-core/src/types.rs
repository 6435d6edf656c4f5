/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Well-known FIX tags and field names.
//!
//! The decoder only interprets a handful of fields itself; everything else is
//! resolved through the tag dictionary. Tag numbers are used while scanning raw
//! text, field names once a message has been decorated.

/// Numeric identifiers of the fields the decoder relies on.
pub mod tags {
    /// BodyLength (9), always immediately precedes MsgType.
    pub const BODY_LENGTH: u32 = 9;
    /// MsgType (35).
    pub const MSG_TYPE: u32 = 35;
}

/// Human-readable names of the fields read back from decoded messages.
pub mod names {
    /// Name of the client order id field.
    pub const CL_ORD_ID: &str = "ClOrdID";
    /// Name of the cumulative quantity field.
    pub const CUM_QTY: &str = "CumQty";
    /// Name of the message type field.
    pub const MSG_TYPE: &str = "MsgType";
    /// Name of the order quantity field.
    pub const ORDER_QTY: &str = "OrderQty";
    /// Name of the original client order id field.
    pub const ORIG_CL_ORD_ID: &str = "OrigClOrdID";
    /// Name of the price field.
    pub const PRICE: &str = "Price";
    /// Name of the free-text field.
    pub const TEXT: &str = "Text";
    /// Key under which the derived detail object is serialized.
    pub const MSG_DETAIL: &str = "MsgDetail";
}
