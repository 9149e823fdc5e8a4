//! Domain Layer - Core quote bridging logic
//!
//! Pure types and transformations with no network or process access.
//! External interactions happen through the ports layer.
//!
//! - `mode`: the mint-aware and plain pipeline variants
//! - `params`: ABI decoding of positional arguments
//! - `quote`: request and quote values exchanged with the aggregator
//! - `encoding`: ABI encoding of the selected quote fields

pub mod mode;
pub mod params;
pub mod quote;
pub mod encoding;

pub use mode::{AmountSide, QuoteMode};
pub use params::{QuoteParams, DecodeError};
pub use quote::{Quote, QuoteRequest};
pub use encoding::{encode_quote, EncodeError};
