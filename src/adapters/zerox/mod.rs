//! 0x Adapter
//!
//! Implementation of the QuoteSource port for the 0x swap aggregator.

mod client;
mod quote;

pub use client::{ZeroExClient, ZeroExConfig, DEFAULT_API_URL, DEFAULT_SLIPPAGE_PERCENTAGE, QUOTE_PATH};
pub use quote::QuoteResponse;
