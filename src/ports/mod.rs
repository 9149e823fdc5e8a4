//! Ports Layer - Trait definitions for external dependencies
//!
//! The pipeline only sees `QuoteSource`; the 0x HTTP client and the test
//! doubles both sit behind it.

pub mod quote_source;
pub mod mocks;

pub use quote_source::{QuoteError, QuoteSource};
pub use mocks::StaticQuoteSource;

#[cfg(test)]
pub use quote_source::MockQuoteSource;
