//! zerox-quote - 0x swap quotes as ABI payloads
//!
//! Decodes ABI-encoded arguments, fetches a quote from the 0x aggregator and
//! re-encodes the interesting fields for a contract test harness.
//!
//! # Modules
//!
//! - `domain`: Quote modes, argument decoding, result encoding
//! - `ports`: Trait abstractions (QuoteSource)
//! - `adapters`: External implementations (0x client, CLI, stdout emitter)
//! - `config`: Configuration loading and validation
//! - `application`: The decode/fetch/encode pipeline

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;
pub mod application;
