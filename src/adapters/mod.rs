//! Adapters Layer - External System Implementations
//!
//! - zerox: 0x swap aggregator API client
//! - cli: Command-line interface handlers
//! - output: Payload emitter for stdout

pub mod zerox;
pub mod cli;
pub mod output;

pub use zerox::ZeroExClient;
pub use cli::QuoteCli;
pub use output::OutputFormat;
