use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Quote, QuoteRequest};

/// Quote fetch errors
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("HTTP request failed: {0}")]
    Transport(String),
    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

/// Anything that can turn a quote request into a quote.
///
/// One call per invocation; implementations do not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quote(&self, request: &QuoteRequest) -> Result<Quote, QuoteError>;
}
