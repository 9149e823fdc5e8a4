//! 0x API Client
//!
//! HTTP client for the 0x swap API v1. Issues exactly one GET per quote.

use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;

use crate::domain::{Quote, QuoteRequest};
use crate::ports::{QuoteError, QuoteSource};
use super::quote::QuoteResponse;

pub const DEFAULT_API_URL: &str = "https://api.0x.org";
pub const QUOTE_PATH: &str = "/swap/v1/quote";
pub const DEFAULT_SLIPPAGE_PERCENTAGE: f64 = 0.001;

/// 0x API client configuration
#[derive(Debug, Clone)]
pub struct ZeroExConfig {
    /// Base URL for the 0x API (chain specific host)
    pub api_base_url: String,
    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ZeroExConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

/// 0x swap aggregator client
#[derive(Debug, Clone)]
pub struct ZeroExClient {
    config: ZeroExConfig,
    http: Client,
}

impl ZeroExClient {
    /// Create a new 0x client with default configuration
    pub fn new() -> Result<Self, QuoteError> {
        Self::with_config(ZeroExConfig::default())
    }

    /// Create a new 0x client with custom configuration
    pub fn with_config(config: ZeroExConfig) -> Result<Self, QuoteError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| QuoteError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Full URL of the quote endpoint
    pub fn quote_url(&self) -> String {
        format!("{}{}", self.config.api_base_url.trim_end_matches('/'), QUOTE_PATH)
    }

    /// Get a quote for a token swap
    pub async fn get_quote(&self, request: &QuoteRequest) -> Result<QuoteResponse, QuoteError> {
        let url = self.quote_url();
        tracing::debug!(
            "GET {} buyToken={} sellToken={} {}={}",
            url,
            request.buy_token,
            request.sell_token,
            request.side.query_param(),
            request.amount
        );

        let response = self
            .http
            .get(&url)
            .query(&request.query_pairs())
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("0x quote request failed: {}", e);
                QuoteError::Transport(e.to_string())
            })?;

        self.handle_response(response).await
    }

    /// Handle API response and deserialize
    async fn handle_response(&self, response: reqwest::Response) -> Result<QuoteResponse, QuoteError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| QuoteError::Transport(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            tracing::debug!("0x API returned {}: {}", status, body);
            return Err(QuoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::debug!("Unexpected 0x quote payload: {}", e);
            QuoteError::Parse(e.to_string())
        })
    }

    /// Get the configured API base URL
    pub fn api_base_url(&self) -> &str {
        &self.config.api_base_url
    }
}

#[async_trait]
impl QuoteSource for ZeroExClient {
    async fn fetch_quote(&self, request: &QuoteRequest) -> Result<Quote, QuoteError> {
        let response = self.get_quote(request).await?;
        tracing::info!(
            "Quote: sell {} -> buy {} via {} (sources: {})",
            response.sell_amount,
            response.buy_amount,
            response.to,
            response.active_sources().join(", ")
        );
        Ok(response.into())
    }
}
