use std::sync::{Arc, Mutex};
use async_trait::async_trait;

use crate::domain::{Quote, QuoteRequest};
use super::quote_source::{QuoteError, QuoteSource};

/// Quote source that returns a fixed outcome and records every request
#[derive(Debug, Clone)]
pub struct StaticQuoteSource {
    calls: Arc<Mutex<Vec<QuoteRequest>>>,
    response: Result<Quote, String>,
}

impl StaticQuoteSource {
    /// Always answer with `quote`
    pub fn ok(quote: Quote) -> Self {
        Self {
            calls: Arc::default(),
            response: Ok(quote),
        }
    }

    /// Always fail with a transport error carrying `reason`
    pub fn failing(reason: &str) -> Self {
        Self {
            calls: Arc::default(),
            response: Err(reason.to_string()),
        }
    }

    /// Get all recorded requests
    pub fn get_calls(&self) -> Vec<QuoteRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl QuoteSource for StaticQuoteSource {
    async fn fetch_quote(&self, request: &QuoteRequest) -> Result<Quote, QuoteError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }
        self.response.clone().map_err(QuoteError::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AmountSide;
    use alloy_primitives::{Address, Bytes, U256};

    fn request() -> QuoteRequest {
        QuoteRequest {
            buy_token: Address::ZERO,
            sell_token: Address::ZERO,
            side: AmountSide::Sell,
            amount: U256::from(7),
            slippage_percentage: 0.001,
        }
    }

    #[tokio::test]
    async fn test_static_source_records_calls() {
        let quote = Quote {
            data: Bytes::new(),
            buy_amount: "1".to_string(),
            sell_amount: "2".to_string(),
            to: Address::ZERO,
        };
        let source = StaticQuoteSource::ok(quote.clone());

        let result = source.fetch_quote(&request()).await.unwrap();
        assert_eq!(result, quote);
        assert_eq!(source.get_calls(), vec![request()]);
    }

    #[tokio::test]
    async fn test_failing_source() {
        let source = StaticQuoteSource::failing("connection refused");
        let err = source.fetch_quote(&request()).await.unwrap_err();
        assert!(matches!(err, QuoteError::Transport(ref r) if r == "connection refused"));
        assert_eq!(source.get_calls().len(), 1);
    }
}
