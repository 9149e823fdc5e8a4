//! 0x Quote Types
//!
//! Response structure for the 0x swap API v1 `/swap/v1/quote` endpoint.

use alloy_primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};

use crate::domain::Quote;

/// Response from the 0x quote API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Call data for the exchange proxy
    pub data: Bytes,
    /// Buy amount in base units (decimal string)
    pub buy_amount: String,
    /// Sell amount in base units (decimal string)
    pub sell_amount: String,
    /// Contract to send `data` to
    pub to: Address,
    /// Address that needs an allowance on the sell token
    #[serde(default)]
    pub allowance_target: Option<Address>,
    #[serde(default)]
    pub chain_id: Option<u64>,
    /// Catch-all for fields we don't model (price, gas, sources, orders, ...)
    #[serde(flatten)]
    pub extra: std::collections::HashMap<String, serde_json::Value>,
}

impl QuoteResponse {
    /// Liquidity sources with a non-zero share of the route
    pub fn active_sources(&self) -> Vec<String> {
        self.extra
            .get("sources")
            .and_then(|v| v.as_array())
            .map(|sources| {
                sources
                    .iter()
                    .filter(|s| {
                        s.get("proportion")
                            .and_then(|p| p.as_str())
                            .and_then(|p| p.parse::<f64>().ok())
                            .is_some_and(|p| p > 0.0)
                    })
                    .filter_map(|s| s.get("name").and_then(|n| n.as_str()).map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl From<QuoteResponse> for Quote {
    fn from(response: QuoteResponse) -> Self {
        Quote {
            data: response.data,
            buy_amount: response.buy_amount,
            sell_amount: response.sell_amount,
            to: response.to,
        }
    }
}
