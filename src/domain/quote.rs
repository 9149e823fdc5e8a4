//! Quote Values
//!
//! What goes to the aggregator and the subset of its answer the encoder uses.

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use super::mode::AmountSide;

/// The parts of an aggregator quote the encoder cares about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Call data to submit to `to`
    pub data: Bytes,
    /// Decimal string, as returned by the API
    pub buy_amount: String,
    /// Decimal string, as returned by the API
    pub sell_amount: String,
    /// Target contract for `data`
    pub to: Address,
}

impl Quote {
    /// Raw amount string for one side of the swap
    pub fn amount(&self, side: AmountSide) -> &str {
        match side {
            AmountSide::Buy => &self.buy_amount,
            AmountSide::Sell => &self.sell_amount,
        }
    }
}

/// Parameters of a single quote request
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRequest {
    pub buy_token: Address,
    pub sell_token: Address,
    /// Which amount parameter carries `amount`
    pub side: AmountSide,
    pub amount: U256,
    pub slippage_percentage: f64,
}

impl QuoteRequest {
    /// Query pairs in the order the API documents them
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("buyToken", self.buy_token.to_string()),
            ("sellToken", self.sell_token.to_string()),
            (self.side.query_param(), self.amount.to_string()),
            ("slippagePercentage", self.slippage_percentage.to_string()),
        ]
    }
}
