//! Result Encoding
//!
//! Packs the selected quote fields into the canonical ABI parameter layout,
//! the same bytes `abi.encode(a, b, ...)` produces on chain.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolValue;
use thiserror::Error;

use super::mode::{AmountSide, QuoteMode};
use super::quote::Quote;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("quote field '{field}' is not a decimal uint256: {value:?}")]
    InvalidAmount { field: &'static str, value: String },
}

/// Parse a decimal amount string from the API
pub fn parse_amount(field: &'static str, value: &str) -> Result<U256, EncodeError> {
    let invalid = || EncodeError::InvalidAmount {
        field,
        value: value.to_string(),
    };

    // from_str_radix skips '_' and reads "" as zero
    let digits = value.trim();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    U256::from_str_radix(digits, 10).map_err(|_| invalid())
}

/// `(bytes[], uint256)`, call data wrapped in a one-element array
pub fn encode_mint_aware(call_data: &Bytes, amount: U256) -> Vec<u8> {
    (vec![call_data.clone()], amount).abi_encode_params()
}

/// `(bytes, uint256, address)`
pub fn encode_plain(call_data: &Bytes, buy_amount: U256, to: Address) -> Vec<u8> {
    (call_data.clone(), buy_amount, to).abi_encode_params()
}

/// Encode `quote` for `mode`.
///
/// `request_side` is the side the quantity was quoted on; the mint-aware
/// layout reports the amount on the other side.
pub fn encode_quote(
    mode: QuoteMode,
    request_side: AmountSide,
    quote: &Quote,
) -> Result<Vec<u8>, EncodeError> {
    match mode {
        QuoteMode::MintAware => {
            let side = request_side.opposite();
            let amount = parse_amount(side.query_param(), quote.amount(side))?;
            Ok(encode_mint_aware(&quote.data, amount))
        }
        QuoteMode::Plain => {
            let buy_amount = parse_amount("buyAmount", &quote.buy_amount)?;
            Ok(encode_plain(&quote.data, buy_amount, quote.to))
        }
    }
}
