//! Parameter Decoding
//!
//! Positional arguments arrive as hex text of ABI-encoded words. The
//! decoder turns them into typed values before anything touches the network.

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolValue;
use thiserror::Error;

use super::mode::{AmountSide, QuoteMode};

/// Decoding errors, tagged with the offending argument name
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("expected {expected} arguments, got {actual}")]
    ArgumentCount { expected: usize, actual: usize },
    #[error("argument '{name}' is not valid hex: {reason}")]
    InvalidHex { name: &'static str, reason: String },
    #[error("argument '{name}' is not a valid ABI {abi_type}: {reason}")]
    InvalidAbi {
        name: &'static str,
        abi_type: &'static str,
        reason: String,
    },
}

/// Typed values decoded from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteParams {
    pub quantity: U256,
    pub sell_token: Address,
    pub buy_token: Address,
    /// Present only in mint-aware mode
    pub mint: Option<bool>,
}

impl QuoteParams {
    /// Decode the positional arguments for `mode`.
    ///
    /// The count is checked before any argument is decoded.
    pub fn decode<S: AsRef<str>>(mode: QuoteMode, args: &[S]) -> Result<Self, DecodeError> {
        if args.len() != mode.arg_count() {
            return Err(DecodeError::ArgumentCount {
                expected: mode.arg_count(),
                actual: args.len(),
            });
        }

        let quantity = decode_uint("quantity", args[0].as_ref())?;
        let sell_token = decode_address("sellToken", args[1].as_ref())?;
        let buy_token = decode_address("buyToken", args[2].as_ref())?;

        let mint = match mode {
            QuoteMode::MintAware => {
                let flag = decode_uint("isMint", args[3].as_ref())?;
                Some(flag == U256::from(1))
            }
            QuoteMode::Plain => None,
        };

        Ok(Self {
            quantity,
            sell_token,
            buy_token,
            mint,
        })
    }

    /// Side the quantity is quoted on for `mode`
    pub fn side(&self, mode: QuoteMode) -> AmountSide {
        mode.request_side(self.mint)
    }
}

/// Parse hex text with an optional `0x` prefix
pub fn parse_hex(name: &'static str, arg: &str) -> Result<Vec<u8>, DecodeError> {
    let trimmed = arg.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    hex::decode(digits).map_err(|e| DecodeError::InvalidHex {
        name,
        reason: e.to_string(),
    })
}

/// Decode one ABI `uint256` word
pub fn decode_uint(name: &'static str, arg: &str) -> Result<U256, DecodeError> {
    let bytes = parse_hex(name, arg)?;
    U256::abi_decode(&bytes).map_err(|e| DecodeError::InvalidAbi {
        name,
        abi_type: "uint256",
        reason: e.to_string(),
    })
}

/// Decode one ABI `address` word
pub fn decode_address(name: &'static str, arg: &str) -> Result<Address, DecodeError> {
    let bytes = parse_hex(name, arg)?;

    // The lenient decoder drops the upper 12 bytes; they must be zero padding
    if bytes.len() >= 32 && bytes[..12].iter().any(|b| *b != 0) {
        return Err(DecodeError::InvalidAbi {
            name,
            abi_type: "address",
            reason: "non-zero padding in upper 12 bytes".to_string(),
        });
    }

    Address::abi_decode(&bytes).map_err(|e| DecodeError::InvalidAbi {
        name,
        abi_type: "address",
        reason: e.to_string(),
    })
}
