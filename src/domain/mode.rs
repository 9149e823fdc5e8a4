//! Quote Mode
//!
//! The two programs share one pipeline. `QuoteMode` carries everything that
//! differs between them: argument count, which amount is requested, and the
//! shape of the encoded result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which pipeline variant is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteMode {
    /// `fetch-0x-quote`: takes a mint flag, emits `(bytes[], uint256)`
    MintAware,
    /// `fetch-full-0x-quote`: always sells, emits `(bytes, uint256, address)`
    Plain,
}

impl QuoteMode {
    /// Number of positional ABI arguments the program expects
    pub fn arg_count(&self) -> usize {
        self.param_names().len()
    }

    /// Positional parameter names, in order
    pub fn param_names(&self) -> &'static [&'static str] {
        match self {
            QuoteMode::MintAware => &["quantity", "sellToken", "buyToken", "isMint"],
            QuoteMode::Plain => &["quantity", "sellToken", "buyToken"],
        }
    }

    /// Usage text printed on an argument count mismatch
    pub fn usage(&self) -> String {
        format!(
            "please supply the correct parameters:\n    {}\n",
            self.param_names().join(" ")
        )
    }

    /// Side the requested quantity refers to.
    ///
    /// Only the mint-aware variant ever quotes by buy amount.
    pub fn request_side(&self, mint: Option<bool>) -> AmountSide {
        match (self, mint) {
            (QuoteMode::MintAware, Some(true)) => AmountSide::Buy,
            _ => AmountSide::Sell,
        }
    }
}

impl fmt::Display for QuoteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteMode::MintAware => write!(f, "mint-aware"),
            QuoteMode::Plain => write!(f, "plain"),
        }
    }
}

/// Side of the swap an amount is expressed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountSide {
    Buy,
    Sell,
}

impl AmountSide {
    /// Query parameter name used by the 0x API for this side
    pub fn query_param(&self) -> &'static str {
        match self {
            AmountSide::Buy => "buyAmount",
            AmountSide::Sell => "sellAmount",
        }
    }

    pub fn opposite(&self) -> AmountSide {
        match self {
            AmountSide::Buy => AmountSide::Sell,
            AmountSide::Sell => AmountSide::Buy,
        }
    }
}
