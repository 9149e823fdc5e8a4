//! fetch-0x-quote <quantity> <sellToken> <buyToken> <isMint>
//!
//! Emits `(bytes[], uint256)`: the swap call data and the amount on the
//! opposite side of the requested quantity.

use zerox_quote::adapters::cli;
use zerox_quote::domain::QuoteMode;

#[tokio::main]
async fn main() {
    let code = cli::run(QuoteMode::MintAware).await;
    std::process::exit(code);
}
