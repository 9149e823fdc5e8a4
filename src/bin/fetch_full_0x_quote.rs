//! fetch-full-0x-quote <quantity> <sellToken> <buyToken>
//!
//! Emits `(bytes, uint256, address)`: call data, buy amount and the
//! contract to call.

use zerox_quote::adapters::cli;
use zerox_quote::domain::QuoteMode;

#[tokio::main]
async fn main() {
    let code = cli::run(QuoteMode::Plain).await;
    std::process::exit(code);
}
