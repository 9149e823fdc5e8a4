//! Quote Pipeline
//!
//! Decode -> Fetch -> Re-encode for one invocation. Both programs run this
//! pipeline; the `QuoteMode` selects argument count, amount side and output
//! layout.

use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::{encode_quote, DecodeError, EncodeError, QuoteMode, QuoteParams, QuoteRequest};
use crate::ports::{QuoteError, QuoteSource};

/// Every way a run can end without a payload
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    Usage(String),
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
    #[error("Quote error: {0}")]
    Quote(#[from] QuoteError),
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl PipelineError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::Usage(_) => 1,
            PipelineError::Decode(DecodeError::ArgumentCount { .. }) => 1,
            PipelineError::Decode(_) => 2,
            PipelineError::Quote(_) => 3,
            PipelineError::Encode(_) => 4,
            PipelineError::Config(_) => 5,
            PipelineError::Output(_) => 6,
        }
    }
}

/// Single-shot quote pipeline over any quote source
pub struct QuotePipeline<S> {
    source: S,
    mode: QuoteMode,
    slippage_percentage: f64,
}

impl<S: QuoteSource> QuotePipeline<S> {
    pub fn new(source: S, mode: QuoteMode, slippage_percentage: f64) -> Self {
        Self {
            source,
            mode,
            slippage_percentage,
        }
    }

    pub fn mode(&self) -> QuoteMode {
        self.mode
    }

    /// Build the request sent to the aggregator
    pub fn build_request(&self, params: &QuoteParams) -> QuoteRequest {
        QuoteRequest {
            buy_token: params.buy_token,
            sell_token: params.sell_token,
            side: params.side(self.mode),
            amount: params.quantity,
            slippage_percentage: self.slippage_percentage,
        }
    }

    /// Run the whole pipeline on raw positional arguments.
    ///
    /// The returned bytes are complete; nothing is emitted on error.
    pub async fn run<A: AsRef<str>>(&self, args: &[A]) -> Result<Vec<u8>, PipelineError> {
        let params = QuoteParams::decode(self.mode, args)?;
        tracing::debug!(
            "Decoded {} params: quantity={} sell={} buy={} mint={:?}",
            self.mode,
            params.quantity,
            params.sell_token,
            params.buy_token,
            params.mint
        );

        let request = self.build_request(&params);
        let quote = self.source.fetch_quote(&request).await?;

        let encoded = encode_quote(self.mode, request.side, &quote)?;
        tracing::info!("Encoded {} quote payload ({} bytes)", self.mode, encoded.len());
        Ok(encoded)
    }
}
