pub mod pipeline;

pub use pipeline::{QuotePipeline, PipelineError};
