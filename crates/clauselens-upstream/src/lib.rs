pub mod pipeline;

pub use pipeline::{
    DEFAULT_PIPELINE_URL, PipelineRequest, UpstreamClient, UpstreamConfig, UpstreamError,
};
