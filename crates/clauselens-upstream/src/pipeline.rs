//! HTTP client for the external analysis pipeline.
//!
//! One POST per analyze call, no retries and no caching. Timeouts, if wanted,
//! are the caller's business via its own runtime configuration.

use clauselens_core::request::{RequestError, clean_input};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

/// Production pipeline execution endpoint. Overridable per deployment.
pub const DEFAULT_PIPELINE_URL: &str =
    "https://api.airia.ai/v2/PipelineExecution/e5ef2bd1-1b53-47f0-b37b-a4e92250aea1";

const API_KEY_HEADER: &str = "X-API-KEY";

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("pipeline returned {status}: {body}")]
    Pipeline { status: u16, body: String },
    #[error("pipeline response is not JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Request(#[from] RequestError),
}

impl UpstreamError {
    /// Short message safe to hand back to callers. Full detail, including the
    /// upstream response body, stays in the server-side log.
    pub fn public_message(&self) -> String {
        match self {
            UpstreamError::Http(_) => "Upstream request failed.".to_string(),
            UpstreamError::Pipeline { status, .. } => {
                format!("Upstream pipeline returned status {status}.")
            }
            UpstreamError::Json(_) => "Upstream response was not valid JSON.".to_string(),
            UpstreamError::Request(err) => err.to_string(),
        }
    }
}

/// Connection settings, passed in explicitly so nothing reads the environment
/// ambiently and tests never need it set up.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub pipeline_url: String,
    pub api_key: String,
}

/// Body of a pipeline execution request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRequest {
    pub user_input: String,
    pub async_output: bool,
}

impl PipelineRequest {
    /// Wrap user text into a request body. Empty input is rejected here even
    /// if the submitting control already blocked it.
    pub fn new(user_input: &str) -> Result<Self, RequestError> {
        Ok(Self {
            user_input: clean_input(user_input)?.to_string(),
            async_output: false,
        })
    }
}

/// Client for the analysis pipeline.
pub struct UpstreamClient {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Submit clause text and return the pipeline's raw JSON payload.
    ///
    /// The payload is deliberately untyped here; shape classification belongs
    /// to the normaliser.
    pub async fn analyze(&self, user_input: &str) -> Result<Value, UpstreamError> {
        let request = PipelineRequest::new(user_input)?;

        info!(url = %self.config.pipeline_url, chars = request.user_input.len(), "calling analysis pipeline");
        let resp = self
            .client
            .post(&self.config.pipeline_url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        info!(status = status.as_u16(), "pipeline responded");
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(UpstreamError::Pipeline {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text().await?;
        let raw = serde_json::from_str(&text).inspect_err(|err| {
            error!(error = %err, "pipeline response body is not JSON");
        })?;
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_wire_names() {
        let request = PipelineRequest::new("clause text").unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["userInput"], "clause text");
        assert_eq!(json["asyncOutput"], false);
    }

    #[test]
    fn request_trims_input() {
        let request = PipelineRequest::new("  clause text  ").unwrap();
        assert_eq!(request.user_input, "clause text");
    }

    #[test]
    fn empty_input_never_becomes_a_request() {
        assert_eq!(
            PipelineRequest::new(" \n ").unwrap_err(),
            RequestError::EmptyInput
        );
    }

    #[test]
    fn public_messages_omit_response_bodies() {
        let err = UpstreamError::Pipeline {
            status: 502,
            body: "long upstream dump".into(),
        };
        let msg = err.public_message();
        assert!(msg.contains("502"));
        assert!(!msg.contains("dump"));
    }
}
