//! Server side of the unary `Analyze` call.
//!
//! Mirrors the HTTP route up to normalisation, then flattens the canonical
//! result into keyed string entries for the wire: the full record as JSON
//! under `analysis`, plus scalar fields as plain entries for legacy readers
//! that walk the map directly.

use std::collections::HashMap;

use clauselens_core::normalize::{NormalizeError, normalize};
use clauselens_core::result::AnalysisResult;
use clauselens_upstream::{UpstreamClient, UpstreamError};
use thiserror::Error;
use tracing::info;

use crate::message::{AnalyzeRequest, AnalyzeResponse, ResultData};

#[derive(Debug, Error)]
pub enum RpcError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error("encoding analysis result: {0}")]
    Encode(#[from] serde_json::Error),
}

impl RpcError {
    /// Message for the transport's status field; payload detail stays in the
    /// server log.
    pub fn status_message(&self) -> String {
        match self {
            RpcError::Upstream(err) => err.public_message(),
            RpcError::Normalize(err) => clauselens_core::present::error_message(err),
            RpcError::Encode(_) => "Failed to encode analysis result.".to_string(),
        }
    }
}

/// Handle one unary call end to end: forward to the pipeline, normalise,
/// flatten.
pub async fn handle_analyze(
    upstream: &UpstreamClient,
    request: &AnalyzeRequest,
) -> Result<AnalyzeResponse, RpcError> {
    info!(chars = request.user_input.len(), "rpc analyze request");
    let raw = upstream.analyze(&request.user_input).await?;
    respond(&raw)
}

/// The pure part of the handler: raw pipeline payload to wire response.
pub fn respond(raw: &serde_json::Value) -> Result<AnalyzeResponse, RpcError> {
    let result = normalize(raw)?;
    Ok(AnalyzeResponse {
        result: Some(ResultData {
            data: result_entries(&result)?,
        }),
    })
}

/// Flatten a canonical result into wire entries.
pub fn result_entries(result: &AnalysisResult) -> Result<HashMap<String, String>, serde_json::Error> {
    let mut data = HashMap::new();
    data.insert("analysis".to_string(), serde_json::to_string(result)?);

    if let Some(topic) = &result.topic {
        data.insert("topic".to_string(), topic.clone());
    }
    if let Some(summary) = &result.summary {
        data.insert("summary".to_string(), summary.clone());
    }
    if let Some(text) = &result.suggested_neutral_text {
        data.insert("suggested_neutral_text".to_string(), text.clone());
    }
    if let Some(score) = result.fake_contract_score {
        data.insert("fake_contract_score".to_string(), score.to_string());
    }
    Ok(data)
}
