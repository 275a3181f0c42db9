//! API routes for the analysis gateway.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use clauselens_core::normalize::normalize;
use clauselens_core::result::AnalysisResult;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::server::AppState;

type AppStateArc = Arc<AppState>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeBody {
    pub user_input: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn analyze_routes() -> Router<AppStateArc> {
    Router::new().route("/analyze", post(analyze))
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/healthz", get(|| async { "ok" }))
}

/// One inbound request, one outbound pipeline call, one normalised result.
/// Failures are logged in full here and reduced to a minimal message for the
/// caller.
async fn analyze(
    State(state): State<AppStateArc>,
    Json(body): Json<AnalyzeBody>,
) -> Result<Json<AnalysisResult>, (StatusCode, Json<ErrorBody>)> {
    info!(chars = body.user_input.len(), "analyze request");

    let raw = state.upstream.analyze(&body.user_input).await.map_err(|err| {
        error!(error = %err, "upstream call failed");
        internal_error(err.public_message())
    })?;

    let result = normalize(&raw).map_err(|err| {
        error!(error = %err, "response normalisation failed");
        internal_error(err.to_string())
    })?;

    Ok(Json(result))
}

fn internal_error(message: String) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody { error: message }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_uses_wire_names() {
        let body: AnalyzeBody =
            serde_json::from_str(r#"{ "userInput": "Clause A vs Clause B" }"#).unwrap();
        assert_eq!(body.user_input, "Clause A vs Clause B");
    }

    #[test]
    fn error_body_matches_the_contract() {
        let json = serde_json::to_value(ErrorBody {
            error: "Upstream request failed.".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Upstream request failed." }));
    }
}
