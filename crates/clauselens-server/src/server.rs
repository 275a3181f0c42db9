//! HTTP listener for the analysis gateway.

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use clauselens_upstream::UpstreamClient;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes;

/// State shared across handlers. The upstream client is the only shared
/// piece; nothing request-scoped lives here, so requests never see each
/// other's data.
pub struct AppState {
    pub upstream: UpstreamClient,
}

/// Run the HTTP server until shutdown.
pub async fn run(listen: &str, upstream: UpstreamClient) -> Result<()> {
    let state = Arc::new(AppState { upstream });

    let app = Router::new()
        .merge(routes::analyze_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(listen).await?;
    info!("listening on http://{listen}");
    axum::serve(listener, app).await?;
    Ok(())
}
