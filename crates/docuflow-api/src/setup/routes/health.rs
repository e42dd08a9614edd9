//! Health check handlers and response types.

use crate::state::AppState;
use axum::{http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

#[derive(serde::Serialize)]
pub(super) struct HealthCheckResponse {
    pub status: String,
    pub documents_tracked: usize,
    pub pending_completions: usize,
}

/// Liveness probe - process is running.
pub async fn liveness_check(_state: Arc<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "alive" })),
    )
}

/// Readiness probe - the in-memory tracker has no external dependencies.
pub async fn readiness_check(_state: Arc<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "status": "ready" })),
    )
}

/// Full health check with tracker gauges.
pub async fn health_check(state: Arc<AppState>) -> impl IntoResponse {
    let response = HealthCheckResponse {
        status: "healthy".to_string(),
        documents_tracked: state.store.len().await,
        pending_completions: state.pipeline.scheduled_len().await,
    };

    (StatusCode::OK, Json(response))
}
