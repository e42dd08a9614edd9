use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use docuflow_core::models::DocumentStats;

/// Aggregate counts over all tracked documents
#[utoipa::path(
    get,
    path = "/api/v0/documents/stats",
    tag = "documents",
    responses(
        (status = 200, description = "Document statistics", body = DocumentStats),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_document_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DocumentStats>, HttpAppError> {
    let stats = state.store.stats().await;
    Ok(Json(stats))
}
