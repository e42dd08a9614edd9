use axum::extract::{Path, Query, State};
use axum::Json;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use docuflow_core::error::AppError;
use docuflow_core::models::{DocumentListQuery, DocumentResponse};

/// List tracked documents, newest first
#[utoipa::path(
    get,
    path = "/api/v0/documents",
    tag = "documents",
    params(DocumentListQuery),
    responses(
        (status = 200, description = "List of documents", body = Vec<DocumentResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DocumentListQuery>,
) -> Result<Json<serde_json::Value>, HttpAppError> {
    // Enforce maximum limit to prevent abuse
    let limit = query.limit.unwrap_or(50).clamp(1, 100);
    let offset = query.offset.unwrap_or(0).max(0);

    let query = DocumentListQuery {
        status: query.status,
        limit: Some(limit),
        offset: Some(offset),
    };

    let documents: Vec<DocumentResponse> = state
        .store
        .list(&query)
        .await
        .into_iter()
        .map(DocumentResponse::from)
        .collect();
    let count = documents.len();

    Ok(Json(serde_json::json!({
        "documents": documents,
        "count": count,
    })))
}

/// Get a single document by ID
#[utoipa::path(
    get,
    path = "/api/v0/documents/{id}",
    tag = "documents",
    params(
        ("id" = Uuid, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Document found", body = DocumentResponse),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DocumentResponse>, HttpAppError> {
    match state.store.get(id).await {
        Some(record) => Ok(Json(DocumentResponse::from(record))),
        None => {
            tracing::warn!(document_id = %id, "Document not found");
            Err(AppError::NotFound("Document not found".to_string()).into())
        }
    }
}
