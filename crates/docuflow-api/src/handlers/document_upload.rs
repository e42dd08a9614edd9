use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::{
    collect_multipart_files, validate_content_type, validate_extension_content_type_match,
    validate_file_extension,
};
use docuflow_core::error::AppError;
use docuflow_core::models::DocumentResponse;
use docuflow_engine::IntakeFile;

/// Upload one or more documents for analysis
#[utoipa::path(
    post,
    path = "/api/v0/documents",
    tag = "documents",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Documents accepted for processing", body = Vec<DocumentResponse>),
        (status = 400, description = "No acceptable file in the request", body = ErrorResponse),
        (status = 413, description = "Request body too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_documents(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<serde_json::Value>), HttpAppError> {
    let files = collect_multipart_files(multipart).await?;

    let allowed_extensions = state.config.allowed_extensions();
    let allowed_content_types = state.config.allowed_content_types();

    // Rejected parts are skipped rather than failing the whole batch. The
    // request only errors when nothing in it survives validation.
    let mut accepted = Vec::new();
    for file in files {
        if let Err(e) = validate_content_type(&file.content_type, allowed_content_types) {
            tracing::debug!(
                filename = %file.filename,
                content_type = %file.content_type,
                error = %e,
                "Skipping file with rejected content type"
            );
            continue;
        }
        if let Err(e) = validate_file_extension(&file.filename, allowed_extensions) {
            tracing::debug!(
                filename = %file.filename,
                error = %e,
                "Skipping file with rejected extension"
            );
            continue;
        }
        if let Err(e) = validate_extension_content_type_match(&file.filename, &file.content_type) {
            tracing::debug!(
                filename = %file.filename,
                content_type = %file.content_type,
                error = %e,
                "Skipping file whose content type contradicts its extension"
            );
            continue;
        }
        accepted.push(IntakeFile {
            filename: file.filename,
            content_type: file.content_type,
        });
    }

    if accepted.is_empty() {
        return Err(AppError::InvalidInput(
            "No acceptable files in upload".to_string(),
        )
        .into());
    }

    let records = state.pipeline.ingest(accepted).await;
    let documents: Vec<DocumentResponse> = records.into_iter().map(DocumentResponse::from).collect();
    let count = documents.len();

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "documents": documents,
            "count": count,
        })),
    ))
}
