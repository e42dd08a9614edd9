//! OpenAPI documentation.
//! API version is in `crate::constants::API_VERSION`.
//! Paths in handler annotations use placeholder /api/v0; they are transformed at runtime to the actual version.

use utoipa::OpenApi;

use crate::constants::API_VERSION;
use crate::error;
use crate::handlers;
use docuflow_core::models;

/// Placeholder version used in handler path annotations (utoipa requires compile-time literals).
/// Replaced at runtime in the served OpenAPI spec with API_VERSION.
const OPENAPI_PATH_PLACEHOLDER: &str = "/api/v0";

/// Transforms path keys in the OpenAPI spec from placeholder to actual API version.
fn transform_openapi_paths(spec: &mut utoipa::openapi::OpenApi, version: &str) {
    let replacement = format!("/api/{}", version);
    if OPENAPI_PATH_PLACEHOLDER == replacement {
        return;
    }
    let path_map = std::mem::take(&mut spec.paths.paths);
    for (key, item) in path_map {
        let new_key = key.replacen(OPENAPI_PATH_PLACEHOLDER, &replacement, 1);
        spec.paths.paths.insert(new_key, item);
    }
}

/// Returns the OpenAPI spec with path placeholders replaced by the current API version.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    let mut spec = ApiDoc::openapi();
    transform_openapi_paths(&mut spec, API_VERSION);
    spec
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Docuflow API",
        version = "0.1.0",
        description = "Document workflow API (v0). Uploaded documents are tracked in memory, analyzed asynchronously, and routed to an approval workflow based on the extracted amount. All endpoints are versioned under /api/v0/.",
        contact(
            name = "API Support",
            url = "https://github.com/yourusername/docuflow"
        )
    ),
    paths(
        handlers::document_upload::upload_documents,
        handlers::document_get::get_document,
        handlers::document_get::list_documents,
        handlers::stats::get_document_stats,
    ),
    components(
        schemas(
            models::DocumentResponse,
            models::DocumentStatus,
            models::ExtractedData,
            models::DocumentStats,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "documents", description = "Document upload, tracking, and workflow routing operations")
    )
)]
pub struct ApiDoc;
