//! Domain route groups (documents).

use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub fn document_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{}/documents", API_PREFIX),
            post(handlers::document_upload::upload_documents),
        )
        .route(
            &format!("{}/documents", API_PREFIX),
            get(handlers::document_get::list_documents),
        )
        .route(
            &format!("{}/documents/stats", API_PREFIX),
            get(handlers::stats::get_document_stats),
        )
        .route(
            &format!("{}/documents/{{id}}", API_PREFIX),
            get(handlers::document_get::get_document),
        )
        .with_state(state)
}
