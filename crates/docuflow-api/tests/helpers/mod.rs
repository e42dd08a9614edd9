//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p docuflow-api --test documents_test` or
//! `cargo test -p docuflow-api`.

#![allow(dead_code)]

pub mod workflows;

use axum_test::TestServer;
use docuflow_api::constants;
use docuflow_api::setup::routes;
use docuflow_api::state::AppState;
use docuflow_core::config::{BaseConfig, TrackerConfig};
use docuflow_core::Config;
use docuflow_engine::{
    DocumentAnalyzer, DocumentStore, PipelineConfig, ProcessingPipeline, SimulatedAnalyzer,
};
use std::sync::Arc;
use std::time::Duration;

/// Default processing delay for tests. Long enough that batches land in the
/// store before completion fires, short enough to keep the suite fast.
pub const TEST_PROCESSING_DELAY_MS: u64 = 25;

/// Delay for tests that need to observe records while still processing.
pub const SLOW_PROCESSING_DELAY_MS: u64 = 30_000;

/// API path prefix for tests (e.g. `/api/v0`).
pub fn api_path(path: &str) -> String {
    format!("{}{}", constants::API_PREFIX, path)
}

/// Test application: server plus handles on the underlying store and pipeline.
pub struct TestApp {
    pub server: TestServer,
    pub store: DocumentStore,
    pub pipeline: ProcessingPipeline,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn create_test_config(processing_delay_ms: u64) -> Config {
    Config(Box::new(TrackerConfig {
        base: BaseConfig {
            server_port: 0,
            cors_origins: vec!["*".to_string()],
            environment: "test".to_string(),
        },
        max_upload_size_bytes: 10 * 1024 * 1024,
        allowed_extensions: ["pdf", "png", "jpg", "jpeg", "txt"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        allowed_content_types: ["application/pdf", "image/*", "text/*"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        processing_delay_ms,
    }))
}

/// Setup test app with the stock simulated analyzer.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(Arc::new(SimulatedAnalyzer), TEST_PROCESSING_DELAY_MS).await
}

/// Setup test app with a custom analyzer and processing delay.
pub async fn setup_test_app_with(
    analyzer: Arc<dyn DocumentAnalyzer>,
    processing_delay_ms: u64,
) -> TestApp {
    let config = create_test_config(processing_delay_ms);

    let store = DocumentStore::new();
    let pipeline = ProcessingPipeline::new(
        store.clone(),
        analyzer,
        PipelineConfig {
            processing_delay: Duration::from_millis(processing_delay_ms),
        },
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        store: store.clone(),
        pipeline: pipeline.clone(),
    });

    let app = routes::setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        store,
        pipeline,
    }
}
