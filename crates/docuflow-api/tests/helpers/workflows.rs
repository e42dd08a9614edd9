//! Workflow helpers for integration tests (upload → poll → verify).

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use std::time::Duration;
use tokio::time::sleep;
use uuid::Uuid;

use docuflow_core::models::ExtractedData;
use docuflow_engine::DocumentAnalyzer;

use super::api_path;

/// Analyzer that always fails, for exercising the error path end to end.
#[derive(Debug)]
pub struct FailingAnalyzer;

#[async_trait]
impl DocumentAnalyzer for FailingAnalyzer {
    async fn analyze(&self, _filename: &str, _content_type: &str) -> anyhow::Result<ExtractedData> {
        Err(anyhow::anyhow!("analysis backend unavailable"))
    }
}

/// Build a multipart form with a single `file` part.
pub fn single_file_form(filename: &str, content_type: &str) -> MultipartForm {
    let part = Part::bytes(b"test file body".to_vec())
        .file_name(filename)
        .mime_type(content_type);
    MultipartForm::new().add_part("file", part)
}

/// Build a multipart form with one `file` part per (filename, content type) pair.
pub fn multi_file_form(files: &[(&str, &str)]) -> MultipartForm {
    let mut form = MultipartForm::new();
    for &(filename, content_type) in files {
        let part = Part::bytes(b"test file body".to_vec())
            .file_name(filename)
            .mime_type(content_type);
        form = form.add_part("file", part);
    }
    form
}

/// Upload a single file and return the created document's ID and the response body.
pub async fn upload_document(
    client: &TestServer,
    filename: &str,
    content_type: &str,
) -> (Uuid, serde_json::Value) {
    let response = client
        .post(&api_path("/documents"))
        .multipart(single_file_form(filename, content_type))
        .await;
    assert_eq!(response.status_code(), 201);

    let body: serde_json::Value = response.json();
    let id = Uuid::parse_str(
        body["documents"][0]["id"]
            .as_str()
            .expect("Expected 'id' in upload response"),
    )
    .expect("Invalid UUID in upload response");
    (id, body)
}

/// Fetch a document by ID and return its response body.
pub async fn get_document(client: &TestServer, id: Uuid) -> serde_json::Value {
    let response = client.get(&api_path(&format!("/documents/{}", id))).await;
    assert_eq!(response.status_code(), 200);
    response.json()
}

/// Wait until the document reaches the given wire status.
pub async fn wait_for_status(
    client: &TestServer,
    id: Uuid,
    status: &str,
    timeout_seconds: u64,
) -> bool {
    wait_for_condition(
        || async {
            let response = client.get(&api_path(&format!("/documents/{}", id))).await;
            response.status_code() == 200 && response.json::<serde_json::Value>()["status"] == status
        },
        timeout_seconds,
    )
    .await
}

/// Wait for a condition with timeout.
pub async fn wait_for_condition<F, Fut>(condition: F, timeout_seconds: u64) -> bool
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = bool>,
{
    let start = std::time::Instant::now();
    let timeout = Duration::from_secs(timeout_seconds);
    while start.elapsed() < timeout {
        if condition().await {
            return true;
        }
        sleep(Duration::from_millis(10)).await;
    }
    false
}
