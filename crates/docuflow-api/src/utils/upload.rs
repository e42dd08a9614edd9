//! Common utilities for file upload handlers

use axum::extract::Multipart;
use docuflow_core::AppError;

use crate::validation;

/// One file part pulled from a multipart request. Content is drained to
/// satisfy the transport and dropped; only its length is kept.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: String,
    pub size_bytes: usize,
}

/// Extract every field named "file" from a multipart form.
/// Fields under any other name are ignored.
pub async fn collect_multipart_files(
    mut multipart: Multipart,
) -> Result<Vec<UploadedFile>, AppError> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name != "file" {
            continue;
        }

        let filename = field
            .file_name()
            .map(|s: &str| s.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let content_type = field
            .content_type()
            .map(|s: &str| s.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

        files.push(UploadedFile {
            filename,
            content_type,
            size_bytes: data.len(),
        });
    }

    if files.is_empty() {
        return Err(AppError::InvalidInput("No file provided".to_string()));
    }

    Ok(files)
}

/// Normalize MIME type by stripping parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Validate content type against allowlist. Entries may use a subtype
/// wildcard ("image/*"); comparison is on the normalized MIME type only.
pub fn validate_content_type(content_type: &str, allowed_types: &[String]) -> Result<(), AppError> {
    let normalized = normalize_mime_type(content_type).to_lowercase();
    if !allowed_types
        .iter()
        .any(|ct| validation::content_type_matches(&ct.to_lowercase(), &normalized))
    {
        return Err(AppError::InvalidInput(format!(
            "Invalid content type. Allowed types: {}",
            allowed_types.join(", ")
        )));
    }
    Ok(())
}

/// Validate file extension
pub fn validate_file_extension(
    filename: &str,
    allowed_extensions: &[String],
) -> Result<String, AppError> {
    let extension = filename.rsplit('.').next().unwrap_or("").to_lowercase();

    if !allowed_extensions.contains(&extension) {
        return Err(AppError::InvalidInput(format!(
            "Invalid file extension. Allowed extensions: {}",
            allowed_extensions.join(", ")
        )));
    }

    Ok(extension)
}

/// Validate Content-Type matches extension (wrapper for validation module)
pub fn validate_extension_content_type_match(
    filename: &str,
    content_type: &str,
) -> Result<(), AppError> {
    crate::validation::validate_extension_content_type_match(filename, content_type)
        .map_err(AppError::InvalidInput)
}
