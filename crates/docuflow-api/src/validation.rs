//! Validation utilities for API handlers

use std::path::Path;

/// Validate that Content-Type matches the file extension
/// This prevents Content-Type spoofing attacks where files of one accepted
/// family are uploaded under another family's name.
pub fn validate_extension_content_type_match(
    filename: &str,
    content_type: &str,
) -> Result<(), String> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if extension.is_empty() {
        return Err("File must have an extension".to_string());
    }

    let normalized_content_type = content_type.to_lowercase();

    // Map accepted extensions to expected Content-Type patterns
    let expected_content_types: Vec<&str> = match extension.as_str() {
        "pdf" => vec!["application/pdf"],
        "png" | "jpg" | "jpeg" => vec!["image/*"],
        "txt" => vec!["text/*"],
        _ => {
            // Unknown extensions are caught by the extension allowlist; skip
            // cross-validation here.
            tracing::debug!(
                extension = %extension,
                content_type = %content_type,
                "Unknown extension, skipping Content-Type/extension cross-validation"
            );
            return Ok(());
        }
    };

    if !expected_content_types
        .iter()
        .any(|pattern| content_type_matches(pattern, &normalized_content_type))
    {
        return Err(format!(
            "Content-Type '{}' does not match extension '{}'. Expected one of: {}",
            content_type,
            extension,
            expected_content_types.join(", ")
        ));
    }

    Ok(())
}

/// Match a lowercased MIME type against a pattern whose subtype may be `*`
/// (e.g. "image/*" matches "image/png"). Exact patterns also match when the
/// type carries parameters ("text/plain; charset=utf-8").
pub(crate) fn content_type_matches(pattern: &str, content_type: &str) -> bool {
    match pattern.strip_suffix("/*") {
        Some(family) => content_type
            .split('/')
            .next()
            .map_or(false, |ty| ty.trim() == family),
        None => {
            content_type == pattern || content_type.starts_with(&format!("{};", pattern))
        }
    }
}
