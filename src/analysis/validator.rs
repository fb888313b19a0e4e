//! Request validation for the analysis endpoint.

use serde_json::Value;

use crate::error::AnalysisError;

/// Whether a `Content-Type` value names JSON: `application/json` or any
/// `application/*+json`, parameters ignored.
pub fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    match mime.strip_prefix("application/") {
        Some(subtype) => subtype == "json" || subtype.ends_with("+json"),
        None => false,
    }
}

/// Validate a raw analysis request and return its trimmed text.
pub fn validate(content_type: Option<&str>, body: &[u8]) -> Result<String, AnalysisError> {
    if !content_type.is_some_and(is_json_content_type) {
        return Err(AnalysisError::InvalidContentType);
    }

    let payload: Value =
        serde_json::from_slice(body).map_err(|_| AnalysisError::InvalidContentType)?;

    let text = payload
        .as_object()
        .and_then(|object| object.get("text"))
        .ok_or(AnalysisError::MissingField)?;

    let text = text.as_str().ok_or(AnalysisError::InvalidFieldType)?.trim();
    if text.is_empty() {
        return Err(AnalysisError::EmptyText);
    }

    Ok(text.to_string())
}
