//! HTTP request handlers for the sentiment service.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::analysis::{validate, SentimentPipeline};
use crate::error::AnalysisError;
use crate::types::{AnalysisResponse, ServiceConfig};

/// Application state shared across handlers.
pub struct AppState {
    pub pipeline: SentimentPipeline,
    pub config: ServiceConfig,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_pipeline(SentimentPipeline::from_config(&config), config)
    }

    /// Build state around an already assembled pipeline.
    pub fn with_pipeline(pipeline: SentimentPipeline, config: ServiceConfig) -> Self {
        Self { pipeline, config }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Analyze the sentiment of the `text` field of a JSON body.
///
/// The body is taken raw so that content-type and decoding failures map to
/// the service's own error messages instead of axum's rejections.
pub async fn analyze_sentiment(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<AnalysisResponse>, AnalysisError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let text = validate(content_type, &body)?;
    let response = state.pipeline.analyze(&text)?;

    info!(
        chars = text.chars().count(),
        sentences = response.sentence_analysis.len(),
        category = %response.overall_analysis.category,
        "Analyzed sentiment"
    );

    Ok(Json(response))
}
