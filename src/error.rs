//! Error taxonomy of the analysis endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

use crate::types::ErrorResponse;

/// Errors surfaced to clients of the analysis endpoint.
///
/// Every variant except [`AnalysisError::ScoringFailure`] is a client error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Request must be JSON")]
    InvalidContentType,

    #[error("Missing required field: text")]
    MissingField,

    #[error("Field text must be a string")]
    InvalidFieldType,

    #[error("Text field cannot be empty")]
    EmptyText,

    #[error("No valid sentences found in text")]
    NoSentencesFound,

    #[error("An error occurred while processing the text: {0}")]
    ScoringFailure(String),
}

impl AnalysisError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::ScoringFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            debug!(error = %self, "Rejected analysis request");
        } else {
            error!(error = %self, "Analysis failed");
        }

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
