use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// A model artifact could not be turned into usable parameters.
/// Fatal at startup: without valid parameters no prediction can be served.
#[derive(Debug, Error)]
pub enum ArtifactLoadError {
    #[error("Artifact {source_name} could not be read: {reason}")]
    Unreadable { source_name: String, reason: String },

    #[error("Artifact {source_name} is malformed: {reason}")]
    Malformed { source_name: String, reason: String },

    #[error("Artifact {source_name} has the wrong shape: {reason}")]
    Shape { source_name: String, reason: String },
}

impl ArtifactLoadError {
    pub fn shape(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Shape {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}

/// A single prediction request was rejected. Affects only that request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("{field} = {value} is outside its domain {domain}")]
    OutOfDomain {
        field: &'static str,
        value: i64,
        domain: &'static str,
    },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} = {value} is outside the accepted range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Risk score is undefined for this record")]
    UndefinedScore,
}

// ── HTTP mapping ─────────────────────────────────────────────────────────────

/// Error returned by Axum handlers. Every variant renders as `{"error": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Well-formed record the model cannot score (422)
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    /// Body that never became a record: bad JSON, wrong types, missing fields
    #[error(transparent)]
    Body(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Body(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::InvalidInput(e) => e.to_string(),
            ApiError::Body(rejection) => rejection.body_text(),
        };
        tracing::warn!("Rejected prediction request: {message}");
        (status, Json(json!({ "error": message }))).into_response()
    }
}
