use crate::config::ConfigError;
use crate::eligibility::EligibilityError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Failures surfaced by the CLI and the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed eligibility request: {0}")]
    Request(#[from] serde_json::Error),
    #[error("eligibility error: {0}")]
    Eligibility(#[from] EligibilityError),
}

impl AppError {
    /// Caller mistakes are 400s; everything else is on our side.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Eligibility(_) | AppError::Request(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
