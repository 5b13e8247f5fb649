use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Validation failures carry their message verbatim
    #[error("{0}")]
    BadRequest(String),

    #[error("Error processing file. {0}")]
    ExternalService(String),
}

/// Error response structure - a single descriptive field
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Every failure is reported in the body; the status line stays 200.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::OK
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = match &self {
            Self::BadRequest(_) => "bad_request",
            Self::ExternalService(_) => "external_service",
        };
        tracing::error!(error = %self, kind, "Request failed");

        (self.status_code(), Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
