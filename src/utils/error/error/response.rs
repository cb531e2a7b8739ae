//! HTTP response handling for errors

use super::types::GatewayError;
use crate::core::progress::ProgressError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl GatewayError {
    /// Map an error onto its HTTP status, machine code, and client-facing message
    fn http_parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            GatewayError::InvalidArgument(_) => {
                (StatusCode::BAD_REQUEST, "INVALID_ARGUMENT", self.to_string())
            }
            GatewayError::Validation(_) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", self.to_string())
            }
            GatewayError::Fetch(fetch_error) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_FETCH_FAILED",
                fetch_error.to_string(),
            ),
            GatewayError::Progress(progress_error) => match progress_error {
                ProgressError::NotStarted => (
                    StatusCode::NOT_FOUND,
                    "JOB_NOT_STARTED",
                    progress_error.to_string(),
                ),
                ProgressError::Underflow { .. } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PROGRESS_UNDERFLOW",
                    progress_error.to_string(),
                ),
            },
            GatewayError::FileStorage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "FILE_STORAGE_ERROR",
                self.to_string(),
            ),
            GatewayError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
            GatewayError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT", self.to_string()),
            GatewayError::Config(_) | GatewayError::Yaml(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            GatewayError::HttpClient(_) => (
                StatusCode::BAD_GATEWAY,
                "HTTP_CLIENT_ERROR",
                "Upstream request failed".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        self.http_parts().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = self.http_parts();

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
                request_id: None,
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}
