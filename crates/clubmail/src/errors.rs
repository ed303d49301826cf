//! Error types for the verification email service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors from the email provider layer
#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Resend rejected the request with status {status}")]
    Upstream {
        status: u16,
        /// Error payload exactly as the provider returned it
        details: serde_json::Value,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider error: {0}")]
    Provider(String),
}

/// Errors returned to HTTP callers.
///
/// Every failure of the dispatch flow maps to exactly one of these, so
/// nothing can escape as an unhandled fault. The JSON bodies mirror what
/// callers of the original edge function already expect.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("email and verification token required")]
    InvalidInput,

    #[error("email service not configured")]
    NotConfigured,

    #[error("email provider rejected the send")]
    Upstream(serde_json::Value),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<EmailError> for ApiError {
    fn from(err: EmailError) -> Self {
        match err {
            EmailError::Upstream { details, .. } => ApiError::Upstream(details),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidInput => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Email and verification token required" }),
            ),
            ApiError::NotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Email service not configured" }),
            ),
            ApiError::Upstream(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to send email", "details": details }),
            ),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error", "details": message }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
