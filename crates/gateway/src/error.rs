// crates/gateway/src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Structured JSON error response for API errors
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Errors from a call to the downstream job service.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid job service URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Request to job service failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Job service did not respond in time")]
    Timeout,

    #[error("Job service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode job service response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Classify a reqwest failure that happened before a status was read.
    pub fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error("Downstream error: {0}")]
    Downstream(#[from] ClientError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::JobNotFound(id) => {
                tracing::error!(job_id = %id, "Job not found");
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::with_details("Job not found", format!("Job ID: {}", id)),
                )
            }
            ApiError::Downstream(client_err) => {
                let (status, error_msg) = match client_err {
                    ClientError::Timeout => {
                        tracing::error!("Job service timed out");
                        (StatusCode::GATEWAY_TIMEOUT, "Job service timed out")
                    }
                    ClientError::Status { status, .. } => {
                        tracing::error!(downstream_status = %status, "Job service returned an error");
                        (StatusCode::BAD_GATEWAY, "Job service returned an error")
                    }
                    ClientError::Decode(message) => {
                        tracing::error!(message = %message, "Malformed job service response");
                        (StatusCode::BAD_GATEWAY, "Malformed job service response")
                    }
                    ClientError::Transport(source) => {
                        tracing::error!(error = %source, "Job service unreachable");
                        (StatusCode::BAD_GATEWAY, "Job service unreachable")
                    }
                    ClientError::InvalidBaseUrl(url) => {
                        tracing::error!(url = %url, "Invalid job service URL");
                        (StatusCode::INTERNAL_SERVER_ERROR, "Gateway misconfigured")
                    }
                };
                (
                    status,
                    ErrorResponse::with_details(error_msg, client_err.to_string()),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
