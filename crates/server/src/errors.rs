use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const MSG_INTERNAL: &str = "Internal server error";
pub const MSG_BAD_BODY: &str = "Invalid request body";

/// Error rendered as `{"error": "<message>"}` with the matching status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn bad_request(message: impl Into<String>) -> Self { Self::new(StatusCode::BAD_REQUEST, message) }

    pub fn internal() -> Self { Self::new(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL) }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::bad_request(msg),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            // details stay in the log, never in the response
            ServiceError::Storage(detail) => {
                error!(error = %detail, "customer store failure");
                Self::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({"error": self.message}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_three_statuses() {
        let e: ApiError = ServiceError::Validation("Invalid email format".into()).into();
        assert_eq!(e, ApiError::bad_request("Invalid email format"));

        let e: ApiError = ServiceError::not_found("Customer").into();
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.message, "Customer not found");

        let e: ApiError = ServiceError::storage("connection refused (10.0.0.5:5432)").into();
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, MSG_INTERNAL);
    }
}
