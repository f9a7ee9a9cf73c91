//! HTTP error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use loantrail_domain::LoanTrailError;
use serde_json::json;

/// Handler-level error wrapping the domain error.
///
/// Implements [`IntoResponse`] so every handler returns the same JSON
/// error shape.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A domain-level error from `loantrail-core`
    #[error(transparent)]
    Domain(#[from] LoanTrailError),

    /// A bad request with a human-readable message
    #[error("bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Domain(domain) => match domain {
                LoanTrailError::Validation(msg) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", msg.clone())
                }
                LoanTrailError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
                LoanTrailError::Store(msg) => {
                    tracing::error!(error = %msg, "record store failure");
                    (
                        StatusCode::BAD_GATEWAY,
                        "STORE_ERROR",
                        "The record store could not complete the request".to_string(),
                    )
                }
                LoanTrailError::Config(msg) | LoanTrailError::Internal(msg) => {
                    tracing::error!(error = %msg, "internal error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
