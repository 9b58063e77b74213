use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nftfy_core::error::CoreError;
use nftfy_core::submit::SubmitError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`SubmitError`] for the submit
/// collaborator.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `nftfy_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The submit collaborator failed or timed out.
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::InvalidFields(_) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Please fix the highlighted fields".to_string(),
                ),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
            },

            // --- Submit collaborator ---
            AppError::Submit(err) => match err {
                SubmitError::Rejected(reason) => {
                    (StatusCode::BAD_GATEWAY, "SUBMIT_FAILED", reason.clone())
                }
                SubmitError::TimedOut { .. } => (
                    StatusCode::GATEWAY_TIMEOUT,
                    "SUBMIT_TIMEOUT",
                    err.to_string(),
                ),
            },
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let AppError::Core(CoreError::InvalidFields(fields)) = &self {
            body["fields"] = json!(fields);
        }

        (status, axum::Json(body)).into_response()
    }
}
