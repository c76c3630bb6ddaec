use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use telas_core::error::CoreError;
use telas_core::lifecycle::LifecycleError;
use telas_data::client::DataServiceError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, [`DataServiceError`] for the
/// external boundary, and [`LifecycleError`] for client-side guard refusals.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `telas_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure at the data-service boundary.
    #[error(transparent)]
    DataService(#[from] DataServiceError),

    /// A lifecycle transition refused before any network call.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Data service boundary ---
            // Messages pass through verbatim: the raw failure is what the
            // user sees, and no retry happens anywhere.
            AppError::DataService(DataServiceError::Request(err)) => (
                StatusCode::BAD_GATEWAY,
                "DATA_SERVICE_UNREACHABLE",
                err.to_string(),
            ),
            AppError::DataService(DataServiceError::Api { message, .. }) => (
                StatusCode::BAD_GATEWAY,
                "DATA_SERVICE_ERROR",
                message.clone(),
            ),

            // --- Guard refusals (no network call was made) ---
            AppError::Lifecycle(guard) => {
                (StatusCode::CONFLICT, "LIFECYCLE_GUARD", guard.to_string())
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
