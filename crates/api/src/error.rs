use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use scoop_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and `sqlx::Error` for store
/// failures. Implements [`IntoResponse`] with the fixed plain-text bodies
/// of the public contract: any store failure collapses to a generic 500 so
/// no internal detail leaks to the caller.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `scoop_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(entity, id, "Entity not found");
                (StatusCode::NOT_FOUND, "Flavor not found")
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error")
            }
        };

        (status, body).into_response()
    }
}
