use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use newswire_core::error::CoreError;

use crate::response::MessageResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and classifies raw storage errors.
/// Implements [`IntoResponse`] to produce consistent `{ "message": ... }`
/// error bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A classified domain error from `newswire_core`.
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
        let (status, message) = match &self {
            AppError::Core(core) => (status_for(core), core.to_string()),
            AppError::Database(err) => classify_sqlx_error(err),
        };

        (status, Json(MessageResponse { message })).into_response()
    }
}

fn status_for(err: &CoreError) -> StatusCode {
    match err {
        CoreError::NotFound(_) | CoreError::NoResults | CoreError::MissingReference => {
            StatusCode::NOT_FOUND
        }
        CoreError::BadRequest => StatusCode::BAD_REQUEST,
    }
}

/// Classify a sqlx error into an HTTP status and client-safe message.
///
/// - `23503` (foreign-key violation): an insert referenced a missing
///   author or topic -> 404 "Not found".
/// - `23502` (not-null) / `22P02` (invalid text representation): the
///   request body was missing or mistyped a field -> 400 "Bad request".
/// - Everything else is unclassified -> 500 "Server error"; detail goes to
///   the log, never to the client.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23503") => (
                StatusCode::NOT_FOUND,
                CoreError::MissingReference.to_string(),
            ),
            Some("23502") | Some("22P02") => {
                (StatusCode::BAD_REQUEST, CoreError::BadRequest.to_string())
            }
            _ => {
                tracing::error!(error = %db_err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error".to_string(),
                )
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error".to_string(),
            )
        }
    }
}
