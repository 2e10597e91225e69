//! The API manifest endpoint and the unmatched-path fallback.

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::response::MessageResponse;

/// The endpoint manifest served at `GET /api`, embedded at compile time.
static ENDPOINTS_JSON: &str = include_str!("../../endpoints.json");

/// GET /api
///
/// A fixed document describing every endpoint; served verbatim.
pub async fn get_endpoints() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        ENDPOINTS_JSON,
    )
}

/// Fallback for any unmatched path or method.
pub async fn path_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse {
            message: "Path not found".into(),
        }),
    )
}
