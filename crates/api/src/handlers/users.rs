//! Handlers for user listing and lookup.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use newswire_core::error::CoreError;
use newswire_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::response::{UserResponse, UsersResponse};
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;

    Ok(Json(UsersResponse { users }))
}

/// GET /api/users/{username}
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or(CoreError::NotFound("User"))?;

    Ok(Json(UserResponse { user }))
}
