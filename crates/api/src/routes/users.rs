//! Route definitions for users, mounted at `/users`.
//!
//! ```text
//! GET    /             -> list_users
//! GET    /{username}   -> get_user
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users))
        .route("/{username}", get(users::get_user))
}
