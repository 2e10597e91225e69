//! Route definitions for comments addressed by their own id, mounted at
//! `/comments`. Listing and creation live under the owning article's
//! routes.
//!
//! ```text
//! PATCH  /{comment_id}  -> patch_comment_votes
//! DELETE /{comment_id}  -> delete_comment
//! ```

use axum::routing::patch;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{comment_id}",
        patch(comments::patch_comment_votes).delete(comments::delete_comment),
    )
}
