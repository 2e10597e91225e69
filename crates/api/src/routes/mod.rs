pub mod articles;
pub mod comments;
pub mod health;
pub mod topics;
pub mod users;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// GET    /                                endpoint manifest
///
/// GET    /topics                          list topics (with article_count)
/// POST   /topics                          create topic
///
/// GET    /articles                        list (topic, sort_by, order, limit, p)
/// POST   /articles                        create article
/// GET    /articles/{article_id}           single article (with comment_count)
/// PATCH  /articles/{article_id}           apply vote delta
/// DELETE /articles/{article_id}           cascading delete
/// GET    /articles/{article_id}/comments  list comments (limit, p)
/// POST   /articles/{article_id}/comments  create comment
///
/// PATCH  /comments/{comment_id}           apply vote delta
/// DELETE /comments/{comment_id}           delete comment
///
/// GET    /users                           list users
/// GET    /users/{username}                single user
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::general::get_endpoints))
        .nest("/topics", topics::router())
        .nest("/articles", articles::router())
        .nest("/comments", comments::router())
        .nest("/users", users::router())
}
