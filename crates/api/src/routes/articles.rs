//! Route definitions for articles, mounted at `/articles`.
//!
//! ```text
//! GET    /                          -> list_articles
//! POST   /                          -> create_article
//! GET    /{article_id}              -> get_article
//! PATCH  /{article_id}              -> patch_article_votes
//! DELETE /{article_id}              -> delete_article
//! GET    /{article_id}/comments     -> list_comments
//! POST   /{article_id}/comments     -> create_comment
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{articles, comments};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(articles::list_articles).post(articles::create_article))
        .route(
            "/{article_id}",
            get(articles::get_article)
                .patch(articles::patch_article_votes)
                .delete(articles::delete_article),
        )
        .route(
            "/{article_id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
}
