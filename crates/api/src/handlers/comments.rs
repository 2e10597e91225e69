//! Handlers for comments nested under an article, plus comment votes and
//! deletion.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use newswire_core::error::CoreError;
use newswire_core::query::{CommentListParams, CommentQuery};
use newswire_db::models::comment::CreateComment;
use newswire_db::models::VoteDelta;
use newswire_db::repositories::{ArticleRepo, CommentRepo};

use super::{parse_body, parse_id};
use crate::error::AppResult;
use crate::response::{CommentResponse, CommentsResponse};
use crate::state::AppState;

/// GET /api/articles/{article_id}/comments
///
/// Newest-first page of one article's comments. Article existence is
/// confirmed before pagination is evaluated, so a missing article is 404
/// "Article not found" rather than "Page not found".
pub async fn list_comments(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    Query(params): Query<CommentListParams>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&article_id)?;

    if !ArticleRepo::exists(&state.pool, id).await? {
        return Err(CoreError::NotFound("Article").into());
    }

    let query = CommentQuery::build(&params)?;
    let (comments, total_count) = CommentRepo::list_by_article(&state.pool, id, &query).await?;

    if query.is_paged() && comments.is_empty() {
        return Err(CoreError::NotFound("Page").into());
    }

    Ok(Json(CommentsResponse {
        comments,
        total_count,
    }))
}

/// POST /api/articles/{article_id}/comments
///
/// Create a comment. A nonexistent username or article surfaces from the
/// storage layer as 404 "Not found".
pub async fn create_comment(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&article_id)?;
    let input: CreateComment = parse_body(payload)?;

    let comment = CommentRepo::insert(&state.pool, id, &input).await?;

    tracing::info!(
        comment_id = comment.comment_id,
        article_id = id,
        author = %comment.author,
        "Comment created",
    );

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

/// PATCH /api/comments/{comment_id}
pub async fn patch_comment_votes(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&comment_id)?;
    let delta: VoteDelta = parse_body(payload)?;

    let comment = CommentRepo::increment_votes(&state.pool, id, delta.inc_votes)
        .await?
        .ok_or(CoreError::NotFound("Comment"))?;

    tracing::info!(comment_id = id, inc_votes = delta.inc_votes, "Comment votes updated");

    Ok(Json(CommentResponse { comment }))
}

/// DELETE /api/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&comment_id)?;

    let deleted = CommentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound("Comment").into());
    }

    tracing::info!(comment_id = id, "Comment deleted");

    Ok(StatusCode::NO_CONTENT)
}
