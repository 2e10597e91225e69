//! Handlers for article listing, lookup, creation, votes, and deletion.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use newswire_core::error::CoreError;
use newswire_core::query::{ArticleListParams, ArticleQuery};
use newswire_db::models::article::CreateArticle;
use newswire_db::models::VoteDelta;
use newswire_db::repositories::{ArticleRepo, TopicRepo};

use super::{parse_body, parse_id};
use crate::error::AppResult;
use crate::response::{ArticleResponse, ArticlesResponse};
use crate::state::AppState;

/// GET /api/articles
///
/// List articles with optional topic filter, sort spec, and page window.
/// The topic-slug set is fetched first so the builder can distinguish
/// "no such topic" (404) from a malformed query (400).
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ArticleListParams>,
) -> AppResult<impl IntoResponse> {
    let known_topics = TopicRepo::slugs(&state.pool).await?;
    let query = ArticleQuery::build(&params, &known_topics)?;

    let (articles, total_count) = ArticleRepo::list(&state.pool, &query).await?;

    // Only an explicitly requested page can be "beyond range"; an unpaged
    // listing with zero matches is an ordinary empty array.
    if query.is_paged() && articles.is_empty() {
        return Err(CoreError::NotFound("Page").into());
    }

    Ok(Json(ArticlesResponse {
        articles,
        total_count,
    }))
}

/// GET /api/articles/{article_id}
pub async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&article_id)?;

    let article = ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound("Article"))?;

    Ok(Json(ArticleResponse { article }))
}

/// POST /api/articles
///
/// Create an article. A dangling author or topic surfaces from the
/// storage layer as 404 "Not found".
pub async fn create_article(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let input: CreateArticle = parse_body(payload)?;

    let article = ArticleRepo::insert(&state.pool, &input).await?;

    tracing::info!(
        article_id = article.article_id,
        topic = %article.topic,
        author = %article.author,
        "Article created",
    );

    Ok((StatusCode::CREATED, Json(ArticleResponse { article })))
}

/// PATCH /api/articles/{article_id}
///
/// Apply a vote delta. Deltas accumulate; two `+1` patches add two votes.
pub async fn patch_article_votes(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&article_id)?;
    let delta: VoteDelta = parse_body(payload)?;

    let article = ArticleRepo::increment_votes(&state.pool, id, delta.inc_votes)
        .await?
        .ok_or(CoreError::NotFound("Article"))?;

    tracing::info!(article_id = id, inc_votes = delta.inc_votes, "Article votes updated");

    Ok(Json(ArticleResponse { article }))
}

/// DELETE /api/articles/{article_id}
///
/// Cascading delete: the article's comments go with it, atomically.
pub async fn delete_article(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&article_id)?;

    let deleted = ArticleRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound("Article").into());
    }

    tracing::info!(article_id = id, "Article deleted");

    Ok(StatusCode::NO_CONTENT)
}
