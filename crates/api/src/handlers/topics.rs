//! Handlers for topic listing and creation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use newswire_db::models::topic::CreateTopic;
use newswire_db::repositories::TopicRepo;

use super::parse_body;
use crate::error::AppResult;
use crate::response::{TopicResponse, TopicsResponse};
use crate::state::AppState;

/// GET /api/topics
///
/// List all topics with their live article counts.
pub async fn list_topics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let topics = TopicRepo::list(&state.pool).await?;

    Ok(Json(TopicsResponse { topics }))
}

/// POST /api/topics
///
/// Create a topic; a missing description stays null.
pub async fn create_topic(
    State(state): State<AppState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<impl IntoResponse> {
    let input: CreateTopic = parse_body(payload)?;

    let topic = TopicRepo::insert(&state.pool, &input).await?;

    tracing::info!(slug = %topic.slug, "Topic created");

    Ok((StatusCode::CREATED, Json(TopicResponse { topic })))
}
