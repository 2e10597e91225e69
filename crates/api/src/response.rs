//! Response body types for API handlers.
//!
//! Every payload is wrapped in a resource-named key (`{ "articles": ... }`,
//! `{ "article": ... }`), and the two listing endpoints carry a
//! `total_count` computed independently of the page window. Errors use
//! [`MessageResponse`]. Typed envelopes instead of ad-hoc
//! `serde_json::json!` keep the body shapes compile-checked.

use serde::Serialize;

/// Error body: `{ "message": ... }`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `GET /api/articles` body: page of rows plus the full filtered count.
#[derive(Debug, Serialize)]
pub struct ArticlesResponse<T: Serialize> {
    pub articles: Vec<T>,
    pub total_count: i64,
}

/// Single-article body.
#[derive(Debug, Serialize)]
pub struct ArticleResponse<T: Serialize> {
    pub article: T,
}

/// `GET /api/articles/{article_id}/comments` body.
#[derive(Debug, Serialize)]
pub struct CommentsResponse<T: Serialize> {
    pub comments: Vec<T>,
    pub total_count: i64,
}

/// Single-comment body.
#[derive(Debug, Serialize)]
pub struct CommentResponse<T: Serialize> {
    pub comment: T,
}

/// `GET /api/topics` body.
#[derive(Debug, Serialize)]
pub struct TopicsResponse<T: Serialize> {
    pub topics: Vec<T>,
}

/// Single-topic body.
#[derive(Debug, Serialize)]
pub struct TopicResponse<T: Serialize> {
    pub topic: T,
}

/// `GET /api/users` body.
#[derive(Debug, Serialize)]
pub struct UsersResponse<T: Serialize> {
    pub users: Vec<T>,
}

/// Single-user body.
#[derive(Debug, Serialize)]
pub struct UserResponse<T: Serialize> {
    pub user: T,
}
