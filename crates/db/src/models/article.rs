//! Article models and DTOs.

use newswire_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub article_id: DbId,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub author: String,
    pub created_at: Timestamp,
    pub votes: i32,
    pub article_img_url: String,
}

/// Listing row: the body is omitted and the live comment count joined in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleSummary {
    pub article_id: DbId,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: Timestamp,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

/// Single-article view: the full row plus the live comment count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleDetail {
    pub article_id: DbId,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub author: String,
    pub created_at: Timestamp,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for `POST /api/articles`. A missing `article_img_url` receives the
/// placeholder image.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticle {
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub article_img_url: Option<String>,
}
