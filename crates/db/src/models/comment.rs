//! Comment models and DTOs.

use newswire_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub comment_id: DbId,
    pub body: String,
    pub article_id: DbId,
    pub author: String,
    pub votes: i32,
    pub created_at: Timestamp,
}

/// DTO for `POST /api/articles/{article_id}/comments`. The `username` field
/// becomes the comment's `author` and must reference an existing user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub username: String,
    pub body: String,
}
