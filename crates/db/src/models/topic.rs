//! Topic models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `topics` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Topic {
    pub slug: String,
    pub description: Option<String>,
}

/// Listing row: the topic with its live article count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TopicWithCount {
    pub slug: String,
    pub description: Option<String>,
    pub article_count: i64,
}

/// DTO for `POST /api/topics`. A missing description stays null.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTopic {
    pub slug: String,
    pub description: Option<String>,
}
