//! Repository for the `comments` table.

use newswire_core::query::CommentQuery;
use newswire_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

/// Column list for comment rows.
const COLUMNS: &str = "comment_id, body, article_id, author, votes, created_at";

/// Provides listing and CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Newest-first comments for one article, together with the article's
    /// full comment count (independent of LIMIT/OFFSET).
    pub async fn list_by_article(
        pool: &PgPool,
        article_id: DbId,
        query: &CommentQuery,
    ) -> Result<(Vec<Comment>, i64), sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM comments \
             WHERE article_id = $1 \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );

        let rows = sqlx::query_as::<_, Comment>(&sql)
            .bind(article_id)
            .bind(query.limit)
            .bind(query.offset())
            .fetch_all(pool)
            .await?;

        let total_count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE article_id = $1")
                .bind(article_id)
                .fetch_one(pool)
                .await?;

        Ok((rows, total_count))
    }

    /// Insert a comment on an article, returning the materialized row.
    pub async fn insert(
        pool: &PgPool,
        article_id: DbId,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let sql = format!(
            "INSERT INTO comments (author, body, article_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&sql)
            .bind(&input.username)
            .bind(&input.body)
            .bind(article_id)
            .fetch_one(pool)
            .await
    }

    /// Apply a signed vote delta, returning the updated row.
    pub async fn increment_votes(
        pool: &PgPool,
        id: DbId,
        delta: i32,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let sql = format!(
            "UPDATE comments SET votes = votes + $2 WHERE comment_id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&sql)
            .bind(id)
            .bind(delta)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
