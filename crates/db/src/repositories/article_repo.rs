//! Repository for the `articles` table.

use newswire_core::query::{ArticleQuery, DEFAULT_ARTICLE_IMG_URL};
use newswire_core::types::DbId;
use sqlx::PgPool;

use crate::models::article::{Article, ArticleDetail, ArticleSummary, CreateArticle};

/// Column list for full article rows.
const COLUMNS: &str = "article_id, title, body, topic, author, created_at, votes, article_img_url";

/// Provides listing and CRUD operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// List articles per the validated query spec, together with the count
    /// of all rows matching the same filter (independent of LIMIT/OFFSET).
    ///
    /// The ORDER BY identifiers come exclusively from the whitelist enums'
    /// `as_sql()`; the topic filter and the page window are bound.
    pub async fn list(
        pool: &PgPool,
        query: &ArticleQuery,
    ) -> Result<(Vec<ArticleSummary>, i64), sqlx::Error> {
        let sql = format!(
            "SELECT articles.article_id, articles.title, articles.topic, \
                    articles.author, articles.created_at, articles.votes, \
                    articles.article_img_url, \
                    COUNT(comments.comment_id) AS comment_count \
             FROM articles \
             LEFT OUTER JOIN comments ON comments.article_id = articles.article_id \
             WHERE ($1::TEXT IS NULL OR articles.topic = $1) \
             GROUP BY articles.article_id \
             ORDER BY {} {} \
             LIMIT $2 OFFSET $3",
            query.sort_by.as_sql(),
            query.order.as_sql(),
        );

        let rows = sqlx::query_as::<_, ArticleSummary>(&sql)
            .bind(query.topic.as_deref())
            .bind(query.limit)
            .bind(query.offset())
            .fetch_all(pool)
            .await?;

        let total_count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM articles WHERE ($1::TEXT IS NULL OR topic = $1)",
        )
        .bind(query.topic.as_deref())
        .fetch_one(pool)
        .await?;

        Ok((rows, total_count))
    }

    /// Fetch one article with its live comment count.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ArticleDetail>, sqlx::Error> {
        sqlx::query_as::<_, ArticleDetail>(
            "SELECT articles.article_id, articles.title, articles.body, articles.topic, \
                    articles.author, articles.created_at, articles.votes, \
                    articles.article_img_url, \
                    COUNT(comments.comment_id) AS comment_count \
             FROM articles \
             LEFT OUTER JOIN comments ON comments.article_id = articles.article_id \
             WHERE articles.article_id = $1 \
             GROUP BY articles.article_id",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Existence probe, used before evaluating a comment-listing page.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM articles WHERE article_id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Insert a new article, returning the materialized row. A missing
    /// image URL gets the placeholder; a fresh row has zero comments.
    pub async fn insert(pool: &PgPool, input: &CreateArticle) -> Result<ArticleDetail, sqlx::Error> {
        sqlx::query_as::<_, ArticleDetail>(
            "INSERT INTO articles (author, title, body, topic, article_img_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING article_id, title, body, topic, author, created_at, votes, \
                       article_img_url, 0::BIGINT AS comment_count",
        )
        .bind(&input.author)
        .bind(&input.title)
        .bind(&input.body)
        .bind(&input.topic)
        .bind(
            input
                .article_img_url
                .as_deref()
                .unwrap_or(DEFAULT_ARTICLE_IMG_URL),
        )
        .fetch_one(pool)
        .await
    }

    /// Apply a signed vote delta, returning the updated row.
    pub async fn increment_votes(
        pool: &PgPool,
        id: DbId,
        delta: i32,
    ) -> Result<Option<Article>, sqlx::Error> {
        let sql = format!(
            "UPDATE articles SET votes = votes + $2 WHERE article_id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&sql)
            .bind(id)
            .bind(delta)
            .fetch_optional(pool)
            .await
    }

    /// Delete an article and its comments in one transaction. Returns
    /// `false` -- with nothing deleted -- when the article does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let comments = sqlx::query("DELETE FROM comments WHERE article_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM articles WHERE article_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;

        tracing::debug!(
            article_id = id,
            comments_removed = comments.rows_affected(),
            "Article deleted with its comments",
        );

        Ok(true)
    }
}
