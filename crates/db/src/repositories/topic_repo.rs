//! Repository for the `topics` table.

use sqlx::PgPool;

use crate::models::topic::{CreateTopic, Topic, TopicWithCount};

/// Provides listing and insert operations for topics.
pub struct TopicRepo;

impl TopicRepo {
    /// All topics with their live article counts (zero for childless topics).
    pub async fn list(pool: &PgPool) -> Result<Vec<TopicWithCount>, sqlx::Error> {
        sqlx::query_as::<_, TopicWithCount>(
            "SELECT topics.slug, topics.description, \
                    COUNT(articles.article_id) AS article_count \
             FROM topics \
             LEFT OUTER JOIN articles ON articles.topic = topics.slug \
             GROUP BY topics.slug \
             ORDER BY topics.slug",
        )
        .fetch_all(pool)
        .await
    }

    /// The current slug set, used to validate article-listing filters.
    pub async fn slugs(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT slug FROM topics")
            .fetch_all(pool)
            .await
    }

    /// Insert a topic, returning the created row. A missing description
    /// stays null.
    pub async fn insert(pool: &PgPool, input: &CreateTopic) -> Result<Topic, sqlx::Error> {
        sqlx::query_as::<_, Topic>(
            "INSERT INTO topics (slug, description) \
             VALUES ($1, $2) \
             RETURNING slug, description",
        )
        .bind(&input.slug)
        .bind(&input.description)
        .fetch_one(pool)
        .await
    }
}
