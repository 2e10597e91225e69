//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::User;

/// Column list for user rows.
const COLUMNS: &str = "username, name, avatar_url";

/// Provides read operations for users.
pub struct UserRepo;

impl UserRepo {
    /// All users, ordered by username.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM users ORDER BY username");
        sqlx::query_as::<_, User>(&sql).fetch_all(pool).await
    }

    /// Find a user by username.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(pool)
            .await
    }
}
