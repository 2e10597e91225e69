//! User models.

use serde::Serialize;
use sqlx::FromRow;

/// A row from the `users` table. Users are read-only in this API.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}
