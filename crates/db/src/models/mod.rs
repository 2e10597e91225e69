//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - `FromRow` + `Serialize` entity structs matching database rows
//! - `Deserialize` request DTOs for inserts and patches

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

use serde::Deserialize;

/// Shared PATCH body for the two vote endpoints. Unknown body fields are
/// ignored on deserialization.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VoteDelta {
    pub inc_votes: i32,
}
