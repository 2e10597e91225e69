//! Route definitions for topics, mounted at `/topics`.
//!
//! ```text
//! GET    /  -> list_topics
//! POST   /  -> create_topic
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::topics;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(topics::list_topics).post(topics::create_topic))
}
