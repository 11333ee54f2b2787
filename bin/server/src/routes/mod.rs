//! HTTP routes mirroring the tag-manager API.

mod tag_config;
mod tags;

use axum::Router;
use axum::routing::{get, post};

use crate::server::AppState;

/// Assemble the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/tag-config", post(tag_config::create))
        .route("/api/tags", post(tags::register).get(tags::list))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
