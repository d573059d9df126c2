//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

use super::handlers::{cities, health, index};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/cities", get(cities))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
