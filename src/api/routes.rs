//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{health, metrics, AppState};
use super::{dispatch, nested, routed};
use crate::config::Frontend;

/// Create the API router for the chosen front end.
pub fn create_router(state: AppState, frontend: Frontend) -> Router {
    let recipes = match frontend {
        Frontend::Routed => routed::routes(),
        Frontend::Nested => nested::routes(),
        Frontend::Dispatch => dispatch::routes(),
    };

    Router::new()
        // Health endpoints
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .merge(recipes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
