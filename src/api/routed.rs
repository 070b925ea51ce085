//! Flat router with path parameters and JSON status bodies.

use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument};

use super::handlers::AppState;
use crate::error::ApiError;
use crate::metrics::LatencyTimer;
use crate::recipes::Recipe;
use crate::slug::slugify;

/// Recipe routes, registered one path at a time.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/recipes/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
}

fn decode(payload: Result<Json<Recipe>, JsonRejection>) -> Result<Recipe, ApiError> {
    payload
        .map(|Json(recipe)| recipe)
        .map_err(|e| ApiError::BadRequest(e.body_text()))
}

/// Home text for this front end.
pub const HOME: &str = "This is Home Route";

/// `GET /`
pub async fn home() -> &'static str {
    HOME
}

/// `POST /recipes`
#[instrument(skip_all)]
pub async fn create_recipe(
    State(state): State<AppState>,
    payload: Result<Json<Recipe>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let _timer = LatencyTimer::new("create_recipe");
    let recipe = decode(payload)?;

    let id = slugify(&recipe.name);
    if id.is_empty() {
        return Err(ApiError::BadRequest(
            "recipe name must contain letters or digits".to_string(),
        ));
    }

    state.store.add(&id, recipe)?;
    info!(%id, "recipe created");
    Ok(Json(json!({ "status": "success" })))
}

/// `GET /recipes`
pub async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, Recipe>>, ApiError> {
    let _timer = LatencyTimer::new("list_recipes");
    Ok(Json(state.store.list()?))
}

/// `GET /recipes/:id`
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Recipe>, ApiError> {
    let _timer = LatencyTimer::new("get_recipe");
    Ok(Json(state.store.get(&id)?))
}

/// `PUT /recipes/:id`
#[instrument(skip(state, payload))]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Recipe>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let _timer = LatencyTimer::new("update_recipe");
    let recipe = decode(payload)?;
    state.store.update(&id, recipe)?;
    info!("recipe updated");
    Ok(Json(json!({ "status": "success" })))
}

/// `DELETE /recipes/:id`
#[instrument(skip(state))]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let _timer = LatencyTimer::new("delete_recipe");
    state.store.remove(&id)?;
    info!("recipe deleted");
    Ok(Json(json!({ "status": "deleted successfully" })))
}
