//! `/recipes` sub-router mounted under the app, with request logging.
//!
//! Bodies are decoded by hand from raw bytes and responses are plain text,
//! except reads and updates which echo recipe JSON.

use axum::{
    body::Bytes,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::{error, info};

use super::handlers::AppState;
use crate::error::StoreError;
use crate::metrics::LatencyTimer;
use crate::recipes::Recipe;
use crate::slug::slugify;

/// Home text for this front end.
pub const HOME: &str = "This is home Page";

const CREATED: &str = "Recipe created successfully";
const NOT_FOUND: &str = "Page Not found !!";
const BAD_REQUEST: &str = "Bad Request !!";
const INTERNAL_ERROR: &str = "Internal Server Error Occured";

/// Recipe sub-router, nested at `/recipes`.
pub fn routes() -> Router<AppState> {
    let recipes = Router::new()
        .route("/", get(list_recipes).post(create_recipe))
        .route(
            "/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .layer(middleware::from_fn(log_requests));

    Router::new()
        .route("/", get(home))
        .nest("/recipes", recipes)
}

/// `GET /`
pub async fn home() -> &'static str {
    HOME
}

async fn log_requests(request: Request, next: Next) -> Response {
    info!(method = %request.method(), path = %request.uri().path(), "Request received");
    next.run(request).await
}

fn bad_request() -> Response {
    (StatusCode::BAD_REQUEST, BAD_REQUEST).into_response()
}

fn store_failure(err: StoreError) -> Response {
    if err.is_not_found() {
        return (StatusCode::NOT_FOUND, NOT_FOUND).into_response();
    }
    error!("store failure: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR).into_response()
}

fn decode(body: &Bytes) -> Option<Recipe> {
    match serde_json::from_slice(body) {
        Ok(recipe) => Some(recipe),
        Err(e) => {
            info!("rejecting malformed recipe body: {}", e);
            None
        }
    }
}

/// `POST /recipes`
pub async fn create_recipe(State(state): State<AppState>, body: Bytes) -> Response {
    let _timer = LatencyTimer::new("create_recipe");
    let Some(recipe) = decode(&body) else {
        return bad_request();
    };

    let id = slugify(&recipe.name);
    if id.is_empty() {
        return bad_request();
    }

    match state.store.add(&id, recipe) {
        Ok(()) => (StatusCode::OK, CREATED).into_response(),
        Err(e) => store_failure(e),
    }
}

/// `GET /recipes`
pub async fn list_recipes(State(state): State<AppState>) -> Response {
    let _timer = LatencyTimer::new("list_recipes");
    match state.store.list() {
        Ok(recipes) => (StatusCode::OK, Json(recipes)).into_response(),
        Err(e) => store_failure(e),
    }
}

/// `GET /recipes/:id`
pub async fn get_recipe(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let _timer = LatencyTimer::new("get_recipe");
    match state.store.get(&id) {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(e) => store_failure(e),
    }
}

/// `PUT /recipes/:id`
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let _timer = LatencyTimer::new("update_recipe");
    let Some(recipe) = decode(&body) else {
        return bad_request();
    };

    match state.store.update(&id, recipe.clone()) {
        Ok(()) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(e) => store_failure(e),
    }
}

/// `DELETE /recipes/:id`
pub async fn delete_recipe(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let _timer = LatencyTimer::new("delete_recipe");
    match state.store.remove(&id) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => store_failure(e),
    }
}
