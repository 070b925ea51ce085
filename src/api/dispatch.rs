//! Single catch-all handler that dispatches on method and path patterns.
//!
//! No per-route registration: every request that the common routes do not
//! claim lands in [`dispatch`], which matches the path against two patterns
//! and picks the operation by hand.

use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, error};

use super::handlers::AppState;
use crate::error::StoreError;
use crate::metrics::LatencyTimer;
use crate::recipes::Recipe;
use crate::slug::slugify;

/// `/recipes`, with any number of trailing slashes.
static RECIPES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/recipes/*$").expect("valid regex"));

/// `/recipes/{slug}`.
static RECIPE_WITH_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/recipes/([a-z0-9]+(?:-[a-z0-9]+)*)$").expect("valid regex"));

/// Home text for this front end.
pub const HOME: &str = "hello world!!";

const NOT_FOUND: &str = "404 Not Found !!";
const BAD_REQUEST: &str = "400 Bad Request !!";
const INTERNAL_ERROR: &str = "500 Internal Server Error !!";

/// A request resolved to a recipe operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `POST /recipes`
    Create,
    /// `GET /recipes`
    List,
    /// `GET /recipes/{id}`
    Get(String),
    /// `PUT /recipes/{id}`
    Update(String),
    /// `DELETE /recipes/{id}`
    Delete(String),
}

impl Route {
    /// Match a method and path, or `None` when nothing applies.
    pub fn resolve(method: &Method, path: &str) -> Option<Self> {
        if RECIPES_RE.is_match(path) {
            return match *method {
                Method::POST => Some(Route::Create),
                Method::GET => Some(Route::List),
                _ => None,
            };
        }

        let id = RECIPE_WITH_ID_RE.captures(path)?.get(1)?.as_str().to_string();
        match *method {
            Method::GET => Some(Route::Get(id)),
            Method::PUT => Some(Route::Update(id)),
            Method::DELETE => Some(Route::Delete(id)),
            _ => None,
        }
    }
}

/// Router whose fallback is the dispatcher.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home)).fallback(dispatch)
}

/// `GET /`
pub async fn home() -> &'static str {
    HOME
}

/// Resolve the request and run the matching recipe operation.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let Some(route) = Route::resolve(&method, uri.path()) else {
        debug!(%method, path = uri.path(), "no recipe route matched");
        return not_found();
    };

    match route {
        Route::Create => create_recipe(&state, &body),
        Route::List => list_recipes(&state),
        Route::Get(id) => get_recipe(&state, &id),
        Route::Update(id) => update_recipe(&state, &id, &body),
        Route::Delete(id) => delete_recipe(&state, &id),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NOT_FOUND).into_response()
}

fn bad_request() -> Response {
    (StatusCode::BAD_REQUEST, BAD_REQUEST).into_response()
}

fn store_failure(err: StoreError) -> Response {
    if err.is_not_found() {
        return not_found();
    }
    error!("store failure: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR).into_response()
}

fn create_recipe(state: &AppState, body: &Bytes) -> Response {
    let _timer = LatencyTimer::new("create_recipe");
    let Ok(recipe) = serde_json::from_slice::<Recipe>(body) else {
        return bad_request();
    };

    let id = slugify(&recipe.name);
    if id.is_empty() {
        return bad_request();
    }

    match state.store.add(&id, recipe) {
        Ok(()) => (StatusCode::OK, "Recipe created successfully").into_response(),
        Err(e) => store_failure(e),
    }
}

fn list_recipes(state: &AppState) -> Response {
    let _timer = LatencyTimer::new("list_recipes");
    match state.store.list() {
        Ok(recipes) => Json(recipes).into_response(),
        Err(e) => store_failure(e),
    }
}

fn get_recipe(state: &AppState, id: &str) -> Response {
    let _timer = LatencyTimer::new("get_recipe");
    match state.store.get(id) {
        Ok(recipe) => Json(recipe).into_response(),
        Err(e) => store_failure(e),
    }
}

fn update_recipe(state: &AppState, id: &str, body: &Bytes) -> Response {
    let _timer = LatencyTimer::new("update_recipe");
    let Ok(recipe) = serde_json::from_slice::<Recipe>(body) else {
        return bad_request();
    };

    match state.store.update(id, recipe) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => store_failure(e),
    }
}

fn delete_recipe(state: &AppState, id: &str) -> Response {
    let _timer = LatencyTimer::new("delete_recipe");
    match state.store.remove(id) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => store_failure(e),
    }
}
