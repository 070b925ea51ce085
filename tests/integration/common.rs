//! Shared helpers for integration tests.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use recipe_crud::api::{create_router, AppState};
use recipe_crud::config::Frontend;
use recipe_crud::recipes::{MemStore, Recipe};

/// Every front end, for tests that must hold on all of them.
pub const FRONTENDS: [Frontend; 3] = [Frontend::Routed, Frontend::Nested, Frontend::Dispatch];

/// Read a fixture from `testdata/`.
pub fn read_test_data(name: &str) -> Vec<u8> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata").join(name);
    std::fs::read(&path)
        .unwrap_or_else(|e| panic!("could not read test data file {}: {}", path.display(), e))
}

/// Parse a fixture into a recipe.
pub fn test_recipe(name: &str) -> Recipe {
    serde_json::from_slice(&read_test_data(name)).expect("fixture is a valid recipe")
}

/// Build a router for `frontend` over a fresh store, keeping a handle on the store.
pub fn setup(frontend: Frontend) -> (Router, Arc<MemStore>) {
    let store = Arc::new(MemStore::new());
    let router = create_router(AppState::new(store.clone()), frontend);
    (router, store)
}

/// Send one request and collect status and body.
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Vec<u8>>) -> (StatusCode, Vec<u8>) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(bytes) => {
            request = request.header("content-type", "application/json");
            Body::from(bytes)
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}
