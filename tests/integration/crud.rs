//! CRUD scenario over HTTP on each front end.

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::Value;

use recipe_crud::recipes::RecipeStore;

use crate::common::{read_test_data, send, setup, test_recipe, FRONTENDS};

#[tokio::test]
async fn recipes_crud_round_trip_on_every_frontend() {
    for frontend in FRONTENDS {
        let (router, store) = setup(frontend);

        let biryani = read_test_data("chicken_biryani.json");
        let with_dahi = read_test_data("chicken_biryani_with_dahi.json");

        // CREATE
        let (status, _) = send(&router, Method::POST, "/recipes", Some(biryani.clone())).await;
        assert_eq!(status, StatusCode::OK, "create on {frontend}");
        assert_eq!(store.list().unwrap().len(), 1, "list after create on {frontend}");

        // GET ONE
        let (status, body) = send(&router, Method::GET, "/recipes/chicken-biryani", None).await;
        assert_eq!(status, StatusCode::OK, "get on {frontend}");
        let got: Value = serde_json::from_slice(&body).unwrap();
        let expected: Value = serde_json::from_slice(&biryani).unwrap();
        assert_eq!(got, expected, "get body on {frontend}");

        // UPDATE
        let (status, _) = send(&router, Method::PUT, "/recipes/chicken-biryani", Some(with_dahi)).await;
        assert_eq!(status, StatusCode::OK, "update on {frontend}");
        let updated = store.get("chicken-biryani").unwrap();
        assert!(updated.has_ingredient("dahi"), "update applied on {frontend}");
        assert_eq!(updated, test_recipe("chicken_biryani_with_dahi.json"));

        // LIST
        let (status, body) = send(&router, Method::GET, "/recipes", None).await;
        assert_eq!(status, StatusCode::OK, "list on {frontend}");
        let listed: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(listed.as_object().map(|m| m.len()), Some(1));
        assert!(listed["chicken-biryani"]["instructions"].is_string());

        // DELETE
        let (status, _) = send(&router, Method::DELETE, "/recipes/chicken-biryani", None).await;
        assert_eq!(status, StatusCode::OK, "delete on {frontend}");
        assert!(store.list().unwrap().is_empty(), "list after delete on {frontend}");

        // DELETE again is still fine
        let (status, _) = send(&router, Method::DELETE, "/recipes/chicken-biryani", None).await;
        assert_eq!(status, StatusCode::OK, "repeat delete on {frontend}");

        let (status, _) = send(&router, Method::GET, "/recipes/chicken-biryani", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "get after delete on {frontend}");
    }
}

#[tokio::test]
async fn put_on_absent_id_upserts_on_every_frontend() {
    for frontend in FRONTENDS {
        let (router, store) = setup(frontend);

        let (status, _) = send(
            &router,
            Method::PUT,
            "/recipes/chicken-biryani",
            Some(read_test_data("chicken_biryani.json")),
        )
        .await;

        assert_eq!(status, StatusCode::OK, "upsert on {frontend}");
        assert_eq!(
            store.get("chicken-biryani").unwrap(),
            test_recipe("chicken_biryani.json")
        );
    }
}

#[tokio::test]
async fn malformed_create_is_a_client_error_on_every_frontend() {
    for frontend in FRONTENDS {
        let (router, store) = setup(frontend);

        let (status, _) = send(&router, Method::POST, "/recipes", Some(b"{\"name\":".to_vec())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "malformed create on {frontend}");
        assert!(store.list().unwrap().is_empty());
    }
}

#[tokio::test]
async fn list_of_empty_store_is_an_empty_object() {
    for frontend in FRONTENDS {
        let (router, _) = setup(frontend);

        let (status, body) = send(&router, Method::GET, "/recipes", None).await;
        assert_eq!(status, StatusCode::OK);
        let listed: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(listed, serde_json::json!({}), "empty list on {frontend}");
    }
}
