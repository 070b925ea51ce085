//! Concurrent access through the store trait and over HTTP.

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use futures::future::join_all;

use recipe_crud::recipes::{MemStore, Recipe, RecipeStore};

use crate::common::{send, setup, FRONTENDS};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_with_distinct_ids_are_all_kept() {
    let store: Arc<dyn RecipeStore> = Arc::new(MemStore::new());

    let tasks = (0..100).map(|i| {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            store
                .add(&format!("recipe-{i}"), Recipe::new(format!("Recipe {i}"), ["salt"]))
                .unwrap();
        })
    });

    for result in join_all(tasks).await {
        result.unwrap();
    }

    assert_eq!(store.list().unwrap().len(), 100);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_posts_over_http_are_all_kept() {
    for frontend in FRONTENDS {
        let (router, store) = setup(frontend);

        let requests = (0..50).map(|i| {
            let router = router.clone();
            async move {
                let body = format!(r#"{{"name": "Recipe {i}", "ingredients": [{{"name": "salt"}}]}}"#);
                send(&router, Method::POST, "/recipes", Some(body.into_bytes())).await
            }
        });

        for (status, _) in join_all(requests).await {
            assert_eq!(status, StatusCode::OK);
        }

        assert_eq!(store.list().unwrap().len(), 50, "concurrent posts on {frontend}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn readers_never_see_a_half_removed_recipe() {
    let store = Arc::new(MemStore::new());
    let biryani = Recipe::new("Chicken Biryani", ["chicken", "rice"]);
    store.add("chicken-biryani", biryani.clone()).unwrap();

    let reader = {
        let store = Arc::clone(&store);
        let biryani = biryani.clone();
        tokio::spawn(async move {
            for _ in 0..500 {
                let snapshot = store.list().unwrap();
                if let Some(recipe) = snapshot.get("chicken-biryani") {
                    assert_eq!(recipe, &biryani);
                } else {
                    assert!(snapshot.is_empty());
                }
                tokio::task::yield_now().await;
            }
        })
    };

    let remover = {
        let store = Arc::clone(&store);
        tokio::spawn(async move { store.remove("chicken-biryani").unwrap() })
    };

    remover.await.unwrap();
    reader.await.unwrap();
    assert!(store.is_empty());
}
