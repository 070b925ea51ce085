//! In-memory recipe store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, instrument};

use super::types::Recipe;
use crate::error::StoreError;
use crate::metrics;

/// Operations every recipe backend provides to the HTTP front ends.
///
/// Front ends hold an `Arc<dyn RecipeStore>` and never see the concrete type.
pub trait RecipeStore: Send + Sync {
    /// Insert or overwrite the recipe stored under `id`.
    fn add(&self, id: &str, recipe: Recipe) -> Result<(), StoreError>;

    /// Fetch an owned copy of the recipe stored under `id`.
    fn get(&self, id: &str) -> Result<Recipe, StoreError>;

    /// Insert or overwrite the recipe stored under `id`.
    fn update(&self, id: &str, recipe: Recipe) -> Result<(), StoreError>;

    /// Snapshot of every stored recipe keyed by identifier.
    fn list(&self) -> Result<HashMap<String, Recipe>, StoreError>;

    /// Delete the recipe stored under `id`. Absent ids are not an error.
    fn remove(&self, id: &str) -> Result<(), StoreError>;
}

/// Volatile recipe store guarded by a single reader-writer lock.
#[derive(Debug, Default)]
pub struct MemStore {
    recipes: RwLock<HashMap<String, Recipe>>,
}

impl MemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored recipes.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no recipes.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Every write is a single insert/remove, so a poisoned map is still whole.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Recipe>> {
        self.recipes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Recipe>> {
        self.recipes.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn upsert(&self, id: &str, recipe: Recipe) {
        let mut recipes = self.write();
        let replaced = recipes.insert(id.to_string(), recipe).is_some();
        metrics::set_recipes_stored(recipes.len());
        debug!(id, replaced, "recipe stored");
    }
}

impl RecipeStore for MemStore {
    #[instrument(skip(self, recipe))]
    fn add(&self, id: &str, recipe: Recipe) -> Result<(), StoreError> {
        metrics::inc_store_op("add");
        self.upsert(id, recipe);
        Ok(())
    }

    #[instrument(skip(self))]
    fn get(&self, id: &str) -> Result<Recipe, StoreError> {
        metrics::inc_store_op("get");
        self.read().get(id).cloned().ok_or_else(|| {
            metrics::inc_not_found();
            StoreError::NotFound { id: id.to_string() }
        })
    }

    #[instrument(skip(self, recipe))]
    fn update(&self, id: &str, recipe: Recipe) -> Result<(), StoreError> {
        metrics::inc_store_op("update");
        self.upsert(id, recipe);
        Ok(())
    }

    #[instrument(skip(self))]
    fn list(&self) -> Result<HashMap<String, Recipe>, StoreError> {
        metrics::inc_store_op("list");
        Ok(self.read().clone())
    }

    #[instrument(skip(self))]
    fn remove(&self, id: &str) -> Result<(), StoreError> {
        metrics::inc_store_op("remove");
        let mut recipes = self.write();
        let removed = recipes.remove(id).is_some();
        metrics::set_recipes_stored(recipes.len());
        debug!(id, removed, "recipe removed");
        Ok(())
    }
}
