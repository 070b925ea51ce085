//! Recipe records and the stores that hold them.
//!
//! This module handles:
//! - Recipe and ingredient types
//! - The `RecipeStore` capability consumed by every front end
//! - The volatile in-memory implementation

pub mod store;
pub mod types;

pub use store::{MemStore, RecipeStore};
pub use types::{Ingredient, Recipe};
