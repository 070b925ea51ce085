//! In-memory recipe CRUD service.
//!
//! Recipes are kept in a volatile store keyed by a slug of their name and
//! served over HTTP by one of three interchangeable front ends. Every front
//! end talks to the store through the [`recipes::RecipeStore`] trait only.
//!
//! ```text
//! POST /recipes {"name": "Chicken Biryani", ...}
//!   -> slugify("Chicken Biryani") = "chicken-biryani"
//!   -> store.add("chicken-biryani", recipe)
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`recipes`]: Recipe types and the in-memory store
//! - [`slug`]: Identifier derivation from display names
//! - [`api`]: HTTP front ends
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod recipes;
pub mod slug;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result, StoreError};
pub use recipes::{MemStore, Recipe, RecipeStore};
