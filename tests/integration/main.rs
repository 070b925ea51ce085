//! Integration tests for the recipe service.
//!
//! Every front end is driven through the same CRUD scenario against a fresh
//! in-memory store. Run with: cargo test --test integration

mod common;
mod concurrency;
mod crud;
