//! HTTP front ends over the recipe store.
//!
//! Three interchangeable front ends serve the same recipe routes:
//! - [`routed`]: flat router with path parameters and JSON status bodies
//! - [`nested`]: `/recipes` sub-router with request-logging middleware
//! - [`dispatch`]: one catch-all handler matching method and path patterns

pub mod dispatch;
pub mod handlers;
pub mod nested;
pub mod routed;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
