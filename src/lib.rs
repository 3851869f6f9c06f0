//! In-memory player API: ten random players generated at startup, served
//! read-only over HTTP/JSON.

use axum::Router;
use std::sync::Arc;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

pub use config::Config;
pub use store::PlayerStore;

/// Router with CORS and request tracing, sharing `store` across handlers.
pub fn app(store: PlayerStore) -> Router {
    routes::router(Arc::new(store))
}
