use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use crate::store::PlayerStore;

pub mod health;
pub mod info;
pub mod players;

/// Build the application router over a generated player store.
pub fn router(store: Arc<PlayerStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(info::get_info))
        .route("/health", get(health::health_check))
        .route("/players", get(players::get_players))
        .route("/players/{id}", get(players::get_player_by_id))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(store)
}
