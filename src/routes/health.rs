use axum::{extract::State, response::Json};
use std::sync::Arc;
use crate::models::HealthResponse;
use crate::store::PlayerStore;

// GET /health - Liveness plus the size of the loaded collection
pub async fn health_check(State(store): State<Arc<PlayerStore>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        players: store.len(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
