use axum::response::Json;
use crate::models::InfoResponse;

pub const SERVICE_MESSAGE: &str = "Player API is running!";
pub const ENDPOINTS: [&str; 2] = ["/players", "/players/<id>"];

// GET / - Service description
pub async fn get_info() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: SERVICE_MESSAGE.to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}
