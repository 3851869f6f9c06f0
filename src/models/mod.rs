use serde::Serialize;

/// A single generated player record
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub score: u32,
}

/// Response body for `GET /`
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub message: String,
    pub endpoints: Vec<String>,
}

/// Response wrapper for the player list endpoint
#[derive(Debug, Serialize)]
pub struct PlayersResponse {
    pub players: Vec<Player>,
}

/// Response wrapper for a single player lookup
#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub player: Player,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Size of the generated player collection
    pub players: usize,
    pub timestamp: i64,
}
