use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
};
use std::sync::Arc;
use crate::error::ApiError;
use crate::models::{PlayerResponse, PlayersResponse};
use crate::store::PlayerStore;

// GET /players - All players, highest score first
pub async fn get_players(State(store): State<Arc<PlayerStore>>) -> Json<PlayersResponse> {
    Json(PlayersResponse {
        players: store.ranked(),
    })
}

// GET /players/{id} - First player with the given id
pub async fn get_player_by_id(
    State(store): State<Arc<PlayerStore>>,
    segment: Result<Path<String>, PathRejection>,
) -> Result<Json<PlayerResponse>, ApiError> {
    let Path(segment) = segment.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected player id segment");
        ApiError::InvalidPlayerId
    })?;
    let player_id = parse_player_id(&segment)?;

    let player = store.find_by_id(player_id).cloned().ok_or_else(|| {
        tracing::debug!(player_id, "player lookup missed");
        ApiError::PlayerNotFound(segment)
    })?;

    Ok(Json(PlayerResponse { player }))
}

/// Ids are plain ASCII digits. Digit strings too large for `u32` are
/// well-formed but can never match a generated player.
fn parse_player_id(segment: &str) -> Result<u32, ApiError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        tracing::debug!(segment, "player id is not a digit string");
        return Err(ApiError::InvalidPlayerId);
    }

    segment
        .parse()
        .map_err(|_| ApiError::PlayerNotFound(segment.to_string()))
}
