use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("player {0} not found")]
    PlayerNotFound(String),
    #[error("player id is not a valid integer")]
    InvalidPlayerId,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::PlayerNotFound(_) => (StatusCode::NOT_FOUND, "Player not found"),
            ApiError::InvalidPlayerId => (StatusCode::NOT_FOUND, "Not Found"),
        };

        let body = Json(ErrorResponse {
            error: error_message.to_string(),
        });

        (status, body).into_response()
    }
}

/// Failures while bringing the server up
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
