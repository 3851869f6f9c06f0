use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use player_api::error::StartupError;
use player_api::{Config, PlayerStore};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting player api server...");

    let config = Config::from_env()?;

    let mut rng = match config.player_seed {
        Some(seed) => {
            tracing::info!(seed, "Generating players from fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let store = PlayerStore::generate(&mut rng);

    tracing::info!(count = store.len(), "Players generated.");

    let addr = config.addr();
    let app = player_api::app(store);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(StartupError::Serve)
}
