//! Boot — logging init, config load, Docker connection, state creation.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::auth::AllowList;
use crate::conf::BotConfig;
use crate::dispatch::BOT_VERSION;
use crate::state::{BotState, SharedState};
use engine::client::EngineClient;

/// Initialise the tracing / logging subsystem.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bot=info,engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load config, connect to Docker, and build shared state.
///
/// Returns `(SharedState, BotConfig)` on success.
pub async fn boot() -> anyhow::Result<(SharedState, BotConfig)> {
    info!("Starting chatops bot v{}", BOT_VERSION);

    let config = BotConfig::load()?;
    info!(
        allowed_chats = config.allowed_chat_ids.len(),
        timeout_secs = config.engine_timeout_secs,
        "Loaded configuration"
    );

    info!(
        "Connecting to Docker daemon at: {}",
        if config.docker_socket.is_empty() {
            "default socket"
        } else {
            &config.docker_socket
        }
    );

    let engine = EngineClient::new(
        &config.docker_socket,
        Duration::from_secs(config.engine_timeout_secs),
    )
    .map_err(|e| {
        error!("Failed to connect to Docker: {}", e);
        e
    })?;

    info!("Successfully connected to Docker daemon");

    let state = Arc::new(BotState::new(
        Arc::new(engine),
        AllowList::new(&config.allowed_chat_ids),
    ));
    info!("Initialized shared application state");

    Ok((state, config))
}
