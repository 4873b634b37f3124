//! Config — environment-driven settings for the bot.
//!
//! A `.env` file in the working directory is honoured if present.
//! All values are validated at boot; anything invalid is fatal.

use thiserror::Error;

/// Per-call Docker deadline applied when `ENGINE_TIMEOUT_SECS` is unset.
pub const DEFAULT_ENGINE_TIMEOUT_SECS: u64 = 60;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TELEGRAM_BOT_TOKEN is not set")]
    MissingToken,
    #[error("ALLOWED_CHAT_IDS contains an invalid chat id: {0}")]
    InvalidChatId(String),
    #[error("ENGINE_TIMEOUT_SECS must be a positive integer, got: {0}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram bot API token.
    pub telegram_token: String,
    /// Chat ids allowed to issue commands. Empty means nobody is.
    pub allowed_chat_ids: Vec<i64>,
    /// Docker socket path; empty selects the platform default.
    pub docker_socket: String,
    /// Deadline for each Docker daemon call, in seconds.
    pub engine_timeout_secs: u64,
}

impl BotConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let telegram_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let allowed_chat_ids =
            parse_chat_ids(&std::env::var("ALLOWED_CHAT_IDS").unwrap_or_default())?;
        if allowed_chat_ids.is_empty() {
            tracing::warn!("ALLOWED_CHAT_IDS is empty, no chat is authorized");
        }

        let docker_socket = std::env::var("DOCKER_SOCKET").unwrap_or_default();

        let engine_timeout_secs = match std::env::var("ENGINE_TIMEOUT_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            Err(_) => DEFAULT_ENGINE_TIMEOUT_SECS,
        };

        Ok(Self {
            telegram_token,
            allowed_chat_ids,
            docker_socket,
            engine_timeout_secs,
        })
    }
}

/// Parse a comma-separated chat id list. Whitespace around entries is
/// tolerated and empty entries are skipped; anything unparseable is fatal.
pub fn parse_chat_ids(raw: &str) -> Result<Vec<i64>, ConfigError> {
    let mut ids = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let id = part
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidChatId(part.to_string()))?;
        ids.push(id);
    }
    Ok(ids)
}
