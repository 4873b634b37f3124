//! Engine client — core struct, constructor, error types.
//!
//! Domain methods live in sibling modules (`container`, `image`, `system`)
//! which add `impl EngineClient` blocks.

use std::time::Duration;

use bollard::Docker;
use thiserror::Error;

/// Per-call deadline applied when the caller does not configure one.
pub const DEFAULT_CALL_TIMEOUT_SECS: u64 = 60;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Docker connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Container not found: {0}")]
    ContainerNotFound(String),
    #[error("Docker call timed out after {0}s")]
    Timeout(u64),
    #[error("Bollard error: {0}")]
    BollardError(#[from] bollard::errors::Error),
}

#[derive(Debug, Clone)]
pub struct EngineClient {
    /// The bollard Docker client.  `pub(crate)` so that domain modules
    /// in sibling files can call bollard APIs directly.
    pub(crate) client: Docker,
    /// The Docker socket path this client is connected to.
    pub(crate) socket_path: String,
    /// Deadline applied to every daemon call.
    pub(crate) call_timeout: Duration,
}

impl EngineClient {
    pub fn new(socket_path: &str, call_timeout: Duration) -> Result<Self, EngineError> {
        let connection = if socket_path.is_empty() {
            Docker::connect_with_defaults()
                .map_err(|e| EngineError::ConnectionFailed(e.to_string()))?
        } else {
            let clean_path = socket_path.trim_start_matches("unix://");
            Docker::connect_with_socket(clean_path, 120, &bollard::API_DEFAULT_VERSION)
                .map_err(|e| EngineError::ConnectionFailed(e.to_string()))?
        };

        Ok(EngineClient {
            client: connection,
            socket_path: socket_path.to_string(),
            call_timeout,
        })
    }

    pub fn socket_path(&self) -> &str {
        &self.socket_path
    }

    /// Run one daemon call under the per-call deadline. No retries —
    /// an elapsed deadline surfaces as [`EngineError::Timeout`].
    pub(crate) async fn deadline<T, F>(&self, call: F) -> Result<T, EngineError>
    where
        F: std::future::Future<Output = Result<T, EngineError>>,
    {
        match tokio::time::timeout(self.call_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(EngineError::Timeout(self.call_timeout.as_secs())),
        }
    }
}
