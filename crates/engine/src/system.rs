//! System domain — daemon version query.

use crate::client::{EngineClient, EngineError};

impl EngineClient {
    /// Version string of the connected Docker daemon.
    pub async fn server_version(&self) -> Result<String, EngineError> {
        let version = self
            .deadline(async { self.client.version().await.map_err(EngineError::from) })
            .await?;
        Ok(version.version.unwrap_or_default())
    }
}
