//! Container domain — list, tail logs, restart.

use crate::client::{EngineClient, EngineError};

use bollard::query_parameters::{ListContainersOptions, LogsOptions, RestartContainerOptions};
use futures_util::stream::StreamExt;

/// How many trailing log lines a tail request fetches.
const LOG_TAIL_LINES: u32 = 30;

/// Chat-facing view of one container, mapped from the daemon's summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSummary {
    /// Container names with the daemon's leading `/` stripped.
    pub names: Vec<String>,
    pub image: String,
    pub command: String,
    /// `(source, destination)` mount pairs.
    pub mounts: Vec<(String, String)>,
    /// `(private, public)` port pairs; `public` is absent for unpublished ports.
    pub ports: Vec<(u16, Option<u16>)>,
    pub status: String,
}

impl From<bollard::models::ContainerSummary> for ContainerSummary {
    fn from(summary: bollard::models::ContainerSummary) -> Self {
        let names = summary
            .names
            .unwrap_or_default()
            .into_iter()
            .map(|n| n.trim_start_matches('/').to_string())
            .collect();
        let mounts = summary
            .mounts
            .unwrap_or_default()
            .into_iter()
            .map(|m| (m.source.unwrap_or_default(), m.destination.unwrap_or_default()))
            .collect();
        let ports = summary
            .ports
            .unwrap_or_default()
            .into_iter()
            .map(|p| (p.private_port, p.public_port))
            .collect();

        Self {
            names,
            image: summary.image.unwrap_or_default(),
            command: summary.command.unwrap_or_default(),
            mounts,
            ports,
            status: summary.status.unwrap_or_default(),
        }
    }
}

impl EngineClient {
    /// List all containers on the Docker host, running and stopped.
    pub async fn list_containers(&self) -> Result<Vec<ContainerSummary>, EngineError> {
        let options = Some(ListContainersOptions {
            all: true,
            ..Default::default()
        });

        let containers = self
            .deadline(async {
                self.client
                    .list_containers(options)
                    .await
                    .map_err(EngineError::from)
            })
            .await?;

        Ok(containers.into_iter().map(ContainerSummary::from).collect())
    }

    /// Primary name of every container, in daemon order.
    pub async fn container_names(&self) -> Result<Vec<String>, EngineError> {
        let containers = self.list_containers().await?;
        Ok(containers
            .into_iter()
            .filter_map(|c| c.names.into_iter().next())
            .collect())
    }

    /// Fetch the last [`LOG_TAIL_LINES`] lines of combined stdout/stderr
    /// as lossy UTF-8 text.
    pub async fn tail_logs(&self, name: &str) -> Result<String, EngineError> {
        let options = LogsOptions {
            follow: false,
            stdout: true,
            stderr: true,
            since: 0,
            until: 0,
            timestamps: false,
            tail: LOG_TAIL_LINES.to_string(),
        };

        self.deadline(async {
            let mut stream = self.client.logs(name, Some(options));
            let mut text = String::new();
            while let Some(chunk) = stream.next().await {
                let output = chunk.map_err(|e| match e {
                    bollard::errors::Error::DockerResponseServerError { status_code: 404, .. } => {
                        EngineError::ContainerNotFound(name.to_string())
                    }
                    other => EngineError::BollardError(other),
                })?;
                let payload: bytes::Bytes = output.into_bytes();
                text.push_str(&String::from_utf8_lossy(&payload));
            }
            tracing::debug!(name, bytes = text.len(), "collected log tail");
            Ok(text)
        })
        .await
    }

    /// Restart a container using the daemon's default stop timeout.
    pub async fn restart_container(&self, name: &str) -> Result<(), EngineError> {
        self.deadline(async {
            self.client
                .restart_container(name, None::<RestartContainerOptions>)
                .await
                .map_err(|e| match e {
                    bollard::errors::Error::DockerResponseServerError { status_code: 404, .. } => {
                        EngineError::ContainerNotFound(name.to_string())
                    }
                    other => EngineError::BollardError(other),
                })
        })
        .await
    }
}
