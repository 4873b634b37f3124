//! Fake — test double for engine operations.
//!
//! Provides a deterministic [`FakeEngine`] that implements [`EngineOps`]
//! using in-memory state. Useful for unit-testing the dispatcher without
//! a running Docker daemon.

use std::pin::Pin;

use tokio::sync::Mutex;

use crate::client::EngineError;
use crate::container::ContainerSummary;
use crate::image::ImageSummary;
use crate::ops::EngineOps;

// ── In-memory state ─────────────────────────────────────────────

/// A canned container for the fake store.
#[derive(Clone, Debug)]
pub struct FakeContainer {
    pub summary: ContainerSummary,
    pub logs: String,
}

impl FakeContainer {
    /// A minimal running container with the given name.
    pub fn named(name: &str) -> Self {
        Self {
            summary: ContainerSummary {
                names: vec![name.to_string()],
                image: "busybox:latest".to_string(),
                command: "sh".to_string(),
                mounts: Vec::new(),
                ports: Vec::new(),
                status: "Up 2 hours".to_string(),
            },
            logs: String::new(),
        }
    }

    pub fn with_logs(mut self, logs: &str) -> Self {
        self.logs = logs.to_string();
        self
    }

    pub fn with_summary(mut self, summary: ContainerSummary) -> Self {
        self.summary = summary;
        self
    }
}

/// Mutable inner state protected by a mutex.
#[derive(Default)]
struct Inner {
    containers: Vec<FakeContainer>,
    images: Vec<ImageSummary>,
    version: String,
    failure: Option<String>,
    restarted: Vec<String>,
}

/// A fake engine for deterministic testing.
///
/// All methods operate on in-memory state. The builder methods allow
/// pre-populating containers and images before running test code, and
/// [`FakeEngine::fail_with`] turns every operation into a connection
/// failure with the given message.
pub struct FakeEngine {
    inner: Mutex<Inner>,
}

impl FakeEngine {
    /// Create an empty fake engine.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Seed a container into the fake store.
    pub async fn add_container(&self, container: FakeContainer) {
        self.inner.lock().await.containers.push(container);
    }

    /// Seed an image.
    pub async fn add_image(&self, image: ImageSummary) {
        self.inner.lock().await.images.push(image);
    }

    /// Set the daemon version string.
    pub async fn set_version(&self, version: &str) {
        self.inner.lock().await.version = version.to_string();
    }

    /// Make every subsequent operation fail with a connection error
    /// carrying `message`.
    pub async fn fail_with(&self, message: &str) {
        self.inner.lock().await.failure = Some(message.to_string());
    }

    /// Names of containers restarted so far, in call order.
    pub async fn restarted(&self) -> Vec<String> {
        self.inner.lock().await.restarted.clone()
    }
}

impl Default for FakeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn check_failure(&self) -> Result<(), EngineError> {
        match &self.failure {
            Some(message) => Err(EngineError::ConnectionFailed(message.clone())),
            None => Ok(()),
        }
    }

    fn find(&self, name: &str) -> Option<&FakeContainer> {
        self.containers
            .iter()
            .find(|c| c.summary.names.iter().any(|n| n == name))
    }
}

// ── EngineOps implementation ────────────────────────────────────

impl EngineOps for FakeEngine {
    fn list_containers(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Vec<ContainerSummary>, EngineError>> + Send + '_>>
    {
        Box::pin(async {
            let state = self.inner.lock().await;
            state.check_failure()?;
            Ok(state.containers.iter().map(|c| c.summary.clone()).collect())
        })
    }

    fn container_names(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Vec<String>, EngineError>> + Send + '_>> {
        Box::pin(async {
            let state = self.inner.lock().await;
            state.check_failure()?;
            Ok(state
                .containers
                .iter()
                .filter_map(|c| c.summary.names.first().cloned())
                .collect())
        })
    }

    fn tail_logs<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<String, EngineError>> + Send + 'a>> {
        Box::pin(async move {
            let state = self.inner.lock().await;
            state.check_failure()?;
            state
                .find(name)
                .map(|c| c.logs.clone())
                .ok_or_else(|| EngineError::ContainerNotFound(name.to_string()))
        })
    }

    fn restart_container<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<(), EngineError>> + Send + 'a>> {
        Box::pin(async move {
            let mut state = self.inner.lock().await;
            state.check_failure()?;
            if state.find(name).is_none() {
                return Err(EngineError::ContainerNotFound(name.to_string()));
            }
            state.restarted.push(name.to_string());
            Ok(())
        })
    }

    fn list_images(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Vec<ImageSummary>, EngineError>> + Send + '_>>
    {
        Box::pin(async {
            let state = self.inner.lock().await;
            state.check_failure()?;
            Ok(state.images.clone())
        })
    }

    fn server_version(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<String, EngineError>> + Send + '_>> {
        Box::pin(async {
            let state = self.inner.lock().await;
            state.check_failure()?;
            Ok(state.version.clone())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_containers_are_listed() {
        let fake = FakeEngine::new();
        fake.add_container(FakeContainer::named("web")).await;
        fake.add_container(FakeContainer::named("db")).await;

        let names = fake.container_names().await.unwrap();
        assert_eq!(names, vec!["web", "db"]);
    }

    #[tokio::test]
    async fn tail_logs_returns_seeded_text() {
        let fake = FakeEngine::new();
        fake.add_container(FakeContainer::named("web").with_logs("line 1\nline 2\n"))
            .await;

        let logs = fake.tail_logs("web").await.unwrap();
        assert_eq!(logs, "line 1\nline 2\n");
    }

    #[tokio::test]
    async fn unknown_container_is_not_found() {
        let fake = FakeEngine::new();
        let err = fake.tail_logs("ghost").await.unwrap_err();
        assert!(matches!(err, EngineError::ContainerNotFound(name) if name == "ghost"));
    }

    #[tokio::test]
    async fn restart_records_the_name() {
        let fake = FakeEngine::new();
        fake.add_container(FakeContainer::named("web")).await;

        fake.restart_container("web").await.unwrap();
        assert_eq!(fake.restarted().await, vec!["web"]);
    }

    #[tokio::test]
    async fn injected_failure_hits_every_operation() {
        let fake = FakeEngine::new();
        fake.add_container(FakeContainer::named("web")).await;
        fake.fail_with("socket refused").await;

        let err = fake.list_containers().await.unwrap_err();
        assert_eq!(err.to_string(), "Docker connection failed: socket refused");
        assert!(fake.server_version().await.is_err());
        assert!(fake.restart_container("web").await.is_err());
        assert!(fake.restarted().await.is_empty());
    }
}
