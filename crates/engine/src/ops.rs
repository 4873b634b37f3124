//! Engine trait — abstract interface over the Docker daemon.
//!
//! The dispatcher accesses the daemon through this trait.
//! [`EngineClient`] provides the real Bollard-backed implementation.
//! `fake.rs` provides a test double.

use std::pin::Pin;

use crate::client::{EngineClient, EngineError};
use crate::container::ContainerSummary;
use crate::image::ImageSummary;

/// Unified async interface over the Docker daemon.
///
/// Object-safe thanks to `Pin<Box<…>>` returns. Implementations must be
/// `Send + Sync` so they can live inside shared bot state.
pub trait EngineOps: Send + Sync {
    // ── Containers ──────────────────────────────────────────────

    fn list_containers(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Vec<ContainerSummary>, EngineError>> + Send + '_>>;

    fn container_names(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Vec<String>, EngineError>> + Send + '_>>;

    fn tail_logs<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<String, EngineError>> + Send + 'a>>;

    fn restart_container<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<(), EngineError>> + Send + 'a>>;

    // ── Images ──────────────────────────────────────────────────

    fn list_images(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Vec<ImageSummary>, EngineError>> + Send + '_>>;

    // ── System ──────────────────────────────────────────────────

    fn server_version(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<String, EngineError>> + Send + '_>>;
}

impl EngineOps for EngineClient {
    fn list_containers(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Vec<ContainerSummary>, EngineError>> + Send + '_>>
    {
        Box::pin(EngineClient::list_containers(self))
    }

    fn container_names(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Vec<String>, EngineError>> + Send + '_>> {
        Box::pin(EngineClient::container_names(self))
    }

    fn tail_logs<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<String, EngineError>> + Send + 'a>> {
        Box::pin(EngineClient::tail_logs(self, name))
    }

    fn restart_container<'a>(
        &'a self,
        name: &'a str,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<(), EngineError>> + Send + 'a>> {
        Box::pin(EngineClient::restart_container(self, name))
    }

    fn list_images(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<Vec<ImageSummary>, EngineError>> + Send + '_>>
    {
        Box::pin(EngineClient::list_images(self))
    }

    fn server_version(
        &self,
    ) -> Pin<Box<dyn std::future::Future<Output = Result<String, EngineError>> + Send + '_>> {
        Box::pin(EngineClient::server_version(self))
    }
}
