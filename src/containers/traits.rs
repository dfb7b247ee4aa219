use crate::containers::models::{ContainerInfo, ContainerStats};
use crate::utils::DelocError;
use async_trait::async_trait;

/// Default number of log lines fetched for the detail page
pub const DEFAULT_LOG_TAIL: usize = 200;

/// Core trait for container drivers
///
/// Isolates the backend from how containers are actually managed
/// (Docker Engine over HTTP, or the in-process simulation).
#[async_trait]
pub trait ContainerService: Send + Sync {
    /// Returns a unique identifier for this driver (e.g. "docker-http", "simulated")
    fn id(&self) -> &'static str;

    /// List every container known to the driver, stopped ones included
    async fn list_containers(&self) -> Result<Vec<ContainerInfo>, DelocError>;

    async fn start(&self, name: &str) -> Result<(), DelocError>;

    async fn stop(&self, name: &str) -> Result<(), DelocError>;

    async fn restart(&self, name: &str) -> Result<(), DelocError>;

    /// The last `tail` log lines of a container, oldest first
    async fn logs(&self, name: &str, tail: usize) -> Result<Vec<String>, DelocError>;

    /// Current resource usage. `None` when the container is not running.
    async fn stats(&self, name: &str) -> Result<Option<ContainerStats>, DelocError>;
}
