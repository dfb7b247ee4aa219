//! Container driver data types

use crate::registry::ComponentStatus;
use serde::{Deserialize, Serialize};

/// One container as reported by the driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerInfo {
    pub id: String,
    /// Container name without the leading `/`
    pub name: String,
    pub image: String,
    pub status: ComponentStatus,
    /// Human-readable uptime, e.g. `"2d 14h 32m"`
    pub uptime: Option<String>,
}

/// Point-in-time resource usage of a container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerStats {
    pub cpu_percent: f64,
    pub memory_mb: f64,
}
