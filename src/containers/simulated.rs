//! In-process container simulation
//!
//! Used when no Docker host is configured. State changes are immediate and logs
//! are synthetic, so the dashboard is fully usable without a daemon.

use crate::containers::models::{ContainerInfo, ContainerStats};
use crate::containers::traits::ContainerService;
use crate::registry::{Component, ComponentStatus};
use crate::utils::{format_uptime, parse_memory_mb, parse_uptime, DelocError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::info;

const MAX_LOG_LINES: usize = 1_000;

#[derive(Debug, Clone)]
struct SimContainer {
    id: String,
    image: String,
    status: ComponentStatus,
    started_at: Option<DateTime<Utc>>,
    base_cpu: f64,
    base_memory_mb: f64,
    log: Vec<String>,
}

impl SimContainer {
    fn log(&mut self, level: &str, message: &str) {
        self.log.push(format!(
            "[{}] {}: {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S"),
            level,
            message
        ));
        if self.log.len() > MAX_LOG_LINES {
            let excess = self.log.len() - MAX_LOG_LINES;
            self.log.drain(..excess);
        }
    }

    fn boot(&mut self) {
        self.status = ComponentStatus::Running;
        self.started_at = Some(Utc::now());
        self.log("INFO", "Starting service");
        self.log("INFO", "Service initialized");
        self.log("INFO", "Service started successfully");
    }

    fn halt(&mut self) {
        self.status = ComponentStatus::Stopped;
        self.started_at = None;
        self.log("INFO", "Received shutdown signal");
        self.log("INFO", "Service stopped");
    }

    fn is_up(&self) -> bool {
        matches!(
            self.status,
            ComponentStatus::Running | ComponentStatus::Warning
        )
    }
}

/// Container driver that simulates the DELoc stack in memory
pub struct SimulatedContainerService {
    containers: Mutex<HashMap<String, SimContainer>>,
}

fn random_container_id() -> String {
    let mut rng = rand::thread_rng();
    (0..32)
        .map(|_| std::char::from_digit(rng.gen_range(0..16), 16).unwrap_or('0'))
        .collect()
}

impl SimulatedContainerService {
    /// Seed one simulated container per component, mirroring its current state
    pub fn from_components(components: &[Component]) -> Self {
        let now = Utc::now();
        let mut containers = HashMap::new();

        for component in components {
            let up = component.is_running();
            let started_at = if up {
                let age = component
                    .uptime
                    .as_deref()
                    .and_then(parse_uptime)
                    .and_then(|d| chrono::Duration::from_std(d).ok())
                    .unwrap_or_else(chrono::Duration::zero);
                Some(now - age)
            } else {
                None
            };

            let mut container = SimContainer {
                id: component
                    .container_id
                    .clone()
                    .unwrap_or_else(random_container_id),
                image: component.image.clone(),
                status: component.status,
                started_at,
                base_cpu: component.cpu_usage.unwrap_or(5).max(1) as f64,
                base_memory_mb: component
                    .memory_usage
                    .as_deref()
                    .and_then(parse_memory_mb)
                    .filter(|mb| *mb > 0.0)
                    .unwrap_or(512.0),
                log: Vec::new(),
            };
            if up {
                container.log("INFO", "Starting service");
                container.log("INFO", "Service initialized");
                container.log("INFO", "Service started successfully");
            }
            if component.status == ComponentStatus::Warning {
                container.log("WARN", "Task backlog growing faster than it drains");
            }

            containers.insert(component.name.clone(), container);
        }

        info!("Simulating {} containers", containers.len());
        Self {
            containers: Mutex::new(containers),
        }
    }

    async fn with_container<T>(
        &self,
        name: &str,
        f: impl FnOnce(&mut SimContainer) -> T,
    ) -> Result<T, DelocError> {
        let mut containers = self.containers.lock().await;
        let container = containers
            .get_mut(name)
            .ok_or_else(|| DelocError::Container(format!("No such container: {}", name)))?;
        Ok(f(container))
    }
}

#[async_trait]
impl ContainerService for SimulatedContainerService {
    fn id(&self) -> &'static str {
        "simulated"
    }

    async fn list_containers(&self) -> Result<Vec<ContainerInfo>, DelocError> {
        let now = Utc::now();
        let containers = self.containers.lock().await;

        let mut list: Vec<ContainerInfo> = containers
            .iter()
            .map(|(name, c)| ContainerInfo {
                id: c.id.clone(),
                name: name.clone(),
                image: c.image.clone(),
                status: c.status,
                uptime: c
                    .started_at
                    .and_then(|at| (now - at).to_std().ok())
                    .map(format_uptime),
            })
            .collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(list)
    }

    async fn start(&self, name: &str) -> Result<(), DelocError> {
        info!("Starting simulated container {}", name);
        self.with_container(name, |c| {
            if !c.is_up() {
                c.boot();
            }
        })
        .await
    }

    async fn stop(&self, name: &str) -> Result<(), DelocError> {
        info!("Stopping simulated container {}", name);
        self.with_container(name, |c| {
            if c.is_up() {
                c.halt();
            }
        })
        .await
    }

    async fn restart(&self, name: &str) -> Result<(), DelocError> {
        info!("Restarting simulated container {}", name);
        self.with_container(name, |c| {
            if c.is_up() {
                c.halt();
            }
            c.boot();
        })
        .await
    }

    async fn logs(&self, name: &str, tail: usize) -> Result<Vec<String>, DelocError> {
        self.with_container(name, |c| {
            if c.is_up() {
                let processed = rand::thread_rng().gen_range(10..200);
                c.log("INFO", &format!("Processed {} tasks", processed));
            }
            let start = c.log.len().saturating_sub(tail);
            c.log[start..].to_vec()
        })
        .await
    }

    async fn stats(&self, name: &str) -> Result<Option<ContainerStats>, DelocError> {
        self.with_container(name, |c| {
            if !c.is_up() {
                return None;
            }
            let mut rng = rand::thread_rng();
            let cpu = (c.base_cpu + rng.gen_range(-3.0..3.0)).max(1.0);
            let memory = c.base_memory_mb * rng.gen_range(0.95..1.05);
            Some(ContainerStats {
                cpu_percent: cpu,
                memory_mb: memory,
            })
        })
        .await
    }
}
