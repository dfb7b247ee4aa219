//! Big data component models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a component's container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Running,
    Stopped,
    Warning,
    Error,
}

impl ComponentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentStatus::Running => "running",
            ComponentStatus::Stopped => "stopped",
            ComponentStatus::Warning => "warning",
            ComponentStatus::Error => "error",
        }
    }

    /// Parse the lowercase form stored in the database
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "running" => Some(ComponentStatus::Running),
            "stopped" => Some(ComponentStatus::Stopped),
            "warning" => Some(ComponentStatus::Warning),
            "error" => Some(ComponentStatus::Error),
            _ => None,
        }
    }

    /// Label shown in status badges
    pub fn label(&self) -> &'static str {
        match self {
            ComponentStatus::Running => "Running",
            ComponentStatus::Stopped => "Stopped",
            ComponentStatus::Warning => "Warning",
            ComponentStatus::Error => "Error",
        }
    }

    /// Map a Docker container `State` onto a component status.
    pub fn from_docker_state(state: &str) -> Self {
        match state.to_ascii_lowercase().as_str() {
            "running" => ComponentStatus::Running,
            "created" | "exited" => ComponentStatus::Stopped,
            "restarting" | "paused" => ComponentStatus::Warning,
            _ => ComponentStatus::Error,
        }
    }
}

impl fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A big data component managed by DELoc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: u32,
    /// Container name
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub icon: String,
    pub status: ComponentStatus,
    pub container_id: Option<String>,
    pub image: String,
    pub ports: Vec<String>,
    pub volumes: Vec<String>,
    pub network_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub uptime: Option<String>,
    /// CPU usage in percent
    pub cpu_usage: Option<u32>,
    pub memory_usage: Option<String>,
    pub enabled: bool,
    pub order: u32,
    pub configuration: serde_json::Value,
}

impl Component {
    /// First published host port, used for "Open Web UI".
    pub fn web_port(&self) -> Option<u16> {
        self.ports
            .first()
            .and_then(|mapping| mapping.split(':').next())
            .and_then(|host| host.parse().ok())
    }

    pub fn web_url(&self) -> Option<String> {
        self.web_port().map(|port| format!("http://localhost:{}", port))
    }

    pub fn is_running(&self) -> bool {
        matches!(
            self.status,
            ComponentStatus::Running | ComponentStatus::Warning
        )
    }

    /// Short container id as shown by `docker ps`
    pub fn short_container_id(&self) -> Option<&str> {
        self.container_id
            .as_deref()
            .map(|id| if id.len() > 12 { &id[..12] } else { id })
    }
}

/// A component definition before it has an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewComponent {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub icon: String,
    pub status: ComponentStatus,
    pub container_id: Option<String>,
    pub image: String,
    pub ports: Vec<String>,
    pub volumes: Vec<String>,
    pub network_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub uptime: Option<String>,
    pub cpu_usage: Option<u32>,
    pub memory_usage: Option<String>,
    pub enabled: bool,
    pub order: u32,
    pub configuration: serde_json::Value,
}

impl NewComponent {
    pub fn into_component(self, id: u32) -> Component {
        Component {
            id,
            name: self.name,
            display_name: self.display_name,
            description: self.description,
            icon: self.icon,
            status: self.status,
            container_id: self.container_id,
            image: self.image,
            ports: self.ports,
            volumes: self.volumes,
            network_name: self.network_name,
            created_at: self.created_at,
            uptime: self.uptime,
            cpu_usage: self.cpu_usage,
            memory_usage: self.memory_usage,
            enabled: self.enabled,
            order: self.order,
            configuration: self.configuration,
        }
    }
}

/// Partial update merged into an existing component.
///
/// Doubly wrapped options distinguish "leave alone" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentUpdate {
    pub status: Option<ComponentStatus>,
    pub enabled: Option<bool>,
    pub container_id: Option<Option<String>>,
    pub uptime: Option<Option<String>>,
    pub cpu_usage: Option<Option<u32>>,
    pub memory_usage: Option<Option<String>>,
    pub created_at: Option<Option<DateTime<Utc>>>,
}

impl ComponentUpdate {
    pub fn status(status: ComponentStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub(crate) fn apply(self, component: &mut Component) {
        if let Some(status) = self.status {
            component.status = status;
        }
        if let Some(enabled) = self.enabled {
            component.enabled = enabled;
        }
        if let Some(container_id) = self.container_id {
            component.container_id = container_id;
        }
        if let Some(uptime) = self.uptime {
            component.uptime = uptime;
        }
        if let Some(cpu) = self.cpu_usage {
            component.cpu_usage = cpu;
        }
        if let Some(memory) = self.memory_usage {
            component.memory_usage = memory;
        }
        if let Some(created_at) = self.created_at {
            component.created_at = created_at;
        }
    }
}
