//! Metrics sample types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Host-level resource sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    /// CPU usage in percent
    pub cpu_usage: u32,
    pub memory_used_gb: f64,
    pub memory_total_gb: f64,
    /// Disk usage in percent
    pub disk_usage: u32,
    pub disk_total_gb: f64,
    pub network_io_mbps: u32,
}

impl SystemMetrics {
    /// Memory usage as a percentage of the total
    pub fn memory_percent(&self) -> f64 {
        if self.memory_total_gb > 0.0 {
            self.memory_used_gb / self.memory_total_gb * 100.0
        } else {
            0.0
        }
    }
}

/// A system sample before the store assigns it an id
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSample {
    pub timestamp: DateTime<Utc>,
    pub cpu_usage: u32,
    pub memory_used_gb: f64,
    pub memory_total_gb: f64,
    pub disk_usage: u32,
    pub disk_total_gb: f64,
    pub network_io_mbps: u32,
}

impl SystemSample {
    /// The sample shown before the first collection completes
    pub fn initial() -> Self {
        Self {
            timestamp: Utc::now(),
            cpu_usage: 32,
            memory_used_gb: 8.4,
            memory_total_gb: 16.0,
            disk_usage: 42,
            disk_total_gb: 512.0,
            network_io_mbps: 24,
        }
    }

    pub(crate) fn with_id(self, id: u64) -> SystemMetrics {
        SystemMetrics {
            id,
            timestamp: self.timestamp,
            cpu_usage: self.cpu_usage,
            memory_used_gb: self.memory_used_gb,
            memory_total_gb: self.memory_total_gb,
            disk_usage: self.disk_usage,
            disk_total_gb: self.disk_total_gb,
            network_io_mbps: self.network_io_mbps,
        }
    }
}

/// Per-component resource sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMetrics {
    pub id: u64,
    pub component_id: u32,
    pub timestamp: DateTime<Utc>,
    pub cpu_usage: u32,
    pub memory_usage_mb: f64,
    pub task_count: Option<u32>,
    pub network_io_mbps: u32,
    pub disk_io_mbps: u32,
}

/// A component sample before the store assigns it an id
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSample {
    pub component_id: u32,
    pub timestamp: DateTime<Utc>,
    pub cpu_usage: u32,
    pub memory_usage_mb: f64,
    pub task_count: Option<u32>,
    pub network_io_mbps: u32,
    pub disk_io_mbps: u32,
}

impl ComponentSample {
    pub(crate) fn with_id(self, id: u64) -> ComponentMetrics {
        ComponentMetrics {
            id,
            component_id: self.component_id,
            timestamp: self.timestamp,
            cpu_usage: self.cpu_usage,
            memory_usage_mb: self.memory_usage_mb,
            task_count: self.task_count,
            network_io_mbps: self.network_io_mbps,
            disk_io_mbps: self.disk_io_mbps,
        }
    }
}

/// Everything the GUI needs to draw metrics, captured after each collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub latest: Option<SystemMetrics>,
    pub system_history: Vec<SystemMetrics>,
    pub component_history: HashMap<u32, Vec<ComponentMetrics>>,
}

impl MetricsSnapshot {
    /// The sample before the latest one, used for trend arrows
    pub fn previous(&self) -> Option<&SystemMetrics> {
        let len = self.system_history.len();
        if len >= 2 {
            self.system_history.get(len - 2)
        } else {
            None
        }
    }

    pub fn component(&self, component_id: u32) -> &[ComponentMetrics] {
        self.component_history
            .get(&component_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
