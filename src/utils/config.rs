//! Application configuration

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Docker Engine endpoint, e.g. `http://localhost:2375`. `None` runs the simulated driver.
    pub docker_host: Option<String>,

    /// Seconds between metrics collections
    pub metrics_interval_secs: u64,

    /// Number of samples shown in history strips
    pub history_limit: usize,

    /// CPU usage (%) above which a system alert is raised
    pub cpu_alert_threshold: u32,

    /// Memory usage (% of total) above which a system alert is raised
    pub memory_alert_threshold: u32,

    /// Disk usage (%) above which a system alert is raised
    pub disk_alert_threshold: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            docker_host: None,
            metrics_interval_secs: 30,
            history_limit: 24,
            cpu_alert_threshold: 80,
            memory_alert_threshold: 90,
            disk_alert_threshold: 85,
        }
    }
}

impl AppSettings {
    pub const MIN_INTERVAL_SECS: u64 = 5;
    pub const MAX_INTERVAL_SECS: u64 = 600;
    pub const MAX_HISTORY: usize = 100;

    /// Clamp every value into its valid range and drop a blank docker host.
    pub fn normalized(mut self) -> Self {
        self.metrics_interval_secs = self
            .metrics_interval_secs
            .clamp(Self::MIN_INTERVAL_SECS, Self::MAX_INTERVAL_SECS);
        self.history_limit = self.history_limit.clamp(1, Self::MAX_HISTORY);
        self.cpu_alert_threshold = self.cpu_alert_threshold.clamp(1, 100);
        self.memory_alert_threshold = self.memory_alert_threshold.clamp(1, 100);
        self.disk_alert_threshold = self.disk_alert_threshold.clamp(1, 100);
        self.docker_host = self
            .docker_host
            .map(|h| h.trim().trim_end_matches('/').to_string())
            .filter(|h| !h.is_empty());
        self
    }

    /// Whether the simulated container driver should be used
    pub fn is_simulated(&self) -> bool {
        self.docker_host.is_none()
    }

    /// Label for the driver shown in the GUI
    pub fn driver_label(&self) -> &str {
        match &self.docker_host {
            Some(host) => host.as_str(),
            None => "Simulated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppSettings::default();
        assert!(config.is_simulated());
        assert_eq!(config.metrics_interval_secs, 30);
        assert_eq!(config.history_limit, 24);
        assert_eq!(config, config.clone().normalized());
    }

    #[test]
    fn normalized_clamps_out_of_range_values() {
        let config = AppSettings {
            docker_host: Some("  http://localhost:2375/ ".to_string()),
            metrics_interval_secs: 0,
            history_limit: 5_000,
            cpu_alert_threshold: 0,
            memory_alert_threshold: 250,
            disk_alert_threshold: 85,
        }
        .normalized();

        assert_eq!(config.docker_host.as_deref(), Some("http://localhost:2375"));
        assert_eq!(config.metrics_interval_secs, AppSettings::MIN_INTERVAL_SECS);
        assert_eq!(config.history_limit, AppSettings::MAX_HISTORY);
        assert_eq!(config.cpu_alert_threshold, 1);
        assert_eq!(config.memory_alert_threshold, 100);
    }

    #[test]
    fn blank_docker_host_means_simulated() {
        let config = AppSettings {
            docker_host: Some("   ".to_string()),
            ..Default::default()
        }
        .normalized();
        assert!(config.is_simulated());
        assert_eq!(config.driver_label(), "Simulated");
    }
}
