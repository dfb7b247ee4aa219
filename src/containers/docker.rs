//! Docker Engine API driver
//!
//! Talks to a Docker daemon exposed over TCP (`dockerd -H tcp://127.0.0.1:2375`).
//! Containers are addressed by name, which matches the component name.

use crate::containers::logs::demux_log_stream;
use crate::containers::models::{ContainerInfo, ContainerStats};
use crate::containers::traits::ContainerService;
use crate::registry::ComponentStatus;
use crate::utils::DelocError;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Container driver backed by the Docker Engine HTTP API
pub struct DockerHttpService {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ContainerSummary {
    id: String,
    #[serde(default)]
    names: Vec<String>,
    #[serde(default)]
    image: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    status: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, Default, Deserialize)]
struct StatsBody {
    #[serde(default)]
    cpu_stats: CpuStats,
    #[serde(default)]
    precpu_stats: CpuStats,
    #[serde(default)]
    memory_stats: MemoryStats,
}

#[derive(Debug, Default, Deserialize)]
struct CpuStats {
    #[serde(default)]
    cpu_usage: CpuUsage,
    system_cpu_usage: Option<u64>,
    online_cpus: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct CpuUsage {
    #[serde(default)]
    total_usage: u64,
    #[serde(default)]
    percpu_usage: Option<Vec<u64>>,
}

#[derive(Debug, Default, Deserialize)]
struct MemoryStats {
    usage: Option<u64>,
}

impl DockerHttpService {
    /// Create a driver for the daemon at `base_url` (e.g. `http://localhost:2375`)
    pub fn new(base_url: &str) -> Result<Self, DelocError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        let base_url = base_url.trim_end_matches('/').to_string();
        info!("Using Docker Engine at {}", base_url);

        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn lifecycle(&self, name: &str, action: &str) -> Result<(), DelocError> {
        debug!("Docker {} {}", action, name);
        let response = self
            .client
            .post(self.url(&format!("/containers/{}/{}", name, action)))
            .send()
            .await?;

        match response.status() {
            // 304: container already in the requested state
            StatusCode::NO_CONTENT | StatusCode::NOT_MODIFIED => Ok(()),
            _ => Err(error_from_response(response, &format!("{} {}", action, name)).await),
        }
    }
}

async fn error_from_response(response: Response, context: &str) -> DelocError {
    let status = response.status();
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status.to_string(),
    };
    warn!("Docker request failed ({}): {}", context, message);
    DelocError::Container(format!("{}: {}", context, message))
}

impl ContainerSummary {
    fn into_info(self) -> ContainerInfo {
        let name = self
            .names
            .first()
            .map(|n| n.trim_start_matches('/').to_string())
            .unwrap_or_else(|| self.id.chars().take(12).collect());

        let status = ComponentStatus::from_docker_state(&self.state);
        let uptime = if status == ComponentStatus::Running {
            self.status
                .strip_prefix("Up ")
                .map(|s| s.to_string())
        } else {
            None
        };

        ContainerInfo {
            id: self.id,
            name,
            image: self.image,
            status,
            uptime,
        }
    }
}

impl StatsBody {
    fn into_stats(self) -> Option<ContainerStats> {
        let system = self.cpu_stats.system_cpu_usage?;
        let pre_system = self.precpu_stats.system_cpu_usage.unwrap_or(0);

        let cpu_delta = self
            .cpu_stats
            .cpu_usage
            .total_usage
            .saturating_sub(self.precpu_stats.cpu_usage.total_usage) as f64;
        let system_delta = system.saturating_sub(pre_system) as f64;

        let online_cpus = self
            .cpu_stats
            .online_cpus
            .or_else(|| {
                self.cpu_stats
                    .cpu_usage
                    .percpu_usage
                    .as_ref()
                    .map(|v| v.len() as u32)
            })
            .unwrap_or(1)
            .max(1) as f64;

        let cpu_percent = if system_delta > 0.0 {
            (cpu_delta / system_delta) * online_cpus * 100.0
        } else {
            0.0
        };

        let memory_mb = self.memory_stats.usage.unwrap_or(0) as f64 / (1024.0 * 1024.0);

        Some(ContainerStats {
            cpu_percent,
            memory_mb,
        })
    }
}

#[async_trait]
impl ContainerService for DockerHttpService {
    fn id(&self) -> &'static str {
        "docker-http"
    }

    async fn list_containers(&self) -> Result<Vec<ContainerInfo>, DelocError> {
        let response = self
            .client
            .get(self.url("/containers/json?all=true"))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, "list containers").await);
        }

        let summaries: Vec<ContainerSummary> = response.json().await?;
        debug!("Docker reported {} containers", summaries.len());
        Ok(summaries.into_iter().map(ContainerSummary::into_info).collect())
    }

    async fn start(&self, name: &str) -> Result<(), DelocError> {
        self.lifecycle(name, "start").await
    }

    async fn stop(&self, name: &str) -> Result<(), DelocError> {
        self.lifecycle(name, "stop").await
    }

    async fn restart(&self, name: &str) -> Result<(), DelocError> {
        self.lifecycle(name, "restart").await
    }

    async fn logs(&self, name: &str, tail: usize) -> Result<Vec<String>, DelocError> {
        let response = self
            .client
            .get(self.url(&format!(
                "/containers/{}/logs?stdout=true&stderr=true&timestamps=true&tail={}",
                name, tail
            )))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, &format!("logs {}", name)).await);
        }

        let body = response.bytes().await?;
        Ok(demux_log_stream(&body))
    }

    async fn stats(&self, name: &str) -> Result<Option<ContainerStats>, DelocError> {
        let response = self
            .client
            .get(self.url(&format!("/containers/{}/stats?stream=false", name)))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(error_from_response(response, &format!("stats {}", name)).await);
        }

        let body: StatsBody = response.json().await?;
        Ok(body.into_stats())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_strips_leading_slash_and_maps_state() {
        let summary: ContainerSummary = serde_json::from_value(json!({
            "Id": "8a3dcb7fe49a5c21d8e47f92b13a45fd",
            "Names": ["/spark"],
            "Image": "apache/spark:3.3.0",
            "State": "running",
            "Status": "Up 2 days"
        }))
        .unwrap();

        let info = summary.into_info();
        assert_eq!(info.name, "spark");
        assert_eq!(info.status, ComponentStatus::Running);
        assert_eq!(info.uptime.as_deref(), Some("2 days"));
    }

    #[test]
    fn exited_container_has_no_uptime() {
        let summary: ContainerSummary = serde_json::from_value(json!({
            "Id": "abc",
            "Names": ["/hive"],
            "State": "exited",
            "Status": "Exited (0) 3 hours ago"
        }))
        .unwrap();

        let info = summary.into_info();
        assert_eq!(info.status, ComponentStatus::Stopped);
        assert!(info.uptime.is_none());
        assert_eq!(info.image, "");
    }

    #[test]
    fn cpu_percent_uses_deltas_and_online_cpus() {
        let body: StatsBody = serde_json::from_value(json!({
            "cpu_stats": {
                "cpu_usage": { "total_usage": 300 },
                "system_cpu_usage": 2000,
                "online_cpus": 4
            },
            "precpu_stats": {
                "cpu_usage": { "total_usage": 200 },
                "system_cpu_usage": 1000
            },
            "memory_stats": { "usage": 104857600u64 }
        }))
        .unwrap();

        let stats = body.into_stats().unwrap();
        assert!((stats.cpu_percent - 40.0).abs() < 1e-9);
        assert!((stats.memory_mb - 100.0).abs() < 1e-9);
    }

    #[test]
    fn stats_without_system_usage_are_absent() {
        let body: StatsBody = serde_json::from_value(json!({
            "cpu_stats": { "cpu_usage": { "total_usage": 0 } }
        }))
        .unwrap();
        assert!(body.into_stats().is_none());
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let service = DockerHttpService::new("http://localhost:2375/").unwrap();
        assert_eq!(
            service.url("/containers/json"),
            "http://localhost:2375/containers/json"
        );
        assert_eq!(service.id(), "docker-http");
    }
}
