//! Periodic metrics collection
//!
//! Host metrics come from a [`SystemSampler`]. Component metrics come from the container
//! driver when it reports stats, otherwise they fluctuate around the component's last
//! known usage.

use super::history::MetricsStore;
use super::models::{ComponentSample, SystemSample};
use crate::containers::{ContainerService, ContainerStats};
use crate::registry::{Component, ComponentStatus};
use crate::utils::parse_memory_mb;
use chrono::Utc;
use futures::future::join_all;
use rand::Rng;
use tracing::{debug, warn};

/// Source of host-level samples
pub trait SystemSampler: Send + Sync {
    fn sample(&self) -> SystemSample;
}

/// Random host samples in the ranges a mid-sized workstation shows
#[derive(Debug, Clone, Default)]
pub struct SimulatedSystemSampler;

impl SystemSampler for SimulatedSystemSampler {
    fn sample(&self) -> SystemSample {
        let mut rng = rand::thread_rng();
        // One decimal place, like "8.4 GB"
        let memory_used_gb = (rng.gen_range(5.0..11.0_f64) * 10.0).round() / 10.0;

        SystemSample {
            timestamp: Utc::now(),
            cpu_usage: rng.gen_range(20..60),
            memory_used_gb,
            memory_total_gb: 16.0,
            disk_usage: rng.gen_range(30..60),
            disk_total_gb: 512.0,
            network_io_mbps: rng.gen_range(15..35),
        }
    }
}

/// Collects one round of system and component metrics into a [`MetricsStore`]
pub struct MetricsCollector {
    sampler: Box<dyn SystemSampler>,
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new(Box::new(SimulatedSystemSampler))
    }
}

impl MetricsCollector {
    pub fn new(sampler: Box<dyn SystemSampler>) -> Self {
        Self { sampler }
    }

    /// Sample the host and every component that is not stopped
    pub async fn collect(
        &self,
        store: &mut MetricsStore,
        components: &[Component],
        containers: &dyn ContainerService,
    ) {
        store.record_system(self.sampler.sample());

        let live: Vec<&Component> = components
            .iter()
            .filter(|c| c.status != ComponentStatus::Stopped)
            .collect();

        let stats = join_all(live.iter().map(|c| containers.stats(&c.name))).await;

        for (component, stats) in live.into_iter().zip(stats) {
            let stats = match stats {
                Ok(stats) => stats,
                Err(e) => {
                    warn!("Stats unavailable for {}: {}", component.name, e);
                    None
                }
            };
            store.record_component(component_sample(component, stats));
        }

        debug!("Collected metrics for {} components", components.len());
    }
}

/// Build a sample from driver stats, or simulate one from the component's last known usage
pub fn component_sample(component: &Component, stats: Option<ContainerStats>) -> ComponentSample {
    let mut rng = rand::thread_rng();

    let (cpu_usage, memory_usage_mb) = match stats {
        Some(stats) => (
            stats.cpu_percent.round().max(0.0) as u32,
            stats.memory_mb,
        ),
        None => {
            let cpu = match component.cpu_usage {
                Some(base) => (base as f64 + rng.gen_range(-3.0..3.0)).floor(),
                None => rng.gen_range(0..20) as f64,
            };
            let memory = component
                .memory_usage
                .as_deref()
                .and_then(parse_memory_mb)
                .unwrap_or_else(|| rng.gen_range(0.5..2.5) * 1024.0);
            (cpu.max(1.0) as u32, memory)
        }
    };

    ComponentSample {
        component_id: component.id,
        timestamp: Utc::now(),
        cpu_usage,
        memory_usage_mb,
        task_count: Some(rng.gen_range(10..60)),
        network_io_mbps: rng.gen_range(5..15),
        disk_io_mbps: rng.gen_range(10..30),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::SimulatedContainerService;
    use crate::registry::ComponentRegistry;

    #[test]
    fn simulated_samples_stay_in_range() {
        let sampler = SimulatedSystemSampler;
        for _ in 0..100 {
            let s = sampler.sample();
            assert!((20..60).contains(&s.cpu_usage));
            assert!(s.memory_used_gb >= 5.0 && s.memory_used_gb <= 11.0);
            assert!((30..60).contains(&s.disk_usage));
            assert!((15..35).contains(&s.network_io_mbps));
        }
    }

    #[test]
    fn fallback_sample_fluctuates_around_baseline() {
        let registry = ComponentRegistry::with_defaults();
        let spark = registry.find_by_name("spark").unwrap();
        for _ in 0..50 {
            let sample = component_sample(spark, None);
            assert!((9..=14).contains(&sample.cpu_usage), "cpu {}", sample.cpu_usage);
            assert!((sample.memory_usage_mb - 1228.8).abs() < 1e-6);
            let tasks = sample.task_count.unwrap();
            assert!((10..60).contains(&tasks));
        }
    }

    #[test]
    fn fallback_cpu_never_drops_below_one() {
        let mut registry = ComponentRegistry::with_defaults();
        let hive_id = registry.find_by_name("hive").unwrap().id;
        let hive = registry
            .update(
                hive_id,
                crate::registry::ComponentUpdate::status(ComponentStatus::Running),
            )
            .unwrap();
        for _ in 0..50 {
            assert!(component_sample(&hive, None).cpu_usage >= 1);
        }
    }

    #[test]
    fn driver_stats_win_over_simulation() {
        let registry = ComponentRegistry::with_defaults();
        let kafka = registry.find_by_name("kafka").unwrap();
        let sample = component_sample(
            kafka,
            Some(ContainerStats {
                cpu_percent: 41.6,
                memory_mb: 300.0,
            }),
        );
        assert_eq!(sample.cpu_usage, 42);
        assert_eq!(sample.memory_usage_mb, 300.0);
    }

    #[tokio::test]
    async fn collect_skips_stopped_components() {
        let registry = ComponentRegistry::with_defaults();
        let components = registry.list();
        let containers = SimulatedContainerService::from_components(&components);
        let collector = MetricsCollector::default();
        let mut store = MetricsStore::new();

        collector.collect(&mut store, &components, &containers).await;

        assert_eq!(store.system_history(24).len(), 1);
        let hive = registry.find_by_name("hive").unwrap();
        assert!(store.component_history(hive.id, 24).is_empty());
        let spark = registry.find_by_name("spark").unwrap();
        assert_eq!(store.component_history(spark.id, 24).len(), 1);
    }
}
