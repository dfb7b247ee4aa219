//! Threshold alerts and component lifecycle notifications

use super::models::{NewNotification, NotificationKind};
use crate::metrics::SystemMetrics;
use crate::registry::{Component, ComponentStatus};
use crate::utils::AppSettings;

pub const SYSTEM_SOURCE: &str = "System";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Metric {
    Cpu,
    Memory,
    Disk,
}

impl Metric {
    fn label(&self) -> &'static str {
        match self {
            Metric::Cpu => "CPU",
            Metric::Memory => "Memory",
            Metric::Disk => "Disk",
        }
    }
}

/// Edge-triggered threshold checks over system samples.
///
/// Each metric raises one warning when it climbs over its threshold and one
/// success when it falls back under it. Nothing is raised in between.
#[derive(Debug, Clone)]
pub struct AlertPolicy {
    cpu_threshold: u32,
    memory_threshold: u32,
    disk_threshold: u32,
    cpu_alerting: bool,
    memory_alerting: bool,
    disk_alerting: bool,
}

impl AlertPolicy {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            cpu_threshold: settings.cpu_alert_threshold,
            memory_threshold: settings.memory_alert_threshold,
            disk_threshold: settings.disk_alert_threshold,
            cpu_alerting: false,
            memory_alerting: false,
            disk_alerting: false,
        }
    }

    /// Adopt new thresholds. Active alerts stay active until the next evaluation.
    pub fn update_thresholds(&mut self, settings: &AppSettings) {
        self.cpu_threshold = settings.cpu_alert_threshold;
        self.memory_threshold = settings.memory_alert_threshold;
        self.disk_threshold = settings.disk_alert_threshold;
    }

    pub fn evaluate(&mut self, sample: &SystemMetrics) -> Vec<NewNotification> {
        let memory_value = format!("{:.1} GB", sample.memory_used_gb);
        let checks = [
            (
                Metric::Cpu,
                sample.cpu_usage as f64,
                format!("{}%", sample.cpu_usage),
            ),
            (Metric::Memory, sample.memory_percent(), memory_value),
            (
                Metric::Disk,
                sample.disk_usage as f64,
                format!("{}%", sample.disk_usage),
            ),
        ];

        let mut raised = Vec::new();
        for (metric, usage, display) in checks {
            let threshold = self.threshold(metric);
            let over = usage > threshold as f64;
            let alerting = self.alerting_mut(metric);

            if over && !*alerting {
                *alerting = true;
                raised.push(NewNotification::new(
                    NotificationKind::Warning,
                    format!("System Alert: {}", metric.label()),
                    format!(
                        "{} usage is at {}, exceeding threshold of {}%",
                        metric.label(),
                        display,
                        threshold
                    ),
                    SYSTEM_SOURCE,
                ));
            } else if !over && *alerting {
                *alerting = false;
                raised.push(NewNotification::new(
                    NotificationKind::Success,
                    format!("System Alert: {}", metric.label()),
                    format!("{} usage normalized at {}", metric.label(), display),
                    SYSTEM_SOURCE,
                ));
            }
        }
        raised
    }

    fn threshold(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Cpu => self.cpu_threshold,
            Metric::Memory => self.memory_threshold,
            Metric::Disk => self.disk_threshold,
        }
    }

    fn alerting_mut(&mut self, metric: Metric) -> &mut bool {
        match metric {
            Metric::Cpu => &mut self.cpu_alerting,
            Metric::Memory => &mut self.memory_alerting,
            Metric::Disk => &mut self.disk_alerting,
        }
    }
}

/// Lifecycle changes that produce a component notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentEvent {
    Started,
    Stopped,
    Restarted,
    /// Status observed during a refresh
    StatusChanged(ComponentStatus),
}

pub fn component_notification(
    component: &Component,
    event: ComponentEvent,
) -> Option<NewNotification> {
    let name = &component.display_name;
    let (kind, title, message) = match event {
        ComponentEvent::Started => (
            NotificationKind::Success,
            "Component Started",
            format!("{} is now running", name),
        ),
        ComponentEvent::Stopped => (
            NotificationKind::Info,
            "Component Stopped",
            format!("{} has been stopped", name),
        ),
        ComponentEvent::Restarted => (
            NotificationKind::Success,
            "Component Restarted",
            format!("{} has been restarted", name),
        ),
        ComponentEvent::StatusChanged(ComponentStatus::Warning) => (
            NotificationKind::Warning,
            "Component Warning",
            format!("{} is experiencing issues", name),
        ),
        ComponentEvent::StatusChanged(ComponentStatus::Error) => (
            NotificationKind::Error,
            "Error Detected",
            format!("{} encountered an error", name),
        ),
        ComponentEvent::StatusChanged(_) => return None,
    };
    Some(NewNotification::new(kind, title, message, name.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SystemSample;
    use crate::registry::default_components;

    fn sample(cpu: u32, memory_gb: f64, disk: u32) -> SystemMetrics {
        let mut s = SystemSample::initial();
        s.cpu_usage = cpu;
        s.memory_used_gb = memory_gb;
        s.memory_total_gb = 16.0;
        s.disk_usage = disk;
        s.with_id(1)
    }

    #[test]
    fn cpu_alert_is_edge_triggered() {
        let mut policy = AlertPolicy::new(&AppSettings::default());

        let raised = policy.evaluate(&sample(82, 8.0, 40));
        assert_eq!(raised.len(), 1);
        assert_eq!(raised[0].kind, NotificationKind::Warning);
        assert_eq!(raised[0].title, "System Alert: CPU");
        assert_eq!(
            raised[0].message,
            "CPU usage is at 82%, exceeding threshold of 80%"
        );
        assert_eq!(raised[0].source, SYSTEM_SOURCE);

        assert!(policy.evaluate(&sample(95, 8.0, 40)).is_empty());

        let recovered = policy.evaluate(&sample(50, 8.0, 40));
        assert_eq!(recovered.len(), 1);
        assert_eq!(recovered[0].kind, NotificationKind::Success);
        assert_eq!(recovered[0].message, "CPU usage normalized at 50%");

        assert!(policy.evaluate(&sample(50, 8.0, 40)).is_empty());
    }

    #[test]
    fn memory_alert_uses_percentage_and_reports_gigabytes() {
        let mut policy = AlertPolicy::new(&AppSettings::default());
        let raised = policy.evaluate(&sample(10, 15.2, 40));
        assert_eq!(raised.len(), 1);
        assert_eq!(raised[0].title, "System Alert: Memory");
        assert_eq!(
            raised[0].message,
            "Memory usage is at 15.2 GB, exceeding threshold of 90%"
        );
    }

    #[test]
    fn thresholds_follow_settings() {
        let mut policy = AlertPolicy::new(&AppSettings::default());
        assert!(policy.evaluate(&sample(70, 8.0, 40)).is_empty());

        policy.update_thresholds(&AppSettings {
            cpu_alert_threshold: 60,
            disk_alert_threshold: 30,
            ..Default::default()
        });
        let raised = policy.evaluate(&sample(70, 8.0, 40));
        let titles: Vec<_> = raised.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["System Alert: CPU", "System Alert: Disk"]);
    }

    #[test]
    fn component_notifications_use_display_name() {
        let spark = default_components()
            .into_iter()
            .find(|c| c.name == "spark")
            .map(|c| c.into_component(3))
            .unwrap();

        let started = component_notification(&spark, ComponentEvent::Started).unwrap();
        assert_eq!(started.kind, NotificationKind::Success);
        assert_eq!(started.title, "Component Started");
        assert_eq!(started.message, "Apache Spark is now running");
        assert_eq!(started.source, "Apache Spark");

        let stopped = component_notification(&spark, ComponentEvent::Stopped).unwrap();
        assert_eq!(stopped.kind, NotificationKind::Info);

        let failed = component_notification(
            &spark,
            ComponentEvent::StatusChanged(ComponentStatus::Error),
        )
        .unwrap();
        assert_eq!(failed.kind, NotificationKind::Error);

        assert!(component_notification(
            &spark,
            ComponentEvent::StatusChanged(ComponentStatus::Running)
        )
        .is_none());
    }
}
