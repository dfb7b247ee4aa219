//! System and component metrics

pub mod collector;
pub mod history;
pub mod models;

pub use collector::{component_sample, MetricsCollector, SimulatedSystemSampler, SystemSampler};
pub use history::{MetricsHistory, MetricsStore, HISTORY_CAPACITY};
pub use models::{
    ComponentMetrics, ComponentSample, MetricsSnapshot, SystemMetrics, SystemSample,
};
