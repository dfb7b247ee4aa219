//! Bounded metrics history

use super::models::{ComponentMetrics, ComponentSample, MetricsSnapshot, SystemMetrics, SystemSample};
use std::collections::{HashMap, VecDeque};

/// Samples kept per series
pub const HISTORY_CAPACITY: usize = 100;

/// Ring buffer that drops its oldest entry once full
#[derive(Debug, Clone)]
pub struct MetricsHistory<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> MetricsHistory<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: T) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn latest(&self) -> Option<&T> {
        self.entries.back()
    }

    /// The newest `limit` entries, oldest first
    pub fn recent(&self, limit: usize) -> Vec<T> {
        let start = self.entries.len().saturating_sub(limit);
        self.entries.iter().skip(start).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Default for MetricsHistory<T> {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

/// System and per-component histories, with id assignment
#[derive(Debug, Clone)]
pub struct MetricsStore {
    system: MetricsHistory<SystemMetrics>,
    components: HashMap<u32, MetricsHistory<ComponentMetrics>>,
    next_system_id: u64,
    next_component_id: u64,
}

impl Default for MetricsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsStore {
    pub fn new() -> Self {
        Self {
            system: MetricsHistory::default(),
            components: HashMap::new(),
            next_system_id: 1,
            next_component_id: 1,
        }
    }

    pub fn record_system(&mut self, sample: SystemSample) -> SystemMetrics {
        let metrics = sample.with_id(self.next_system_id);
        self.next_system_id += 1;
        self.system.push(metrics.clone());
        metrics
    }

    pub fn record_component(&mut self, sample: ComponentSample) -> ComponentMetrics {
        let metrics = sample.with_id(self.next_component_id);
        self.next_component_id += 1;
        self.components
            .entry(metrics.component_id)
            .or_default()
            .push(metrics.clone());
        metrics
    }

    /// The newest system sample, recording the initial one if nothing was collected yet
    pub fn latest_system(&mut self) -> SystemMetrics {
        match self.system.latest() {
            Some(latest) => latest.clone(),
            None => self.record_system(SystemSample::initial()),
        }
    }

    pub fn system_history(&self, limit: usize) -> Vec<SystemMetrics> {
        self.system.recent(limit)
    }

    pub fn component_history(&self, component_id: u32, limit: usize) -> Vec<ComponentMetrics> {
        self.components
            .get(&component_id)
            .map(|h| h.recent(limit))
            .unwrap_or_default()
    }

    pub fn snapshot(&mut self, limit: usize) -> MetricsSnapshot {
        let latest = self.latest_system();
        MetricsSnapshot {
            latest: Some(latest),
            system_history: self.system_history(limit),
            component_history: self
                .components
                .iter()
                .map(|(id, history)| (*id, history.recent(limit)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;

    fn component_sample(component_id: u32, cpu: u32) -> ComponentSample {
        ComponentSample {
            component_id,
            timestamp: Utc::now(),
            cpu_usage: cpu,
            memory_usage_mb: 512.0,
            task_count: Some(10),
            network_io_mbps: 5,
            disk_io_mbps: 10,
        }
    }

    #[test]
    fn history_drops_oldest_when_full() {
        let mut history = MetricsHistory::new(3);
        for i in 0..5 {
            history.push(i);
        }
        assert_eq!(history.recent(10), vec![2, 3, 4]);
        assert_eq!(history.latest(), Some(&4));
    }

    #[test]
    fn recent_returns_newest_in_chronological_order() {
        let mut history = MetricsHistory::new(10);
        for i in 0..6 {
            history.push(i);
        }
        assert_eq!(history.recent(2), vec![4, 5]);
        assert!(history.recent(0).is_empty());
    }

    #[test]
    fn latest_system_seeds_initial_sample() {
        let mut store = MetricsStore::new();
        let latest = store.latest_system();
        assert_eq!(latest.id, 1);
        assert_eq!(latest.cpu_usage, 32);
        assert_eq!(latest.memory_total_gb, 16.0);
        assert_eq!(latest.disk_usage, 42);
        assert_eq!(latest.network_io_mbps, 24);

        // Asking again does not record another sample
        assert_eq!(store.latest_system().id, 1);
        assert_eq!(store.system_history(24).len(), 1);
    }

    #[test]
    fn component_histories_are_separate() {
        let mut store = MetricsStore::new();
        store.record_component(component_sample(1, 10));
        store.record_component(component_sample(2, 20));
        store.record_component(component_sample(1, 11));

        let first = store.component_history(1, 24);
        assert_eq!(first.iter().map(|m| m.cpu_usage).collect::<Vec<_>>(), vec![10, 11]);
        assert_eq!(first[1].id, 3);
        assert_eq!(store.component_history(2, 24).len(), 1);
        assert!(store.component_history(3, 24).is_empty());
    }

    #[test]
    fn snapshot_limits_every_series() {
        let mut store = MetricsStore::new();
        for _ in 0..30 {
            store.record_system(SystemSample::initial());
            store.record_component(component_sample(4, 1));
        }
        let snapshot = store.snapshot(24);
        assert_eq!(snapshot.system_history.len(), 24);
        assert_eq!(snapshot.component(4).len(), 24);
        assert_eq!(snapshot.latest.as_ref().map(|m| m.id), Some(30));
        assert_eq!(snapshot.previous().map(|m| m.id), Some(29));
    }

    proptest! {
        #[test]
        fn never_exceeds_capacity(capacity in 1usize..50, pushes in 0usize..200) {
            let mut history = MetricsHistory::new(capacity);
            for i in 0..pushes {
                history.push(i);
            }
            prop_assert_eq!(history.len(), pushes.min(capacity));
            if pushes > 0 {
                prop_assert_eq!(history.latest(), Some(&(pushes - 1)));
            }
        }
    }
}
