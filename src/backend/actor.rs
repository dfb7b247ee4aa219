use super::messages::{BackendCommand, BackendEvent};
use crate::containers::{driver_for, ContainerInfo, ContainerService, DEFAULT_LOG_TAIL};
use crate::database::{ComponentStateRecord, DatabaseManager};
use crate::metrics::{MetricsCollector, MetricsStore};
use crate::notifications::{
    component_notification, AlertPolicy, ComponentEvent, NewNotification, NotificationStore,
};
use crate::registry::{Component, ComponentRegistry, ComponentStatus, ComponentUpdate};
use crate::utils::{AppSettings, DelocError};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

/// Owns all DELoc state and serves the GUI over channels
pub struct BackendActor {
    receiver: mpsc::Receiver<BackendCommand>,
    sender: mpsc::Sender<BackendEvent>,

    registry: ComponentRegistry,
    containers: Arc<dyn ContainerService>,
    metrics: MetricsStore,
    collector: MetricsCollector,
    notifications: NotificationStore,
    alerts: AlertPolicy,
    database: Option<DatabaseManager>,
    settings: AppSettings,
}

impl BackendActor {
    /// Build the actor, restoring persisted state from `database` when present
    pub async fn new(
        settings: AppSettings,
        database: Option<DatabaseManager>,
        receiver: mpsc::Receiver<BackendCommand>,
        sender: mpsc::Sender<BackendEvent>,
    ) -> Result<Self, DelocError> {
        let settings = settings.normalized();

        let mut registry = ComponentRegistry::with_defaults();
        let mut notifications = NotificationStore::new();
        if let Some(db) = &database {
            restore_component_states(&mut registry, db).await;
            match db.load_notifications().await {
                Ok(saved) => notifications = NotificationStore::from_existing(saved),
                Err(e) => warn!("Failed to restore notifications: {}", e),
            }
            match db.max_notification_id().await {
                Ok(Some(max)) => notifications.reserve_ids_through(max),
                Ok(None) => {}
                Err(e) => warn!("Failed to read the highest notification id: {}", e),
            }
        }

        // The simulated driver mirrors the registry, so it is built after the restore
        let containers = driver_for(&settings, &registry.list())?;

        Ok(Self {
            receiver,
            sender,
            registry,
            containers,
            metrics: MetricsStore::new(),
            collector: MetricsCollector::default(),
            notifications,
            alerts: AlertPolicy::new(&settings),
            database,
            settings,
        })
    }

    /// Replace the container driver
    pub fn with_containers(mut self, containers: Arc<dyn ContainerService>) -> Self {
        self.containers = containers;
        self
    }

    /// Replace the metrics collector
    pub fn with_collector(mut self, collector: MetricsCollector) -> Self {
        self.collector = collector;
        self
    }

    pub async fn run(mut self) {
        info!("BackendActor started ({} driver)", self.containers.id());

        self.publish_settings().await;
        self.publish_notifications().await;
        self.refresh().await;
        self.collect_metrics().await;

        let mut period = self.metrics_period();
        let mut ticker = metrics_ticker(period);

        loop {
            tokio::select! {
                cmd = self.receiver.recv() => {
                    match cmd {
                        Some(BackendCommand::Shutdown) | None => {
                            info!("BackendActor shutting down");
                            break;
                        }
                        Some(cmd) => self.handle_command(cmd).await,
                    }

                    if self.metrics_period() != period {
                        period = self.metrics_period();
                        ticker = metrics_ticker(period);
                        debug!("Metrics interval is now {:?}", period);
                    }
                }
                _ = ticker.tick() => {
                    self.refresh().await;
                    self.collect_metrics().await;
                }
            }
        }
    }

    async fn handle_command(&mut self, cmd: BackendCommand) {
        match cmd {
            BackendCommand::Refresh => self.refresh().await,
            BackendCommand::SetEnabled { id, enabled } => {
                if let Err(e) = self.set_enabled(id, enabled).await {
                    self.send_error(e.to_string()).await;
                }
                self.settle(id).await;
            }
            BackendCommand::Restart(id) => {
                if let Err(e) = self.restart(id).await {
                    self.send_error(e.to_string()).await;
                }
                self.settle(id).await;
            }
            BackendCommand::FetchLogs(id) => {
                let result = self.fetch_logs(id).await.map_err(|e| e.to_string());
                let _ = self
                    .sender
                    .send(BackendEvent::LogsLoaded {
                        component_id: id,
                        result,
                    })
                    .await;
            }
            BackendCommand::CollectMetrics => self.collect_metrics().await,
            BackendCommand::MarkNotificationRead(id) => {
                if self.notifications.mark_read(id) {
                    if let Some(db) = &self.database {
                        if let Err(e) = db.mark_notification_read(id).await {
                            warn!("Failed to persist read notification {}: {}", id, e);
                        }
                    }
                }
                self.publish_notifications().await;
            }
            BackendCommand::MarkAllNotificationsRead => {
                self.notifications.mark_all_read();
                if let Some(db) = &self.database {
                    if let Err(e) = db.mark_all_notifications_read().await {
                        warn!("Failed to persist read notifications: {}", e);
                    }
                }
                self.publish_notifications().await;
            }
            BackendCommand::DeleteNotification(id) => {
                if self.notifications.delete(id) {
                    if let Some(db) = &self.database {
                        if let Err(e) = db.delete_notification(id).await {
                            warn!("Failed to delete notification {}: {}", id, e);
                        }
                    }
                }
                self.publish_notifications().await;
            }
            BackendCommand::UpdateSettings(settings) => self.update_settings(settings).await,
            BackendCommand::Shutdown => {}
        }
    }

    async fn set_enabled(&mut self, id: u32, enabled: bool) -> Result<(), DelocError> {
        let component = self.component(id)?;
        let verb = if enabled { "start" } else { "stop" };

        let result = if enabled {
            self.containers.start(&component.name).await
        } else {
            self.containers.stop(&component.name).await
        };
        if let Err(e) = result {
            error!("Failed to {} {}: {}", verb, component.name, e);
            return Err(DelocError::Container(format!(
                "Failed to {} component {}: {}",
                verb, component.display_name, e
            )));
        }

        if let Err(e) = self.sync_registry().await {
            warn!("Failed to sync after {} of {}: {}", verb, component.name, e);
        }

        let (status, event) = if enabled {
            (ComponentStatus::Running, ComponentEvent::Started)
        } else {
            (ComponentStatus::Stopped, ComponentEvent::Stopped)
        };
        let mut update = ComponentUpdate::status(status).enabled(enabled);
        if !enabled {
            update.uptime = Some(None);
        }
        self.finish_lifecycle(id, update, event).await
    }

    async fn restart(&mut self, id: u32) -> Result<(), DelocError> {
        let component = self.component(id)?;

        if let Err(e) = self.containers.restart(&component.name).await {
            error!("Failed to restart {}: {}", component.name, e);
            return Err(DelocError::Container(format!(
                "Failed to restart component {}: {}",
                component.display_name, e
            )));
        }

        if let Err(e) = self.sync_registry().await {
            warn!("Failed to sync after restart of {}: {}", component.name, e);
        }

        let update = ComponentUpdate::status(ComponentStatus::Running).enabled(true);
        self.finish_lifecycle(id, update, ComponentEvent::Restarted)
            .await
    }

    /// Apply the final state of a lifecycle change, then notify, persist and publish
    async fn finish_lifecycle(
        &mut self,
        id: u32,
        update: ComponentUpdate,
        event: ComponentEvent,
    ) -> Result<(), DelocError> {
        let component = self
            .registry
            .update(id, update)
            .ok_or(DelocError::ComponentNotFound(id))?;

        if let Some(notification) = component_notification(&component, event) {
            self.push_notification(notification).await;
        }
        self.persist_component(&component).await;

        self.publish_components().await;
        self.publish_notifications().await;
        Ok(())
    }

    async fn fetch_logs(&self, id: u32) -> Result<Vec<String>, DelocError> {
        let component = self.component(id)?;
        if component.container_id.is_none() {
            return Err(DelocError::ComponentNotRunning(component.display_name));
        }
        self.containers.logs(&component.name, DEFAULT_LOG_TAIL).await
    }

    async fn refresh(&mut self) {
        match self.sync_registry().await {
            Ok(true) => self.publish_notifications().await,
            Ok(false) => {}
            Err(e) => {
                warn!("Failed to refresh components: {}", e);
                self.send_error(format!("Failed to refresh components: {}", e))
                    .await;
            }
        }
        self.publish_components().await;
    }

    /// Pull container state into the registry. Returns whether any notification was raised.
    async fn sync_registry(&mut self) -> Result<bool, DelocError> {
        let containers = self.containers.list_containers().await?;
        let by_name: HashMap<&str, &ContainerInfo> =
            containers.iter().map(|c| (c.name.as_str(), c)).collect();

        let mut raised = false;
        for component in self.registry.list() {
            let update = match by_name.get(component.name.as_str()) {
                Some(info) => ComponentUpdate {
                    status: Some(info.status),
                    container_id: Some(Some(info.id.clone())),
                    uptime: Some(info.uptime.clone()),
                    ..Default::default()
                },
                None => ComponentUpdate {
                    status: Some(ComponentStatus::Stopped),
                    container_id: Some(None),
                    uptime: Some(None),
                    ..Default::default()
                },
            };

            let Some(updated) = self.registry.update(component.id, update) else {
                continue;
            };
            if updated.status != component.status {
                debug!(
                    "{} changed from {} to {}",
                    updated.name, component.status, updated.status
                );
                let event = ComponentEvent::StatusChanged(updated.status);
                if let Some(notification) = component_notification(&updated, event) {
                    self.push_notification(notification).await;
                    raised = true;
                }
            }
        }

        Ok(raised)
    }

    async fn collect_metrics(&mut self) {
        let components = self.registry.list();
        self.collector
            .collect(&mut self.metrics, &components, self.containers.as_ref())
            .await;

        let latest = self.metrics.latest_system();
        let alerts = self.alerts.evaluate(&latest);
        let raised = !alerts.is_empty();
        for alert in alerts {
            info!("{}: {}", alert.title, alert.message);
            self.push_notification(alert).await;
        }

        let snapshot = self.metrics.snapshot(self.settings.history_limit);
        let _ = self.sender.send(BackendEvent::MetricsUpdated(snapshot)).await;
        if raised {
            self.publish_notifications().await;
        }
    }

    async fn update_settings(&mut self, settings: AppSettings) {
        let mut settings = settings.normalized();

        if settings.docker_host != self.settings.docker_host {
            match driver_for(&settings, &self.registry.list()) {
                Ok(containers) => {
                    info!("Switched container driver to {}", settings.driver_label());
                    self.containers = containers;
                }
                Err(e) => {
                    error!("Failed to switch container driver: {}", e);
                    self.send_error(format!("Failed to switch container driver: {}", e))
                        .await;
                    settings.docker_host = self.settings.docker_host.clone();
                }
            }
        }

        if let Some(db) = &self.database {
            if let Err(e) = db.save_app_settings(&settings).await {
                warn!("Failed to save settings: {}", e);
            }
        }

        let driver_changed = settings.docker_host != self.settings.docker_host;
        self.alerts.update_thresholds(&settings);
        self.settings = settings;
        self.publish_settings().await;

        if driver_changed {
            self.refresh().await;
        }
    }

    fn component(&self, id: u32) -> Result<Component, DelocError> {
        self.registry
            .get(id)
            .cloned()
            .ok_or(DelocError::ComponentNotFound(id))
    }

    fn metrics_period(&self) -> Duration {
        Duration::from_secs(self.settings.metrics_interval_secs)
    }

    async fn push_notification(&mut self, notification: NewNotification) {
        let stored = self.notifications.add(notification);
        if let Some(db) = &self.database {
            if let Err(e) = db.save_notification(&stored).await {
                warn!("Failed to save notification {}: {}", stored.id, e);
            }
        }
    }

    async fn persist_component(&self, component: &Component) {
        let Some(db) = &self.database else {
            return;
        };
        let record = ComponentStateRecord {
            name: component.name.clone(),
            enabled: component.enabled,
            status: component.status,
            updated_at: Utc::now(),
        };
        if let Err(e) = db.save_component_state(&record).await {
            warn!("Failed to save state of {}: {}", component.name, e);
        }
    }

    async fn publish_components(&self) {
        let _ = self
            .sender
            .send(BackendEvent::ComponentsUpdated(self.registry.list()))
            .await;
    }

    async fn publish_notifications(&self) {
        let _ = self
            .sender
            .send(BackendEvent::NotificationsUpdated(
                self.notifications.all().to_vec(),
            ))
            .await;
    }

    async fn publish_settings(&self) {
        let _ = self
            .sender
            .send(BackendEvent::SettingsUpdated(self.settings.clone()))
            .await;
    }

    async fn settle(&self, id: u32) {
        let _ = self.sender.send(BackendEvent::ComponentSettled(id)).await;
    }

    async fn send_error(&self, message: String) {
        let _ = self.sender.send(BackendEvent::Error(message)).await;
    }
}

fn metrics_ticker(period: Duration) -> Interval {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker
}

async fn restore_component_states(registry: &mut ComponentRegistry, db: &DatabaseManager) {
    let states = match db.load_component_states().await {
        Ok(states) => states,
        Err(e) => {
            warn!("Failed to restore component states: {}", e);
            return;
        }
    };

    for state in states {
        let Some(id) = registry.find_by_name(&state.name).map(|c| c.id) else {
            debug!("Ignoring state for unknown component {}", state.name);
            continue;
        };
        let mut update = ComponentUpdate::status(state.status).enabled(state.enabled);
        if state.status == ComponentStatus::Stopped {
            update.uptime = Some(None);
        }
        registry.update(id, update);
    }
    info!("Restored component states");
}
