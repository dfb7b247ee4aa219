use crate::metrics::MetricsSnapshot;
use crate::notifications::Notification;
use crate::registry::Component;
use crate::utils::AppSettings;

/// Commands sent from GUI to Backend
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    // Components
    Refresh,
    SetEnabled { id: u32, enabled: bool },
    Restart(u32),
    FetchLogs(u32),

    // Metrics
    CollectMetrics,

    // Notifications
    MarkNotificationRead(u64),
    MarkAllNotificationsRead,
    DeleteNotification(u64),

    // Settings
    UpdateSettings(AppSettings),

    // System
    Shutdown,
}

/// Events sent from Backend to GUI
#[derive(Debug, Clone)]
pub enum BackendEvent {
    ComponentsUpdated(Vec<Component>),
    /// A start, stop or restart of this component finished, successfully or not
    ComponentSettled(u32),
    LogsLoaded {
        component_id: u32,
        result: Result<Vec<String>, String>,
    },
    MetricsUpdated(MetricsSnapshot),
    NotificationsUpdated(Vec<Notification>),
    SettingsUpdated(AppSettings),

    // System
    Error(String),
}
