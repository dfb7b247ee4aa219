//! Main GUI application

use crate::backend::{BackendCommand, BackendEvent, BackendHandle};
use crate::gui::clipboard;
use crate::gui::components::sidebar;
use crate::gui::theme;
use crate::gui::views::{
    component_view, notifications_view, overview_view, settings_view, LogState, SettingsDraft,
};
use crate::metrics::MetricsSnapshot;
use crate::notifications::{NotificationFilter, NotificationStore};
use crate::registry::Component;
use crate::utils::AppSettings;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Application, Command, Element, Length, Subscription, Theme};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{debug, error, warn};

/// Everything the window needs from startup
pub struct DelocFlags {
    pub title: String,
    pub backend: BackendHandle,
    pub runtime: Arc<Runtime>,
    pub settings: AppSettings,
}

/// Main application state
pub struct DelocApp {
    title: String,
    backend: BackendHandle,
    // Keep the backend runtime alive as long as the window
    _runtime: Arc<Runtime>,

    // UI State
    current_view: View,
    status_message: Option<String>,
    logs: LogState,
    /// Components with a start, stop or restart in flight
    busy: HashSet<u32>,

    // Backend state mirrors
    components: Vec<Component>,
    metrics: MetricsSnapshot,
    notifications: NotificationStore,
    notification_filter: NotificationFilter,

    // Settings
    settings: AppSettings,
    settings_draft: SettingsDraft,
}

/// Application view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Overview,
    Component(u32),
    Notifications,
    Settings,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // View navigation
    Navigate(View),

    // Components
    ToggleComponent(u32, bool),
    RestartComponent(u32),
    RefreshComponents,
    RefreshLogs(u32),
    CopyLogs,
    OpenWebUi(String),

    // Notifications
    NotificationFilterChanged(NotificationFilter),
    MarkNotificationRead(u64),
    MarkAllNotificationsRead,
    DeleteNotification(u64),

    // Settings
    DockerHostChanged(String),
    IntervalChanged(u32),
    HistoryLimitChanged(u32),
    CpuThresholdChanged(u32),
    MemoryThresholdChanged(u32),
    DiskThresholdChanged(u32),
    SaveSettings,

    // System
    DismissStatus,
    Tick, // Drains backend events
    Noop,
}

impl Application for DelocApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = DelocFlags;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        let settings_draft = SettingsDraft::from(&flags.settings);
        let app = Self {
            title: flags.title,
            backend: flags.backend,
            _runtime: flags.runtime,
            current_view: View::Overview,
            status_message: None,
            logs: LogState::Idle,
            busy: HashSet::new(),
            components: Vec::new(),
            metrics: MetricsSnapshot::default(),
            notifications: NotificationStore::new(),
            notification_filter: NotificationFilter::All,
            settings: flags.settings,
            settings_draft,
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::Navigate(view) => {
                self.current_view = view;
                match view {
                    View::Component(id) => {
                        self.logs = LogState::Loading;
                        self.send(BackendCommand::FetchLogs(id));
                    }
                    View::Settings => {
                        self.settings_draft = SettingsDraft::from(&self.settings);
                    }
                    View::Overview | View::Notifications => {}
                }
            }

            Message::ToggleComponent(id, enabled) => {
                self.busy.insert(id);
                self.send(BackendCommand::SetEnabled { id, enabled });
            }
            Message::RestartComponent(id) => {
                self.busy.insert(id);
                self.send(BackendCommand::Restart(id));
            }
            Message::RefreshComponents => self.send(BackendCommand::Refresh),
            Message::RefreshLogs(id) => {
                self.logs = LogState::Loading;
                self.send(BackendCommand::FetchLogs(id));
            }
            Message::CopyLogs => {
                if let Some(lines) = self.logs.lines() {
                    match clipboard::copy_log_lines(lines) {
                        Ok(status) => self.status_message = Some(status),
                        Err(e) => {
                            warn!("{}", e);
                            self.status_message = Some(e);
                        }
                    }
                }
            }
            Message::OpenWebUi(url) => {
                if let Err(e) = open::that(&url) {
                    warn!("Failed to open {}: {}", url, e);
                    self.status_message = Some(format!("Failed to open {}: {}", url, e));
                }
            }

            Message::NotificationFilterChanged(filter) => self.notification_filter = filter,
            Message::MarkNotificationRead(id) => {
                self.send(BackendCommand::MarkNotificationRead(id))
            }
            Message::MarkAllNotificationsRead => {
                self.send(BackendCommand::MarkAllNotificationsRead)
            }
            Message::DeleteNotification(id) => self.send(BackendCommand::DeleteNotification(id)),

            Message::DockerHostChanged(host) => self.settings_draft.docker_host = host,
            Message::IntervalChanged(secs) => self.settings_draft.metrics_interval_secs = secs,
            Message::HistoryLimitChanged(limit) => self.settings_draft.history_limit = limit,
            Message::CpuThresholdChanged(value) => self.settings_draft.cpu_alert_threshold = value,
            Message::MemoryThresholdChanged(value) => {
                self.settings_draft.memory_alert_threshold = value
            }
            Message::DiskThresholdChanged(value) => {
                self.settings_draft.disk_alert_threshold = value
            }
            Message::SaveSettings => match self.settings_draft.to_settings() {
                Ok(settings) => {
                    self.send(BackendCommand::UpdateSettings(settings));
                    self.status_message = Some("Settings saved".to_string());
                }
                Err(e) => self.status_message = Some(e.to_string()),
            },

            Message::DismissStatus => self.status_message = None,
            Message::Tick => {
                for event in self.backend.drain_events() {
                    self.apply_event(event);
                }
            }
            Message::Noop => {}
        }

        Command::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match self.current_view {
            View::Overview => overview_view(&self.components, &self.metrics, &self.busy),
            View::Component(id) => match self.components.iter().find(|c| c.id == id) {
                Some(component) => component_view(
                    component,
                    self.metrics.component(id),
                    &self.logs,
                    self.busy.contains(&id),
                ),
                None => text("Loading component...")
                    .size(16)
                    .style(theme::TEXT_SECONDARY)
                    .into(),
            },
            View::Notifications => {
                notifications_view(&self.notifications, self.notification_filter)
            }
            View::Settings => {
                let dirty = self.settings_draft != SettingsDraft::from(&self.settings);
                settings_view(&self.settings_draft, &self.settings, dirty)
            }
        };

        let mut main = column![].spacing(16).width(Length::Fill).height(Length::Fill);
        if let Some(message) = &self.status_message {
            main = main.push(
                container(
                    row![
                        text(message).size(13),
                        Space::with_width(Length::Fill),
                        button(text("Dismiss").size(12))
                            .on_press(Message::DismissStatus)
                            .padding([4, 10])
                            .style(iced::theme::Button::Custom(Box::new(
                                theme::SecondaryButton
                            ))),
                    ]
                    .align_items(Alignment::Center),
                )
                .padding([8, 12])
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(theme::CardContainer))),
            );
        }
        main = main.push(content);

        let unread = self.notifications.unread_count();
        let layout = row![
            sidebar(&self.current_view, &self.components, unread),
            container(main)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding([24, 8, 8, 24]),
        ];

        container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(
                theme::MainGradientContainer,
            )))
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        iced::time::every(Duration::from_millis(100)).map(|_| Message::Tick)
    }

    fn theme(&self) -> Self::Theme {
        Theme::Dark
    }
}

impl DelocApp {
    fn send(&mut self, command: BackendCommand) {
        debug!("GUI -> backend: {:?}", command);
        if let Err(e) = self.backend.send(command) {
            error!("{}", e);
            self.status_message = Some(e.to_string());
        }
    }

    fn apply_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::ComponentsUpdated(components) => self.components = components,
            BackendEvent::ComponentSettled(id) => {
                self.busy.remove(&id);
            }
            BackendEvent::LogsLoaded {
                component_id,
                result,
            } => {
                // Drop logs for a page the user already left
                if self.current_view == View::Component(component_id) {
                    self.logs = match result {
                        Ok(lines) => LogState::Loaded(lines),
                        Err(e) => LogState::Failed(e),
                    };
                }
            }
            BackendEvent::MetricsUpdated(snapshot) => self.metrics = snapshot,
            BackendEvent::NotificationsUpdated(notifications) => {
                self.notifications = NotificationStore::from_existing(notifications)
            }
            BackendEvent::SettingsUpdated(settings) => {
                self.settings_draft = SettingsDraft::from(&settings);
                self.settings = settings;
            }
            BackendEvent::Error(message) => {
                error!("Backend error: {}", message);
                self.status_message = Some(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ComponentRegistry;
    use tokio::sync::mpsc;

    fn app() -> (
        DelocApp,
        mpsc::Receiver<BackendCommand>,
        mpsc::Sender<BackendEvent>,
    ) {
        let (backend, commands, events) = BackendHandle::channel();
        let runtime = Arc::new(Runtime::new().unwrap());
        let (app, _) = DelocApp::new(DelocFlags {
            title: "DELoc".to_string(),
            backend,
            runtime,
            settings: AppSettings::default(),
        });
        (app, commands, events)
    }

    #[test]
    fn opening_a_component_requests_its_logs() {
        let (mut app, mut commands, _events) = app();
        let _ = app.update(Message::Navigate(View::Component(3)));

        assert_eq!(app.current_view, View::Component(3));
        assert_eq!(app.logs, LogState::Loading);
        assert_eq!(commands.try_recv().unwrap(), BackendCommand::FetchLogs(3));
    }

    #[test]
    fn tick_applies_backend_events() {
        let (mut app, _commands, events) = app();
        let components = ComponentRegistry::with_defaults().list();
        events
            .try_send(BackendEvent::ComponentsUpdated(components.clone()))
            .unwrap();
        events
            .try_send(BackendEvent::Error("Failed to start component".to_string()))
            .unwrap();

        let _ = app.update(Message::Tick);
        assert_eq!(app.components, components);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Failed to start component")
        );
    }

    #[test]
    fn stale_logs_are_ignored() {
        let (mut app, _commands, events) = app();
        let _ = app.update(Message::Navigate(View::Component(1)));
        let _ = app.update(Message::Navigate(View::Overview));
        events
            .try_send(BackendEvent::LogsLoaded {
                component_id: 1,
                result: Ok(vec!["line".to_string()]),
            })
            .unwrap();

        let _ = app.update(Message::Tick);
        assert_eq!(app.logs, LogState::Loading);
    }

    #[test]
    fn invalid_settings_are_not_sent() {
        let (mut app, mut commands, _events) = app();
        let _ = app.update(Message::DockerHostChanged("localhost:2375".to_string()));
        let _ = app.update(Message::SaveSettings);

        assert!(commands.try_recv().is_err());
        assert!(app
            .status_message
            .as_deref()
            .unwrap()
            .contains("http://"));
    }

    #[test]
    fn toggling_marks_component_busy_until_it_settles() {
        let (mut app, mut commands, events) = app();
        let _ = app.update(Message::ToggleComponent(2, false));
        let _ = app.update(Message::RestartComponent(5));
        assert!(app.busy.contains(&2));
        assert_eq!(
            commands.try_recv().unwrap(),
            BackendCommand::SetEnabled {
                id: 2,
                enabled: false
            }
        );

        // A periodic refresh queued earlier does not end the operation
        events
            .try_send(BackendEvent::ComponentsUpdated(Vec::new()))
            .unwrap();
        let _ = app.update(Message::Tick);
        assert!(app.busy.contains(&2));

        events.try_send(BackendEvent::ComponentSettled(2)).unwrap();
        let _ = app.update(Message::Tick);
        assert!(!app.busy.contains(&2));
        assert!(app.busy.contains(&5));
    }

    #[test]
    fn published_notifications_drive_unread_count_and_filter() {
        use crate::notifications::{NewNotification, NotificationKind};

        let (mut app, _commands, events) = app();
        let mut backend_store = NotificationStore::new();
        let warning = backend_store.add(NewNotification::new(
            NotificationKind::Warning,
            "System Alert: CPU",
            "CPU usage is at 95%, exceeding threshold of 80%",
            "System",
        ));
        backend_store.add(NewNotification::new(
            NotificationKind::Success,
            "Component Started",
            "Apache Hive is now running",
            "Apache Hive",
        ));
        backend_store.mark_read(warning.id);

        events
            .try_send(BackendEvent::NotificationsUpdated(
                backend_store.all().to_vec(),
            ))
            .unwrap();
        let _ = app.update(Message::Tick);

        assert_eq!(app.notifications.unread_count(), 1);
        let warnings = app
            .notifications
            .filtered(NotificationFilter::Kind(NotificationKind::Warning));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].id, warning.id);
    }
}
