//! In-app notifications and system alerts

pub mod alerts;
pub mod models;
pub mod store;

pub use alerts::{component_notification, AlertPolicy, ComponentEvent, SYSTEM_SOURCE};
pub use models::{NewNotification, Notification, NotificationFilter, NotificationKind};
pub use store::NotificationStore;
