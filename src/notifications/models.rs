//! Notification types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Info,
        NotificationKind::Success,
        NotificationKind::Warning,
        NotificationKind::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == value)
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NotificationKind::Info => "Info",
            NotificationKind::Success => "Success",
            NotificationKind::Warning => "Warning",
            NotificationKind::Error => "Error",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    /// "System" or the display name of a component
    pub source: String,
}

/// A notification before the store stamps it
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub source: String,
}

impl NewNotification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
            source: source.into(),
        }
    }
}

/// Which notifications a list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Kind(NotificationKind),
}

impl NotificationFilter {
    pub const OPTIONS: [NotificationFilter; 6] = [
        NotificationFilter::All,
        NotificationFilter::Unread,
        NotificationFilter::Kind(NotificationKind::Info),
        NotificationFilter::Kind(NotificationKind::Success),
        NotificationFilter::Kind(NotificationKind::Warning),
        NotificationFilter::Kind(NotificationKind::Error),
    ];

    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Unread => !notification.is_read,
            NotificationFilter::Kind(kind) => notification.kind == *kind,
        }
    }
}

impl fmt::Display for NotificationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationFilter::All => f.write_str("All"),
            NotificationFilter::Unread => f.write_str("Unread"),
            NotificationFilter::Kind(kind) => kind.fmt(f),
        }
    }
}
