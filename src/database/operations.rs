//! Database CRUD operations

use crate::notifications::{Notification, NotificationKind};
use crate::registry::ComponentStatus;
use crate::utils::AppSettings;
use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::{Pool, Row, Sqlite};
use tracing::{debug, warn};

const APP_SETTINGS_KEY: &str = "app_settings";

/// Database manager
#[derive(Clone)]
pub struct DatabaseManager {
    pool: Pool<Sqlite>,
}

impl DatabaseManager {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Save setting
    pub async fn save_setting(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query("INSERT OR REPLACE INTO settings (key, value) VALUES (?, ?)")
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?;

        debug!("Saved setting: {} = {}", key, value);
        Ok(())
    }

    /// Get setting
    pub async fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT value FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get("value")))
    }

    pub async fn save_app_settings(&self, settings: &AppSettings) -> Result<()> {
        let json = serde_json::to_string(settings)?;
        self.save_setting(APP_SETTINGS_KEY, &json).await
    }

    /// Stored settings, or `None` if nothing (or nothing readable) was saved
    pub async fn load_app_settings(&self) -> Result<Option<AppSettings>> {
        let Some(json) = self.get_setting(APP_SETTINGS_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<AppSettings>(&json) {
            Ok(settings) => Ok(Some(settings.normalized())),
            Err(e) => {
                warn!("Ignoring unreadable stored settings: {}", e);
                Ok(None)
            }
        }
    }

    pub async fn save_component_state(&self, state: &ComponentStateRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO component_state (name, enabled, status, updated_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&state.name)
        .bind(state.enabled)
        .bind(state.status.as_str())
        .bind(state.updated_at)
        .execute(&self.pool)
        .await?;

        debug!("Saved component state: {} ({})", state.name, state.status);
        Ok(())
    }

    pub async fn load_component_states(&self) -> Result<Vec<ComponentStateRecord>> {
        let rows = sqlx::query("SELECT * FROM component_state ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        let mut states = Vec::with_capacity(rows.len());
        for row in rows {
            let status: String = row.get("status");
            let Some(status) = ComponentStatus::parse(&status) else {
                warn!("Skipping component state with unknown status: {}", status);
                continue;
            };
            states.push(ComponentStateRecord {
                name: row.get("name"),
                enabled: row.get("enabled"),
                status,
                updated_at: row.get("updated_at"),
            });
        }

        Ok(states)
    }

    pub async fn save_notification(&self, notification: &Notification) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO notifications
            (id, title, message, kind, source, created_at, is_read)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(notification.id as i64)
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(notification.kind.as_str())
        .bind(&notification.source)
        .bind(notification.timestamp)
        .bind(notification.is_read)
        .execute(&self.pool)
        .await?;

        debug!("Saved notification: {}", notification.id);
        Ok(())
    }

    /// Newest first
    pub async fn load_notifications(&self) -> Result<Vec<Notification>> {
        let rows = sqlx::query("SELECT * FROM notifications ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await?;

        let mut notifications = Vec::with_capacity(rows.len());
        for row in rows {
            let kind: String = row.get("kind");
            let Some(kind) = NotificationKind::parse(&kind) else {
                warn!(
                    "Skipping notification {} with unknown kind: {}",
                    row.get::<i64, _>("id"),
                    kind
                );
                continue;
            };
            notifications.push(row_into_notification(row, kind));
        }

        Ok(notifications)
    }

    /// Highest id ever stored, including rows that fail to load
    pub async fn max_notification_id(&self) -> Result<Option<u64>> {
        let max: Option<i64> = sqlx::query_scalar("SELECT MAX(id) FROM notifications")
            .fetch_one(&self.pool)
            .await?;
        Ok(max.map(|id| id.max(0) as u64))
    }

    pub async fn mark_notification_read(&self, id: u64) -> Result<()> {
        sqlx::query("UPDATE notifications SET is_read = TRUE WHERE id = ?")
            .bind(id as i64)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn mark_all_notifications_read(&self) -> Result<()> {
        sqlx::query("UPDATE notifications SET is_read = TRUE")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn delete_notification(&self, id: u64) -> Result<()> {
        sqlx::query("DELETE FROM notifications WHERE id = ?")
            .bind(id as i64)
            .execute(&self.pool)
            .await?;

        debug!("Deleted notification: {}", id);
        Ok(())
    }
}

/// Persisted on/off state of a component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentStateRecord {
    pub name: String,
    pub enabled: bool,
    pub status: ComponentStatus,
    pub updated_at: DateTime<Utc>,
}

fn row_into_notification(row: sqlx::sqlite::SqliteRow, kind: NotificationKind) -> Notification {
    Notification {
        id: row.get::<i64, _>("id") as u64,
        title: row.get("title"),
        message: row.get("message"),
        kind,
        timestamp: row.get("created_at"),
        is_read: row.get("is_read"),
        source: row.get("source"),
    }
}
