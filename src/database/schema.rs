//! Database schema

use anyhow::Result;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use std::path::Path;
use tracing::{debug, info};

/// Open (creating if needed) the database at `db_path` and make sure every table exists
pub async fn initialize_database(db_path: &Path) -> Result<Pool<Sqlite>> {
    if !db_path.exists() {
        debug!("Creating database at: {}", db_path.display());
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    info!("Running database migrations");
    create_tables(&pool).await?;

    Ok(pool)
}

async fn create_tables(pool: &Pool<Sqlite>) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Keyed by component name so ids can change between releases
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS component_state (
            name TEXT PRIMARY KEY,
            enabled BOOLEAN NOT NULL,
            status TEXT NOT NULL,
            updated_at DATETIME NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            message TEXT NOT NULL,
            kind TEXT NOT NULL,
            source TEXT NOT NULL,
            created_at DATETIME NOT NULL,
            is_read BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_notifications_created ON notifications(created_at)",
    )
    .execute(pool)
    .await?;

    debug!("Database tables created successfully");
    Ok(())
}
