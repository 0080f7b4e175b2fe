// src/db.rs

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::Config;

/// Opens the connection pool for the configured database file.
///
/// Accepts either a `sqlite:` URL or a plain file path. The file is created
/// when missing so a fresh deployment starts with an empty database.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = if config.database_url.starts_with("sqlite:") {
        SqliteConnectOptions::from_str(&config.database_url)?
    } else {
        SqliteConnectOptions::new().filename(&config.database_url)
    };

    let options = options
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    tracing::info!("Opening database: {}", config.database_url);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect_with(options)
        .await
}

/// Table definitions and the default announcement, applied on every startup.
const SCHEMA: &str = include_str!("../schema/init.sql");

/// Creates every table that is missing and seeds the default announcement.
///
/// Runs the whole script each time, with no version bookkeeping: tables use
/// `IF NOT EXISTS` and the announcement is inserted only when its key is absent.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

/// Reads the current announcement text, if the setting row exists.
pub async fn fetch_announcement(pool: &SqlitePool) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, Option<String>>("SELECT value FROM settings WHERE key = 'announcement'")
        .fetch_optional(pool)
        .await
        .map(Option::flatten)
}
