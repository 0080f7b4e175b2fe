// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Database file used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "tawjihi_quiz.db";
pub const DEFAULT_PORT: u16 = 5000;

/// The admin sync endpoint receives the whole question bank in one body,
/// so the cap sits well above axum's 2 MiB default.
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    /// A `sqlite:` URL or a bare path to the database file.
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_dir: String,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let defaults = Self::default();

        let database_url = env::var("DATABASE_URL").unwrap_or(defaults.database_url);

        let host = env::var("HOST").unwrap_or(defaults.host);

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let rust_log = env::var("RUST_LOG").unwrap_or(defaults.rust_log);

        let log_dir = env::var("LOG_DIR").unwrap_or(defaults.log_dir);

        let max_body_bytes = env::var("MAX_BODY_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_body_bytes);

        Self {
            database_url,
            host,
            port,
            rust_log,
            log_dir,
            max_body_bytes,
        }
    }
}
