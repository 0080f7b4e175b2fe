// src/main.rs

use std::net::SocketAddr;

use tawjihi_backend::config::Config;
use tawjihi_backend::state::AppState;
use tawjihi_backend::{db, routes};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from environment (and .env, if present)
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let pool = db::connect(&config).await.map_err(|e| {
        tracing::error!("Failed to open database: {}", e);
        e
    })?;

    tracing::info!("Database connected...");

    // Ensure tables and default settings exist
    tracing::info!("Initializing schema...");
    db::init_schema(&pool).await.map_err(|e| {
        tracing::error!("Failed to initialize schema: {}", e);
        e
    })?;
    tracing::info!("Schema ready.");

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    // Create AppState
    let state = AppState {
        pool,
        config,
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Start the server
    axum::serve(listener, app).await?;

    Ok(())
}
