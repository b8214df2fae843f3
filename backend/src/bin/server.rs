//! Surf report HTTP server binary.
//!
//! Loads the configuration, seeds the repository and serves the REST API.
//!
//! # Usage
//!
//! ```bash
//! # Empty in-memory store
//! cargo run --bin surf-report-server
//!
//! # Seeded from a JSON file, custom config
//! SEED_FILE=seed.json SURF_REPORT_CONFIG=surf-report.toml \
//!   cargo run --bin surf-report-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `SEED_FILE`: JSON seed for the local repository
//! - `SURF_REPORT_CONFIG`: TOML configuration file
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use surf_report::config::AppConfig;
use surf_report::db;
use surf_report::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting surf report server");

    let config = AppConfig::load().context("loading configuration")?;
    info!(
        "Default timezone {}, recent sessions limit {}",
        config.report.default_timezone.name(),
        config.report.recent_sessions_limit
    );

    let repository = db::create_repository(&config.storage).context("initializing repository")?;
    info!("Repository initialized successfully");

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let state = AppState::new(repository).with_config(config);
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
