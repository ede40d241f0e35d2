//! # washboardd — washboard daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Load or seed the board snapshot and start the tick scheduler
//! - Build the axum router, injecting the board service
//! - Bind to a TCP port and serve until SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use washboard_adapter_http_axum::state::AppState;
use washboard_adapter_notify::TracingNotifier;
use washboard_adapter_storage_sqlite_sqlx::board_repo::SqliteBoardRepository;
use washboard_adapter_storage_sqlite_sqlx::pool::Config as DbConfig;
use washboard_adapter_storage_sqlite_sqlx::reading_repo::SqliteReadingRepository;
use washboard_app::event_bus::InProcessEventBus;
use washboard_app::scheduler;
use washboard_app::services::board_service::BoardService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter)
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let board_repo = SqliteBoardRepository::new(pool.clone());
    let reading_repo = SqliteReadingRepository::new(pool);

    // Event bus & notifier
    let event_bus = Arc::new(InProcessEventBus::new(256));
    let notifier = TracingNotifier::new(config.authorization_policy());

    // Board service (loads the stored snapshot or seeds the defaults)
    let board_service = Arc::new(
        BoardService::bootstrap(
            board_repo,
            notifier,
            Arc::clone(&event_bus),
            config.sort_regime(),
        )
        .await,
    );

    // Background tick scheduler
    tokio::spawn(scheduler::run(
        Arc::clone(&board_service),
        Duration::from_secs(config.scheduler.tick_seconds),
    ));

    // HTTP
    let state = AppState::new(board_service, Arc::new(reading_repo), event_bus);
    let app = washboard_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "washboardd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
