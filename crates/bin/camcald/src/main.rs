//! # camcald — camcal daemon
//!
//! Composition root that loads the configuration and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (`camcal.toml` + env var overrides)
//! - Initialise `tracing` with the configured filter
//! - Validate the calendar before serving (fail fast on bad tables)
//! - Build the axum router and bind to a TCP port
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use camcal_adapter_http_axum::router;
use camcal_adapter_http_axum::state::AppState;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config::load validates the calendar, so a year without a palette
    // entry or a malformed hidden key never reaches the request path.
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let bind_addr = config.bind_addr();
    let static_dir = config.server.static_dir.clone();
    let state = AppState::new(config.calendar);
    let app = router::build(state, &static_dir);

    tracing::info!(%bind_addr, "camcald listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
