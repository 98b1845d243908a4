//! # bricklogd — bricklog daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize structured logging
//! - Construct the repository implementation (adapter), seeded or empty
//! - Construct the application service, injecting the repository via its port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use bricklog_adapter_http_axum::state::AppState;
use bricklog_adapter_http_axum::{cors, router};
use bricklog_adapter_storage_memory::InMemoryLegoSetRepository;
use bricklog_app::services::lego_set_service::LegoSetService;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    init_tracing(&config.logging);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "bricklogd starting");

    // Storage
    let repo = if config.catalog.seed {
        InMemoryLegoSetRepository::seeded()
    } else {
        InMemoryLegoSetRepository::new()
    };
    tracing::info!(seeded = config.catalog.seed, "catalog ready");

    // Services
    let lego_set_service = LegoSetService::new(repo);

    // HTTP
    let state = AppState::new(lego_set_service);
    let app = router::build(state, cors::layer(&config.server.cors_allowed_origins));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "bricklogd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("bricklogd stopped");
    Ok(())
}

/// Install the global `tracing` subscriber.
///
/// An invalid filter directive falls back to `info` with a warning on stderr.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.filter).unwrap_or_else(|err| {
        eprintln!(
            "WARN: log filter '{}' is invalid ({err}); falling back to 'info'",
            logging.filter
        );
        EnvFilter::new("info")
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if logging.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Resolves when SIGINT (Ctrl-C) or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to install Ctrl-C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received, draining connections");
}
