//! rcm-server - record collection backend
//!
//! Serves `GET /records` from a JSON fixture, echoes `POST /records/new`
//! after a simulated delay and serves static assets for everything else.

use anyhow::{Context, Result};
use clap::Parser;
use rcm_common::config::{load_toml_config, resolve_config_path};
use rcm_server::config::Args;
use rcm_server::{build_router, AppState, ServerConfig};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = resolve_config_path(args.config.as_deref());
    let toml = load_toml_config(config_path.as_deref()).context("Failed to load config file")?;
    let config = ServerConfig::resolve(&args, &toml);

    rcm_common::logging::init_tracing(&config.log_level, true);

    info!("{}", rcm_server::api::health::BUILD_INFO.banner());

    info!("Records fixture: {}", config.records_file.display());
    info!("Public directory: {}", config.public_dir.display());
    info!("Submission echo delay: {:?}", config.echo_delay);

    if !config.records_file.is_file() {
        warn!(
            "Records fixture {} does not exist; GET /records will fail until it does",
            config.records_file.display()
        );
    }
    if !config.public_dir.is_dir() {
        warn!(
            "Public directory {} does not exist; static paths will 404",
            config.public_dir.display()
        );
    }

    let app = build_router(AppState::from_config(&config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("rcm-server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
