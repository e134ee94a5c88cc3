//! rcm-server library - record collection backend
//!
//! Serves the record fixture, echoes record submissions after a simulated
//! latency, and serves everything else from a public directory.

use axum::{
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::time::Duration;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod error;
pub mod static_files;

pub use config::ServerConfig;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// JSON fixture returned by `GET /records`
    pub records_file: PathBuf,
    /// Root of the static asset tree
    pub public_dir: PathBuf,
    /// Latency applied before echoing a submission
    pub echo_delay: Duration,
}

impl AppState {
    pub fn new(records_file: PathBuf, public_dir: PathBuf, echo_delay: Duration) -> Self {
        Self {
            records_file,
            public_dir,
            echo_delay,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            config.records_file.clone(),
            config.public_dir.clone(),
            config.echo_delay,
        )
    }
}

/// Build application router
///
/// API paths match exactly; any other path falls through to the static
/// file service.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/records", get(api::get_records))
        .route("/records/new", post(api::create_record))
        .merge(api::health_routes())
        .fallback(static_files::serve_static)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
