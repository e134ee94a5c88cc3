//! `GET /health`: liveness plus build identification

use axum::{routing::get, Json, Router};
use rcm_common::build_info::BuildInfo;
use serde::Serialize;

use crate::AppState;

pub const BUILD_INFO: BuildInfo = BuildInfo::new("rcm-server", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub build: BuildInfo,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        build: BUILD_INFO,
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
