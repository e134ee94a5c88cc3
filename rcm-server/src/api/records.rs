//! Record endpoints
//!
//! There is no persistence: `GET /records` always returns the fixture file
//! as it is on disk, and `POST /records/new` answers with the submitted body
//! unchanged once the configured delay has elapsed.

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::IntoResponse,
};
use tracing::{debug, info};

use crate::error::ApiResult;
use crate::AppState;

const JSON_CONTENT_TYPE: &str = "application/json";

/// GET /records
///
/// Returns the fixture bytes as-is. The fixture is read on every request
/// so edits show up without a restart.
pub async fn get_records(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let body = tokio::fs::read(&state.records_file).await?;

    debug!(
        file = %state.records_file.display(),
        bytes = body.len(),
        "Serving record fixture"
    );

    Ok(([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body))
}

/// POST /records/new
///
/// Echoes the request body after `echo_delay`. The body is not inspected;
/// clients treat whatever comes back as the created record.
pub async fn create_record(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    info!(
        bytes = body.len(),
        delay_ms = state.echo_delay.as_millis() as u64,
        "Record submission received"
    );

    if !state.echo_delay.is_zero() {
        tokio::time::sleep(state.echo_delay).await;
    }

    ([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body)
}
