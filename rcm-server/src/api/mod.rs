//! HTTP API handlers for rcm-server

pub mod health;
pub mod records;

pub use health::health_routes;
pub use records::{create_record, get_records};
