//! # RCM Common Library
//!
//! Shared code for the record collection manager processes:
//! - Record data type exchanged over the HTTP API
//! - Bootstrap configuration loading (TOML + logging)
//! - Tracing initialisation
//! - Build identification
//! - Common error type

pub mod build_info;
pub mod config;
pub mod error;
pub mod logging;
pub mod record;

pub use error::{Error, Result};
pub use record::Record;
