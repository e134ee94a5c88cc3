//! Bootstrap configuration loading
//!
//! Settings resolve in priority order:
//! 1. Command-line arguments (handled by each binary with clap)
//! 2. Environment variables (clap `env` fallbacks, plus `RCM_CONFIG`)
//! 3. TOML configuration file
//! 4. Compiled defaults
//!
//! A missing TOML file is not fatal: a warning is logged and defaults are
//! used. A file that exists but cannot be read or parsed is an error.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "RCM_CONFIG";

/// Bootstrap configuration loaded from TOML file
///
/// Every key is optional; binaries merge these values under their
/// command-line arguments.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// HTTP listen port (server)
    pub port: Option<u16>,

    /// Directory served for non-API paths (server)
    pub public_dir: Option<PathBuf>,

    /// JSON fixture served by `GET /records` (server)
    pub records_file: Option<PathBuf>,

    /// Artificial latency before `POST /records/new` answers (server)
    pub echo_delay_ms: Option<u64>,

    /// Base URL of the records server (client)
    pub server_url: Option<String>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Determine which config file to read, if any
///
/// An explicit path wins over `RCM_CONFIG`.
pub fn resolve_config_path(cli_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        return Some(path.to_path_buf());
    }

    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Load the TOML config, falling back to defaults when there is no file
pub fn load_toml_config(path: Option<&Path>) -> Result<TomlConfig> {
    let Some(path) = path else {
        return Ok(TomlConfig::default());
    };

    if !path.exists() {
        warn!(
            "Config file {} not found, using defaults",
            path.display()
        );
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;

    parse_toml_config(&content)
        .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Parse TOML text into a config
pub fn parse_toml_config(content: &str) -> std::result::Result<TomlConfig, toml::de::Error> {
    toml::from_str(content)
}
