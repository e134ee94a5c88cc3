//! Server configuration
//!
//! Command-line arguments (with environment fallbacks) override the TOML
//! file, which overrides compiled defaults. `PORT` is honoured for
//! compatibility with common hosting environments.

use clap::Parser;
use rcm_common::config::TomlConfig;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_ECHO_DELAY_MS: u64 = 2000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_RECORDS_FILE: &str = "records.json";

/// Command-line arguments for rcm-server
#[derive(Parser, Debug, Default)]
#[command(name = "rcm-server")]
#[command(about = "Record collection backend: record fixture, submission echo and static files")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory served for non-API paths
    #[arg(long, env = "RCM_PUBLIC_DIR")]
    pub public_dir: Option<PathBuf>,

    /// JSON fixture returned by GET /records
    #[arg(long, env = "RCM_RECORDS_FILE")]
    pub records_file: Option<PathBuf>,

    /// Delay before POST /records/new answers, in milliseconds
    #[arg(long, env = "RCM_ECHO_DELAY_MS")]
    pub echo_delay_ms: Option<u64>,

    /// TOML bootstrap config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Fully resolved server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub public_dir: PathBuf,
    pub records_file: PathBuf,
    pub echo_delay: Duration,
    pub log_level: String,
}

impl ServerConfig {
    /// Merge arguments over the TOML file over defaults
    pub fn resolve(args: &Args, toml: &TomlConfig) -> Self {
        let port = args.port.or(toml.port).unwrap_or(DEFAULT_PORT);

        let public_dir = args
            .public_dir
            .clone()
            .or_else(|| toml.public_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR));

        let records_file = args
            .records_file
            .clone()
            .or_else(|| toml.records_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RECORDS_FILE));

        let echo_delay_ms = args
            .echo_delay_ms
            .or(toml.echo_delay_ms)
            .unwrap_or(DEFAULT_ECHO_DELAY_MS);

        Self {
            port,
            public_dir,
            records_file,
            echo_delay: Duration::from_millis(echo_delay_ms),
            log_level: toml.logging.level.clone(),
        }
    }
}
