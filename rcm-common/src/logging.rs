//! Tracing subscriber initialisation shared by the binaries

use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` when set, otherwise the configured level
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global fmt subscriber
///
/// `with_ansi` is disabled by callers that share the terminal with
/// interactive output.
pub fn init_tracing(default_level: &str, with_ansi: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_ansi(with_ansi)
        .with_writer(std::io::stderr)
        .init();
}
