//! rcm-client - terminal front end for the record collection
//!
//! Reads commands from stdin, feeds them to the session event loop and
//! prints the derived view whenever it changes. Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use rcm_client::command::{Command, HELP_TEXT};
use rcm_client::render;
use rcm_client::runtime::Runtime;
use rcm_client::{HttpRecordsClient, RecordsApi};
use rcm_common::build_info::BuildInfo;
use rcm_common::config::{load_toml_config, resolve_config_path};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Command-line arguments for rcm-client
#[derive(Parser, Debug)]
#[command(name = "rcm-client")]
#[command(about = "Browse, filter and add records on an rcm-server")]
#[command(version)]
struct Args {
    /// Base URL of the records server
    #[arg(short, long, env = "RCM_SERVER_URL")]
    server_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,

    /// TOML bootstrap config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = resolve_config_path(args.config.as_deref());
    let toml = load_toml_config(config_path.as_deref()).context("Failed to load config file")?;

    rcm_common::logging::init_tracing(&toml.logging.level, false);

    info!(
        "{}",
        BuildInfo::new("rcm-client", env!("CARGO_PKG_VERSION")).banner()
    );

    let server_url = args
        .server_url
        .or(toml.server_url)
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
    info!("Server: {}", server_url);

    let client = HttpRecordsClient::new(server_url, Duration::from_secs(args.timeout_secs))
        .context("Failed to build HTTP client")?;
    let api: Arc<dyn RecordsApi> = Arc::new(client);

    let (runtime, handle) = Runtime::new(api);
    let runtime_task = tokio::spawn(runtime.run());

    let mut views = handle.subscribe();
    let renderer = tokio::spawn(async move {
        loop {
            let screen = render::render(&views.borrow_and_update());
            println!("{}", screen);
            if views.changed().await.is_err() {
                break;
            }
        }
    });

    println!("{}", HELP_TEXT);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        match Command::parse(&line) {
            Ok(Some(Command::Event(event))) => {
                if !handle.send(event).await {
                    break;
                }
            }
            Ok(Some(Command::Show)) => println!("{}", render::render(&handle.current())),
            Ok(Some(Command::Help)) => println!("{}", HELP_TEXT),
            Ok(Some(Command::Quit)) => break,
            Ok(None) => {}
            Err(e) => eprintln!("{}", e),
        }
    }

    drop(handle);
    let session = runtime_task.await.context("Event loop panicked")?;
    renderer.await.context("Renderer panicked")?;

    info!(records = session.store().len(), "Session ended");
    Ok(())
}
