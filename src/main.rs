//! Echo server demonstrating query-to-header mapping.
//!
//! ```text
//!   GET /?token=abc123
//!        │
//!        ▼
//!   ┌──────────────┐   ┌──────────────────────┐   ┌──────────────┐
//!   │ TraceLayer + │──▶│ query-header mappers │──▶│ echo handler │
//!   │ TimeoutLayer │   │ (config order)       │   │ (JSON)       │
//!   └──────────────┘   └──────────────────────┘   └──────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use query_header_mapper::config::{load_config, AppConfig};
use query_header_mapper::observability::init_logging;
use query_header_mapper::HttpServer;

#[derive(Parser)]
#[command(name = "query-header-mapper")]
#[command(about = "Echo server that copies query parameters into request headers", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        mappings = config.mappings.len(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
