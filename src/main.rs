//! Meow Norris Joke API (v1)
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request            ┌──────────────────────────────────────────┐
//!     ──────────────────────────┼─▶ http::server ──▶ http::handlers         │
//!                               │                        │                 │
//!                               │                        ▼                 │
//!                               │                 upstream::JokeClient ────┼──▶ api.chucknorris.io
//!                               │                        │                 │
//!                               │                        ▼                 │
//!     Client Response           │                 jokes::transform         │
//!     ◀─────────────────────────┼──────────────── (mascot substitution)    │
//!                               │                                          │
//!                               │  config · health · observability ·       │
//!                               │  lifecycle                               │
//!                               └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use meow_norris::lifecycle::signals::spawn_signal_listener;
use meow_norris::lifecycle::startup::{resolve_config, ListenerOverrides};
use meow_norris::observability::{logging, metrics};
use meow_norris::{HttpServer, JokeClient, Shutdown};

#[derive(Parser)]
#[command(name = "meow-norris")]
#[command(about = "Chuck Norris jokes, starring the office mascots", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind, overriding the configuration file.
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding the configuration file.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let overrides = ListenerOverrides {
        host: cli.host,
        port: cli.port,
    };
    let config = resolve_config(cli.config.as_deref(), &overrides)?;

    logging::init(&config.observability.log_level);
    tracing::info!("meow-norris v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        upstream_timeout_secs = config.upstream.timeout_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address already checked by validation.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let client = Arc::new(JokeClient::new(&config.upstream)?);

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    spawn_signal_listener(shutdown.clone());

    let server = HttpServer::new(client);
    server.run(listener, shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
