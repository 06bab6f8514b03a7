//! Cart Server
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http server ──▶ handlers ──▶ cart store (mutex)
//!                         │              │              │
//!                         │              │              ▼
//!     Client Response     │              │        snapshot()
//!     ◀───────────────────┴── 303 / 400  └──────▶ view (template) ──▶ HTML
//!
//!     Cross-cutting: config, observability (logs, metrics), lifecycle
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use cart_server::config::CartConfig;
use cart_server::http::HttpServer;
use cart_server::lifecycle::startup::{self, Overrides, StartupError};
use cart_server::lifecycle::{signals, Shutdown};
use cart_server::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "cart-server")]
#[command(about = "In-memory shopping cart served over HTTP", long_about = None)]
struct Args {
    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// IPv4 address to listen on
    #[arg(long)]
    address: Option<String>,

    /// TCP port to listen on
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let args = Args::parse();
    let config = startup::resolve_config(
        args.config.as_deref(),
        Overrides {
            address: args.address,
            port: args.port,
        },
    )?;

    logging::init_logging(&config.observability);
    tracing::info!("cart-server v{} starting", env!("CARGO_PKG_VERSION"));

    run(config).await.inspect_err(|e| {
        tracing::error!(error = %e, "Startup failed");
    })
}

async fn run(config: CartConfig) -> Result<(), StartupError> {
    let (view, _watcher) = startup::load_view(&config)?;

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let bind_address = config.listener.bind_address();
    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: bind_address.clone(),
            source,
        })?;

    tracing::info!(address = %bind_address, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_shutdown().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config, view);
    server
        .run(listener, server_shutdown)
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("Shutdown complete");
    Ok(())
}
