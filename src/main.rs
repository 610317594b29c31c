//! stubserve — declarative mock HTTP server.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌────────────────────────────────────────────────┐
//!                       │                   STUBSERVE                    │
//!                       │                                                │
//!  Client Request       │  ┌────────┐   ┌──────────┐   ┌─────────────┐  │
//!  ─────────────────────┼─▶│  http  │──▶│ routing  │──▶│  response   │  │
//!                       │  │ server │   │  table   │   │materializer │  │
//!                       │  └────────┘   └────▲─────┘   └──────┬──────┘  │
//!                       │                    │                │         │
//!                       │               atomic swap      ┌────▼──────┐  │
//!                       │                    │           │extensions │  │
//!  Client Response      │  ┌────────┐   ┌────┴─────┐     └───────────┘  │
//!  ◀────────────────────┼──│ audit  │   │  reload  │◀── notify watcher  │
//!                       │  │  log   │   │coordinator│    on conf.json   │
//!                       │  └────────┘   └──────────┘                    │
//!                       └────────────────────────────────────────────────┘
//! ```
//!
//! Startup config errors are fatal; reload-time errors are contained, the
//! previously published table keeps serving.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use stubserve::config::{load_config, ConfigWatcher};
use stubserve::extensions::ExtensionRegistry;
use stubserve::http::{AppState, HttpServer};
use stubserve::observability::{logging, AuditLog};
use stubserve::reload::ReloadCoordinator;

#[derive(Parser, Debug)]
#[command(name = "stubserve", version, about = "Declarative mock HTTP server")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(
        short = 'c',
        long = "config-file",
        value_name = "FILE_PATH",
        default_value = "./conf.json"
    )]
    config_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logging::init("stubserve=debug,tower_http=debug");

    tracing::info!("stubserve v0.1.0 starting");

    let config = match load_config(&cli.config_file) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(path = ?cli.config_file, error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    tracing::info!(
        port = config.port,
        routes = config.routes.len(),
        "Configuration loaded"
    );

    let coordinator = ReloadCoordinator::new(cli.config_file.clone(), &config);
    let table = coordinator.table();

    let (watcher, notifications) = ConfigWatcher::new(&cli.config_file);
    let _watcher = watcher.run()?;
    tokio::spawn(coordinator.run(notifications));

    let state = AppState {
        table,
        extensions: Arc::new(ExtensionRegistry::with_builtins()),
        audit: Arc::new(AuditLog::new()),
    };

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    HttpServer::new(state).run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
