//! Shared utilities for the end-to-end suite.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use stubserve::config::load_config;
use stubserve::extensions::ExtensionRegistry;
use stubserve::http::{AppState, HttpServer};
use stubserve::observability::AuditLog;
use stubserve::reload::ReloadCoordinator;

/// Start a full server for the given config file.
///
/// Returns the bound address and the reload-notification sender, standing in
/// for the filesystem watcher so tests control reload timing.
pub async fn start_server(config_path: &Path) -> (SocketAddr, mpsc::UnboundedSender<()>) {
    let config = load_config(config_path).expect("test config must load");
    let coordinator = ReloadCoordinator::new(config_path.to_path_buf(), &config);
    let table = coordinator.table();

    let (reload_tx, reload_rx) = mpsc::unbounded_channel();
    tokio::spawn(coordinator.run(reload_rx));

    let state = AppState {
        table,
        extensions: Arc::new(ExtensionRegistry::with_builtins()),
        audit: Arc::new(AuditLog::new()),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = HttpServer::new(state).run(listener).await;
    });

    (addr, reload_tx)
}

/// Poll a URL until its body matches, or panic after ~5 seconds.
#[allow(dead_code)]
pub async fn wait_for_body(client: &reqwest::Client, url: &str, expected: &str) {
    for _ in 0..50 {
        if let Ok(resp) = client.get(url).send().await {
            if let Ok(body) = resp.text().await {
                if body == expected {
                    return;
                }
            }
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    panic!("body at {url} never became {expected:?}");
}
