//! Routing-table reload coordination.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use arc_swap::ArcSwap;
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::MockConfig;
use crate::routing::table::RouteTable;

/// Result of one reload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// A new table was built and published.
    Swapped,
    /// The file fingerprint was unchanged; duplicate notification dropped.
    Debounced,
    /// Loading or validation failed; the published table was kept.
    Rejected,
}

/// Modification fingerprint used to drop duplicate notifications.
///
/// Length is part of the fingerprint because mtime clocks can be too coarse
/// to tell two quick saves apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fingerprint {
    modified: SystemTime,
    len: u64,
}

impl Fingerprint {
    fn probe(path: &Path) -> Option<Self> {
        let meta = std::fs::metadata(path).ok()?;
        Some(Self {
            modified: meta.modified().ok()?,
            len: meta.len(),
        })
    }
}

/// Owns the published routing table and rebuilds it on change notifications.
pub struct ReloadCoordinator {
    config_path: PathBuf,
    /// Port the listener was bound with; a reload cannot change it.
    bound_port: u16,
    table: Arc<ArcSwap<RouteTable>>,
    fingerprint: Option<Fingerprint>,
}

impl ReloadCoordinator {
    /// Build the initial table from an already-loaded config and remember
    /// the file's current fingerprint.
    pub fn new(config_path: PathBuf, config: &MockConfig) -> Self {
        let fingerprint = Fingerprint::probe(&config_path);
        Self {
            bound_port: config.port,
            table: Arc::new(ArcSwap::from_pointee(RouteTable::build(config))),
            config_path,
            fingerprint,
        }
    }

    /// Handle to the published table. The server loads one snapshot per
    /// request; `store` here is the single atomic publish step.
    pub fn table(&self) -> Arc<ArcSwap<RouteTable>> {
        Arc::clone(&self.table)
    }

    /// Consume change notifications until the channel closes.
    pub async fn run(mut self, mut notifications: mpsc::UnboundedReceiver<()>) {
        while notifications.recv().await.is_some() {
            self.try_reload();
        }
    }

    /// One reload attempt: debounce, load, build, publish.
    pub fn try_reload(&mut self) -> ReloadOutcome {
        let fingerprint = Fingerprint::probe(&self.config_path);
        if fingerprint.is_some() && fingerprint == self.fingerprint {
            tracing::debug!(
                path = ?self.config_path,
                "Change notification with unchanged fingerprint, skipping"
            );
            return ReloadOutcome::Debounced;
        }
        self.fingerprint = fingerprint;

        match load_config(&self.config_path) {
            Ok(config) => {
                if config.port != self.bound_port {
                    tracing::warn!(
                        bound = self.bound_port,
                        configured = config.port,
                        "Port changed in config; takes effect after restart"
                    );
                }
                let table = RouteTable::build(&config);
                let routes = table.len();
                self.table.store(Arc::new(table));
                tracing::info!(routes, "Routing table reloaded");
                ReloadOutcome::Swapped
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Config reload failed, keeping current routing table"
                );
                ReloadOutcome::Rejected
            }
        }
    }
}
