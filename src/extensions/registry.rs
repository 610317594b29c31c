//! Extension resolution and invocation.

use std::collections::hash_map;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use thiserror::Error;

use crate::extensions::builtin;
use crate::http::request::InboundRequest;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A response-generating unit invoked for script-typed routes.
///
/// Implementations are invoked concurrently and must not share mutable state
/// across requests unless they synchronize it themselves.
pub trait Extension: Send + Sync {
    /// Produce the response body for an inbound request.
    fn response(&self, request: &InboundRequest) -> Result<String, BoxError>;
}

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("no extension found for identifier {0:?}")]
    NotFound(String),

    #[error("extension {0:?} is already registered")]
    Duplicate(String),

    #[error("extension {identifier:?} failed: {source}")]
    Runtime {
        identifier: String,
        #[source]
        source: BoxError,
    },
}

/// Registry of named extension units.
///
/// Units are registered before the server starts; per-request resolution only
/// reads. Resolved identifiers are cached for the process lifetime, and the
/// entry API bounds concurrent resolution to one lookup per identifier.
pub struct ExtensionRegistry {
    units: HashMap<String, Arc<dyn Extension>>,
    resolved: DashMap<String, Arc<dyn Extension>>,
}

impl ExtensionRegistry {
    /// An empty registry, for callers that bring their own units.
    pub fn new() -> Self {
        Self {
            units: HashMap::new(),
            resolved: DashMap::new(),
        }
    }

    /// A registry preloaded with the bundled units.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, unit) in builtin::units() {
            registry.units.insert(name.to_string(), unit);
        }
        registry
    }

    /// Register a unit under a name.
    ///
    /// A name maps to exactly one unit; a second registration under the same
    /// name is rejected rather than silently replacing or shadowing the
    /// first.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        unit: Arc<dyn Extension>,
    ) -> Result<(), ExtensionError> {
        match self.units.entry(name.into()) {
            hash_map::Entry::Occupied(e) => Err(ExtensionError::Duplicate(e.key().clone())),
            hash_map::Entry::Vacant(v) => {
                v.insert(unit);
                Ok(())
            }
        }
    }

    /// Resolve an identifier to a unit.
    ///
    /// Lookup layers, first success wins:
    /// 1. a unit registered under exactly `identifier`;
    /// 2. a source file at `identifier` (or `identifier` + ".rs") relative to
    ///    the working directory, resolved to the unit named by its stem;
    /// 3. `identifier` as a literal filesystem path, resolved the same way.
    pub fn resolve(&self, identifier: &str) -> Result<Arc<dyn Extension>, ExtensionError> {
        if let Some(hit) = self.resolved.get(identifier) {
            return Ok(Arc::clone(&hit));
        }

        match self.resolved.entry(identifier.to_string()) {
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(slot) => {
                let unit = self
                    .lookup(identifier)
                    .ok_or_else(|| ExtensionError::NotFound(identifier.to_string()))?;
                slot.insert(Arc::clone(&unit));
                Ok(unit)
            }
        }
    }

    fn lookup(&self, identifier: &str) -> Option<Arc<dyn Extension>> {
        if let Some(unit) = self.units.get(identifier) {
            return Some(Arc::clone(unit));
        }

        let as_path = Path::new(identifier);
        if as_path.is_relative() {
            for candidate in [as_path.to_path_buf(), PathBuf::from(format!("{identifier}.rs"))] {
                if candidate.is_file() {
                    if let Some(unit) = self.unit_for_stem(&candidate) {
                        return Some(unit);
                    }
                }
            }
        } else if as_path.is_file() {
            if let Some(unit) = self.unit_for_stem(as_path) {
                return Some(unit);
            }
        }

        None
    }

    fn unit_for_stem(&self, path: &Path) -> Option<Arc<dyn Extension>> {
        let stem = path.file_stem()?.to_str()?;
        self.units.get(stem).cloned()
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
