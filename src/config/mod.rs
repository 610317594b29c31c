//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (JSON)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MockConfig (validated, immutable)
//!
//! On change notification:
//!     watcher.rs emits "file may have changed"
//!     → reload coordinator re-runs loader + validation
//!     → atomic swap of the routing table
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a full reload
//! - Validation separates syntactic (serde) from semantic checks
//! - A document with one invalid route rejects the whole document

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::{Method, MockConfig, ResponsePayload, ResponseSpec, RouteSpec};
pub use validation::ValidationError;
pub use watcher::ConfigWatcher;
