//! stubserve — declarative mock HTTP server.
//!
//! Answers requests with pre-declared responses (static text, file contents,
//! or extension-computed output) chosen by path and method from a JSON
//! configuration, and hot-reloads the routing table when that file changes.

pub mod config;
pub mod extensions;
pub mod http;
pub mod observability;
pub mod reload;
pub mod response;
pub mod routing;

pub use config::{load_config, ConfigError, MockConfig};
pub use extensions::{Extension, ExtensionRegistry};
pub use http::{AppState, HttpServer};
pub use reload::ReloadCoordinator;
pub use routing::RouteTable;
