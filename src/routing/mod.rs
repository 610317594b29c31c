//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (path, method)
//!     → resolver.rs (table lookup)
//!     → Return: matched response spec, NoMethod, or NoRoute
//!
//! Table compilation (at startup and on every reload):
//!     MockConfig routes
//!     → table.rs (path → method → spec)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Tables compiled from a validated config, immutable at runtime
//! - Exact-string path matching only; no prefixes, no wildcards
//! - Deterministic: same table and input always resolve the same way
//! - Explicit miss outcomes so the transport can answer 404 vs 405

pub mod resolver;
pub mod table;

pub use resolver::Resolution;
pub use table::RouteTable;
