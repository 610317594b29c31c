//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (tracing subscriber setup)
//!     → audit.rs (request/response audit blocks, target stubserve::audit)
//!
//! Consumers:
//!     → stdout via tracing-subscriber fmt layer
//!     → filtering via RUST_LOG / env-filter
//! ```
//!
//! # Design Decisions
//! - Structured logging through the tracing crate
//! - The audit log is an injected collaborator on the dispatch path, not a
//!   process-wide singleton
//! - Matched and unmatched requests are audited identically

pub mod audit;
pub mod logging;

pub use audit::AuditLog;
