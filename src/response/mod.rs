//! Response materialization subsystem.
//!
//! # Data Flow
//! ```text
//! Matched ResponseSpec + InboundRequest
//!     → materializer.rs
//!         static → configured body verbatim
//!         file   → full async read of file_path (+ inferred Content-Type)
//!         script → extension registry → unit invocation
//!     → MaterializedResponse { headers, body }
//!     → audit log, then the transport sends it
//! ```
//!
//! # Design Decisions
//! - Materialization failures are per-request: logged and answered with an
//!   internal error, never fatal to the process or listener
//! - File reads are async and binary-safe; dropping the request future
//!   cancels a pending read
//! - Inferred Content-Type never overrides one configured explicitly

pub mod materializer;
mod mime;

pub use materializer::{materialize, MaterializeError, MaterializedResponse};
