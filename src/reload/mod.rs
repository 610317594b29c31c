//! Live-reload subsystem.
//!
//! # Data Flow
//! ```text
//! watcher notification ("config may have changed")
//!     → coordinator.rs
//!         fingerprint unchanged → skip (duplicate notification)
//!         load + validate + build (off the request path)
//!             failure → log, keep the published table
//!             success → ArcSwap::store(new table)
//! ```
//!
//! # Design Decisions
//! - The published table pointer is the only shared mutable cell; requests
//!   load one snapshot and keep it until they finish
//! - A bad edit never takes the server down or blanks its routing
//! - The listener is never rebound; a changed port only logs a warning

pub mod coordinator;

pub use coordinator::{ReloadCoordinator, ReloadOutcome};
