//! Extension subsystem for script-typed responses.
//!
//! # Data Flow
//! ```text
//! ResponseSpec { response_type: "script", script: <identifier> }
//!     → registry.rs (layered identifier resolution, cached)
//!     → Extension::response(&InboundRequest)
//!     → body string
//! ```
//!
//! # Design Decisions
//! - Units are compiled in and selected by string key; no runtime code loading
//! - An identifier written as a source-file location resolves to the unit
//!   named by its file stem, so configs written against on-disk scripts keep
//!   working
//! - Registering two units under one name fails closed at assembly time
//! - Resolution is cached per identifier for the process lifetime; a config
//!   reload never reloads extension code

pub mod builtin;
pub mod registry;

pub use registry::{BoxError, Extension, ExtensionError, ExtensionRegistry};
