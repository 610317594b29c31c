//! HTTP transport subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all dispatch)
//!     → request.rs (request ID, captured InboundRequest)
//!     → routing table snapshot → resolver → materializer
//!     → response.rs (assemble status/headers/body)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{InboundRequest, MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
