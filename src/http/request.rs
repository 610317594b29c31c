//! Request capture and identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) as early as possible
//! - Capture the inbound request once, for extensions and the audit trail
//!
//! # Design Decisions
//! - The body is buffered before dispatch; declared responses may need it
//!   and the audit trail always does
//! - The captured form is plain data, so extension units never touch
//!   transport internals

use axum::body::Bytes;
use axum::http::{HeaderMap, HeaderValue, Method, Request, Uri, Version};
use tower_http::request_id::{MakeRequestId, RequestId};

pub const X_REQUEST_ID: &str = "x-request-id";

/// The inbound request as seen by extensions and the audit log.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub method: Method,
    pub uri: Uri,
    pub version: Version,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// UUID v4 request IDs for the set-request-id middleware.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
