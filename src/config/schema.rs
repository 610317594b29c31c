//! Configuration schema definitions.
//!
//! This module defines the structure of the mock-server configuration
//! document. All types derive Serde traits for deserialization from JSON.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use axum::http::Method as HttpMethod;
use serde::{Deserialize, Serialize};

/// Root configuration for the mock server.
///
/// Both fields are required; a document missing either is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MockConfig {
    /// Transport bind port.
    pub port: u16,

    /// Route definitions mapping paths to declared responses.
    pub routes: Vec<RouteSpec>,
}

/// One configured path and the responses declared for it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteSpec {
    /// Request path, matched exactly. Unique across the document.
    pub path: String,

    /// Declared responses. Each method may appear at most once per route.
    pub responses: Vec<ResponseSpec>,
}

/// Declarative description of how to answer a (path, method) pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResponseSpec {
    /// HTTP methods this response answers. Must be non-empty.
    pub methods: Vec<Method>,

    /// Response headers, applied to every strategy.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Body strategy, selected by the `response_type` field.
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

/// Body strategy and its payload.
///
/// The tag selects which payload field is required, so a spec carrying the
/// wrong field for its `response_type` fails at deserialization rather than
/// at request time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "response_type", rename_all = "lowercase")]
pub enum ResponsePayload {
    /// Literal body text, returned verbatim.
    Static { body: String },

    /// Body read from a file, in full and binary-safe.
    File { file_path: PathBuf },

    /// Body produced by a named extension unit.
    Script { script: String },
}

/// HTTP method tokens accepted by the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Delete,
    Put,
    Patch,
    Head,
    Options,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }

    /// Map a transport-level method onto a configurable token.
    ///
    /// Returns `None` for methods the schema does not accept (e.g. TRACE,
    /// CONNECT); those can never match a route.
    pub fn from_http(method: &HttpMethod) -> Option<Self> {
        match method.as_str() {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            "DELETE" => Some(Method::Delete),
            "PUT" => Some(Method::Put),
            "PATCH" => Some(Method::Patch),
            "HEAD" => Some(Method::Head),
            "OPTIONS" => Some(Method::Options),
            _ => None,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_field_follows_response_type() {
        let spec: ResponseSpec = serde_json::from_value(serde_json::json!({
            "methods": ["GET"],
            "response_type": "static",
            "body": "hello"
        }))
        .unwrap();
        assert_eq!(
            spec.payload,
            ResponsePayload::Static { body: "hello".into() }
        );
        assert!(spec.headers.is_empty());
    }

    #[test]
    fn wrong_payload_field_is_rejected() {
        let result: Result<ResponseSpec, _> = serde_json::from_value(serde_json::json!({
            "methods": ["GET"],
            "response_type": "file",
            "body": "not a file path"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_response_type_is_rejected() {
        let result: Result<ResponseSpec, _> = serde_json::from_value(serde_json::json!({
            "methods": ["GET"],
            "response_type": "proxy",
            "body": "x"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_method_token_is_rejected() {
        let result: Result<ResponseSpec, _> = serde_json::from_value(serde_json::json!({
            "methods": ["TRACE"],
            "response_type": "static",
            "body": "x"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn method_maps_to_and_from_transport() {
        assert_eq!(Method::from_http(&HttpMethod::GET), Some(Method::Get));
        assert_eq!(Method::from_http(&HttpMethod::TRACE), None);
        assert_eq!(Method::Patch.to_string(), "PATCH");
    }
}
