//! Route lookup for inbound requests.

use axum::http::Method as HttpMethod;

use crate::config::schema::{Method, ResponseSpec};
use crate::routing::table::RouteTable;

/// Outcome of resolving a (path, method) pair against a table.
///
/// The path-known/method-unknown case is kept distinct from the path-unknown
/// case so the transport can answer 405 versus 404.
#[derive(Debug)]
pub enum Resolution<'a> {
    /// A response is declared for this path and method.
    Matched(&'a ResponseSpec),
    /// The path is configured, but not for this method.
    NoMethod,
    /// The path is not configured at all.
    NoRoute,
}

impl RouteTable {
    /// Find the response declared for an exact path and method.
    ///
    /// Deterministic: no hidden state, the same table and input always give
    /// the same result.
    pub fn resolve(&self, path: &str, method: &HttpMethod) -> Resolution<'_> {
        let Some(methods) = self.routes.get(path) else {
            return Resolution::NoRoute;
        };
        let Some(known) = Method::from_http(method) else {
            return Resolution::NoMethod;
        };
        match methods.get(&known) {
            Some(spec) => Resolution::Matched(spec),
            None => Resolution::NoMethod,
        }
    }
}
