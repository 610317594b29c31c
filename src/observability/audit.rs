//! Request/response audit trail.
//!
//! Every request is recorded before its response is sent, whether it matched
//! a route or not, so the traffic a simulated API saw can be replayed from
//! the logs alone.

use crate::http::request::InboundRequest;
use crate::response::materializer::MaterializedResponse;

/// Audit collaborator injected into the dispatch path.
#[derive(Debug, Default)]
pub struct AuditLog;

impl AuditLog {
    pub fn new() -> Self {
        Self
    }

    /// Record a request and, when one was produced, its response.
    ///
    /// Misses and failed materializations pass `None` and still leave the
    /// request block in the trail.
    pub fn record(&self, request: &InboundRequest, response: Option<&MaterializedResponse>) {
        tracing::info!(target: "stubserve::audit", "{}", format_request(request));
        if let Some(response) = response {
            tracing::info!(target: "stubserve::audit", "{}", format_response(response));
        }
    }
}

fn format_request(request: &InboundRequest) -> String {
    let mut out = String::from("\n----- Request -----\n");
    out.push_str(&format!(
        "{} {} {:?}\n",
        request.method, request.uri, request.version
    ));

    let mut headers: Vec<(String, String)> = request
        .headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    headers.sort();
    for (name, value) in headers {
        out.push_str(&format!("{name}: {value}\n"));
    }

    if !request.body.is_empty() {
        out.push_str(&format!("{}\n\n", String::from_utf8_lossy(&request.body)));
    }
    out.push_str("----- End -----\n");
    out
}

fn format_response(response: &MaterializedResponse) -> String {
    let mut out = String::from("\n----- Response -----\n");
    // BTreeMap iteration is already sorted by header name.
    for (name, value) in &response.headers {
        out.push_str(&format!("{name}: {value}\n"));
    }
    out.push_str(&format!(
        "\n{}\n",
        String::from_utf8_lossy(&response.body)
    ));
    out.push_str("----- End -----\n");
    out
}
