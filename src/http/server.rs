//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with catch-all dispatch
//! - Wire up middleware (request ID, trace, timeout, body limit)
//! - Snapshot the routing table once per request
//! - Map resolution and materialization outcomes to 200/404/405/500
//! - Feed every request/response pair to the audit log before sending

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::extensions::registry::ExtensionRegistry;
use crate::http::request::{InboundRequest, MakeRequestUuid, X_REQUEST_ID};
use crate::observability::audit::AuditLog;
use crate::response::materializer::materialize;
use crate::routing::resolver::Resolution;
use crate::routing::table::RouteTable;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    /// The published routing table; swapped atomically on reload.
    pub table: Arc<ArcSwap<RouteTable>>,
    pub extensions: Arc<ExtensionRegistry>,
    pub audit: Arc<AuditLog>,
}

/// HTTP server for the mock endpoints.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router.
    ///
    /// Routes are not registered per configured path: the table changes on
    /// reload, so a catch-all consults the current snapshot instead.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch))
            .route("/", any(dispatch))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
                    .layer(TimeoutLayer::new(REQUEST_TIMEOUT)),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Catch-all handler: resolve, materialize, audit, answer.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let (parts, body) = request.into_parts();
    let body = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(request_id = %request_id, error = %e, "Failed to buffer request body");
            return (StatusCode::BAD_REQUEST, "invalid request body").into_response();
        }
    };

    let inbound = InboundRequest {
        method: parts.method,
        uri: parts.uri,
        version: parts.version,
        headers: parts.headers,
        body,
    };
    let path = inbound.uri.path();

    tracing::debug!(
        request_id = %request_id,
        method = %inbound.method,
        path = %path,
        "Dispatching request"
    );

    // One snapshot per request: a reload that lands mid-request never
    // changes what this request resolves against.
    let table = state.table.load_full();

    match table.resolve(path, &inbound.method) {
        Resolution::Matched(spec) => {
            match materialize(spec, &inbound, &state.extensions).await {
                Ok(response) => {
                    state.audit.record(&inbound, Some(&response));
                    response.into_response()
                }
                Err(e) => {
                    tracing::error!(
                        request_id = %request_id,
                        path = %path,
                        error = %e,
                        "Response materialization failed"
                    );
                    state.audit.record(&inbound, None);
                    (StatusCode::INTERNAL_SERVER_ERROR, "response materialization failed")
                        .into_response()
                }
            }
        }
        Resolution::NoMethod => {
            tracing::warn!(
                request_id = %request_id,
                method = %inbound.method,
                path = %path,
                "Method not declared for route"
            );
            state.audit.record(&inbound, None);
            (StatusCode::METHOD_NOT_ALLOWED, "method not allowed").into_response()
        }
        Resolution::NoRoute => {
            tracing::warn!(request_id = %request_id, path = %path, "No route matched");
            state.audit.record(&inbound, None);
            (StatusCode::NOT_FOUND, "no matching route").into_response()
        }
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
