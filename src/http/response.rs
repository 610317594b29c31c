//! Response assembly.
//!
//! Turns a materialized response into the transport's response type. The
//! implied status is 200; error statuses are chosen by the dispatch handler.

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::response::materializer::MaterializedResponse;

impl IntoResponse for MaterializedResponse {
    fn into_response(self) -> Response {
        let mut builder = Response::builder().status(StatusCode::OK);
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        match builder.body(Body::from(self.body)) {
            Ok(response) => response,
            // Headers are vetted at config validation; reaching this means a
            // spec bypassed the loader.
            Err(e) => {
                tracing::error!(error = %e, "Failed to assemble response");
                (StatusCode::INTERNAL_SERVER_ERROR, "response assembly failed").into_response()
            }
        }
    }
}
