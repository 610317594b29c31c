//! Body materialization for matched responses.

use std::collections::BTreeMap;
use std::path::PathBuf;

use axum::body::Bytes;
use thiserror::Error;

use crate::config::schema::{ResponsePayload, ResponseSpec};
use crate::extensions::registry::{ExtensionError, ExtensionRegistry};
use crate::http::request::InboundRequest;
use crate::response::mime::content_type_for;

/// Final headers and body for one request, ready to send and to audit.
#[derive(Debug, Clone)]
pub struct MaterializedResponse {
    pub headers: BTreeMap<String, String>,
    pub body: Bytes,
}

#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("failed to read response file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Extension(#[from] ExtensionError),
}

/// Produce the headers and body declared by a response spec.
///
/// Static bodies cannot fail. File and script bodies fail per-request only;
/// the caller maps the error to an internal-error response.
pub async fn materialize(
    spec: &ResponseSpec,
    request: &InboundRequest,
    extensions: &ExtensionRegistry,
) -> Result<MaterializedResponse, MaterializeError> {
    let mut headers = spec.headers.clone();

    let body = match &spec.payload {
        ResponsePayload::Static { body } => Bytes::from(body.clone()),

        ResponsePayload::File { file_path } => {
            let bytes = tokio::fs::read(file_path).await.map_err(|source| {
                MaterializeError::FileRead {
                    path: file_path.clone(),
                    source,
                }
            })?;
            let explicit = headers.keys().any(|k| k.eq_ignore_ascii_case("content-type"));
            if !explicit {
                headers.insert(
                    "Content-Type".to_string(),
                    content_type_for(file_path).to_string(),
                );
            }
            Bytes::from(bytes)
        }

        ResponsePayload::Script { script } => {
            let unit = extensions.resolve(script)?;
            let body = unit
                .response(request)
                .map_err(|source| ExtensionError::Runtime {
                    identifier: script.clone(),
                    source,
                })?;
            Bytes::from(body)
        }
    };

    Ok(MaterializedResponse { headers, body })
}
