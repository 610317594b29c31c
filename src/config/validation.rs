//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Detect duplicate paths and duplicate methods under one path
//! - Check value ranges (port positive, non-empty responses/methods)
//! - Vet header names and values with the transport's own parser
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: MockConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into the system, at startup and reload

use std::collections::HashSet;

use axum::http::header::{HeaderName, HeaderValue};
use thiserror::Error;

use crate::config::schema::{Method, MockConfig};

/// A single semantic violation found in a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0}")]
    Structure(String),

    #[error("port must be a positive integer")]
    InvalidPort,

    #[error("duplicate route path {0:?}")]
    DuplicatePath(String),

    #[error("route {0:?} declares no responses")]
    NoResponses(String),

    #[error("route {0:?} has a response with an empty method list")]
    NoMethods(String),

    #[error("method {method} is declared more than once for route {path:?}")]
    DuplicateMethod { path: String, method: Method },

    #[error("route {path:?} has an invalid header name {name:?}")]
    InvalidHeaderName { path: String, name: String },

    #[error("route {path:?} has an invalid value for header {name:?}")]
    InvalidHeaderValue { path: String, name: String },
}

/// Check every semantic invariant of the data model.
///
/// Collects all violations; a document with any violation is rejected as a
/// whole.
pub fn validate(config: &MockConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.port == 0 {
        errors.push(ValidationError::InvalidPort);
    }

    let mut paths = HashSet::new();
    for route in &config.routes {
        if !paths.insert(route.path.as_str()) {
            errors.push(ValidationError::DuplicatePath(route.path.clone()));
        }

        if route.responses.is_empty() {
            errors.push(ValidationError::NoResponses(route.path.clone()));
        }

        let mut methods = HashSet::new();
        for response in &route.responses {
            if response.methods.is_empty() {
                errors.push(ValidationError::NoMethods(route.path.clone()));
            }
            for method in &response.methods {
                if !methods.insert(*method) {
                    errors.push(ValidationError::DuplicateMethod {
                        path: route.path.clone(),
                        method: *method,
                    });
                }
            }

            for (name, value) in &response.headers {
                if HeaderName::try_from(name.as_str()).is_err() {
                    errors.push(ValidationError::InvalidHeaderName {
                        path: route.path.clone(),
                        name: name.clone(),
                    });
                } else if HeaderValue::from_str(value).is_err() {
                    errors.push(ValidationError::InvalidHeaderValue {
                        path: route.path.clone(),
                        name: name.clone(),
                    });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
