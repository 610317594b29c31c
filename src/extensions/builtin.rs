//! Bundled extension units.

use std::sync::Arc;

use crate::extensions::registry::{BoxError, Extension};
use crate::http::request::InboundRequest;

/// Replies with the request body, decoded lossily as UTF-8.
struct EchoBody;

impl Extension for EchoBody {
    fn response(&self, request: &InboundRequest) -> Result<String, BoxError> {
        Ok(String::from_utf8_lossy(&request.body).into_owned())
    }
}

/// Replies with a small random number, for demonstrating computed bodies.
struct RandomNumber;

impl Extension for RandomNumber {
    fn response(&self, _request: &InboundRequest) -> Result<String, BoxError> {
        Ok(format!("Dynamic response {}", fastrand::u8(0..=10)))
    }
}

pub(crate) fn units() -> Vec<(&'static str, Arc<dyn Extension>)> {
    vec![
        ("echo", Arc::new(EchoBody) as Arc<dyn Extension>),
        ("random", Arc::new(RandomNumber) as Arc<dyn Extension>),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use axum::http::{HeaderMap, Method, Uri, Version};

    fn request_with_body(body: &'static str) -> InboundRequest {
        InboundRequest {
            method: Method::POST,
            uri: Uri::from_static("/t"),
            version: Version::HTTP_11,
            headers: HeaderMap::new(),
            body: Bytes::from_static(body.as_bytes()),
        }
    }

    #[test]
    fn echo_returns_the_request_body() {
        let echo = EchoBody;
        assert_eq!(
            echo.response(&request_with_body("ping")).unwrap(),
            "ping"
        );
    }

    #[test]
    fn random_stays_in_range() {
        let random = RandomNumber;
        for _ in 0..50 {
            let body = random.response(&request_with_body("")).unwrap();
            let n: u8 = body
                .strip_prefix("Dynamic response ")
                .unwrap()
                .parse()
                .unwrap();
            assert!(n <= 10);
        }
    }
}
