//! The seam between generated operations and the network.

use std::time::Duration;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;

use crate::{Method, TransportError};

/// A fully built request, as handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Base URL, expanded path and query string.
    pub url: String,
    /// Expanded path without base URL or query.
    pub path: String,
    /// Decoded query pairs in send order.
    pub query: Vec<(String, String)>,
    pub headers: IndexMap<String, String>,
    /// JSON body, present only for operations that take one.
    pub body: Option<Value>,
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// First query value for `key`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A response with its body already normalized to JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Value,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Value>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Build a response from raw body text; see [`normalize_body`].
    pub fn from_text(status: u16, text: &str) -> Self {
        Self::new(status, normalize_body(text))
    }
}

/// JSON text is parsed; blank text is `null`; anything else stays a string.
pub fn normalize_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Sends requests for a [`Client`](crate::Client).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Used when no transport has been configured.
#[cfg(not(feature = "reqwest"))]
#[derive(Debug, Default)]
pub(crate) struct NoTransport;

#[cfg(not(feature = "reqwest"))]
#[async_trait]
impl Transport for NoTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(TransportError::Other("no transport configured".into()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_normalize_body() {
        assert_eq!(normalize_body(""), Value::Null);
        assert_eq!(normalize_body("  \n"), Value::Null);
        assert_eq!(normalize_body("{\"id\":\"b1\"}"), json!({"id": "b1"}));
        assert_eq!(normalize_body("plain text"), json!("plain text"));
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let request = HttpRequest {
            method: Method::Get,
            url: "http://api.test/phones?country=US".into(),
            path: "/phones".into(),
            query: vec![("country".into(), "US".into())],
            headers: IndexMap::from([("Authorization".to_string(), "Bearer t".to_string())]),
            body: None,
            timeout: None,
        };
        assert_eq!(request.header("authorization"), Some("Bearer t"));
        assert_eq!(request.query_value("country"), Some("US"));
        assert_eq!(request.query_value("active"), None);
    }
}
