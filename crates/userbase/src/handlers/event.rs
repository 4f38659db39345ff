//! HTTP-shaped inbound events and outbound responses.
//!
//! The user handler works on these plain values instead of a web framework's
//! request type, so the same dispatch logic serves the axum router and tests.

use std::collections::HashMap;

use axum::{
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
};

/// An inbound request: method, query-string parameters and raw body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, String>,
    pub body: String,
}

impl ApiRequest {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            path: "/".to_string(),
            query: HashMap::new(),
            body: String::new(),
        }
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns a query parameter, treating an empty value as absent.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// An outbound response: status, headers and a JSON (or empty) body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status, self.headers, self.body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param_ignores_empty_values() {
        let request = ApiRequest::new(Method::GET)
            .with_query("email", "")
            .with_query("limit", "5");

        assert_eq!(request.query_param("email"), None);
        assert_eq!(request.query_param("limit"), Some("5"));
        assert_eq!(request.query_param("missing"), None);
    }

    #[test]
    fn test_builder_defaults() {
        let request = ApiRequest::new(Method::DELETE);
        assert_eq!(request.path, "/");
        assert!(request.query.is_empty());
        assert!(request.body.is_empty());
    }
}
