//! Response formatting.
//!
//! Every response carries a JSON content type. A body that cannot be
//! serialized is replaced by a fixed 500 error payload.

use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use serde::Serialize;

use super::ApiResponse;

/// Body sent when the real body fails to serialize.
pub const MARSHAL_FAILURE_BODY: &str = r#"{"error":"Failed to marshal response body"}"#;

/// Error payload: `{"error": "..."}`, with the field omitted when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers
}

/// Formats a response. `None` produces an empty body.
pub fn api_response<T: Serialize + ?Sized>(status: StatusCode, body: Option<&T>) -> ApiResponse {
    let Some(body) = body else {
        return ApiResponse {
            status,
            headers: json_headers(),
            body: String::new(),
        };
    };

    match serde_json::to_string(body) {
        Ok(body) => ApiResponse {
            status,
            headers: json_headers(),
            body,
        },
        Err(e) => {
            tracing::error!(error = %e, "Error marshaling response body");
            ApiResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                headers: json_headers(),
                body: MARSHAL_FAILURE_BODY.to_string(),
            }
        }
    }
}

/// Formats a JSON body response.
pub fn json_response<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> ApiResponse {
    api_response(status, Some(body))
}

/// Formats an error response and logs it.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> ApiResponse {
    let message = message.into();
    tracing::warn!(status = %status, message = %message, "API error");
    json_response(status, &ErrorBody::new(message))
}

/// 204 with an empty body.
pub fn no_content() -> ApiResponse {
    api_response::<()>(StatusCode::NO_CONTENT, None)
}

/// 405 for methods the endpoint does not serve.
pub fn method_not_allowed() -> ApiResponse {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

#[cfg(test)]
mod tests {
    use serde::Serializer;

    use super::*;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("boom"))
        }
    }

    fn content_type(response: &ApiResponse) -> &str {
        response
            .headers
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
    }

    #[test]
    fn test_serializes_body() {
        let response = json_response(StatusCode::OK, &serde_json::json!({"a": 1}));
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, r#"{"a":1}"#);
        assert_eq!(content_type(&response), "application/json");
    }

    #[test]
    fn test_absent_body_is_empty() {
        let response = no_content();
        assert_eq!(response.status, StatusCode::NO_CONTENT);
        assert!(response.body.is_empty());
        assert_eq!(content_type(&response), "application/json");
    }

    #[test]
    fn test_serialization_failure_falls_back_to_500() {
        let response = json_response(StatusCode::CREATED, &Unserializable);
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.body, MARSHAL_FAILURE_BODY);
        assert_eq!(content_type(&response), "application/json");
    }

    #[test]
    fn test_error_body_shape() {
        let response = error_response(StatusCode::NOT_FOUND, "User not found");
        assert_eq!(response.body, r#"{"error":"User not found"}"#);

        let empty = serde_json::to_string(&ErrorBody::default()).unwrap();
        assert_eq!(empty, "{}");
    }

    #[test]
    fn test_method_not_allowed() {
        let response = method_not_allowed();
        assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.body, r#"{"error":"Method Not Allowed"}"#);
    }
}
