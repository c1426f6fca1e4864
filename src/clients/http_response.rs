//! HTTP response types for the BigCommerce API client.
//!
//! [`HttpResponse`] is the raw exchange result; [`ApiResponse`] is the
//! normalized success/remote-error shape every JSON request resolves to.

use std::collections::HashMap;

use serde_json::Value;

/// Key under which a remote error body is nested in the legacy JSON shape.
pub const ERROR_KEY: &str = "Error";

/// A raw HTTP response from the API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lower-cased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded response body (`Null` when the body was empty).
    pub body: Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status is one the API uses for success (200 or 201).
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.code, 200 | 201)
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// The outcome of a JSON request that reached the server.
///
/// A remote rejection is a value, not an `Err`: callers inspect the variant.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ApiResponse;
/// use serde_json::json;
///
/// let response = ApiResponse::Error { status: 404, body: json!([{"message": "not found"}]) };
/// assert!(response.is_error());
/// assert_eq!(
///     response.to_legacy_json(),
///     json!({"Error": [{"message": "not found"}]})
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse {
    /// Status 200 or 201: the decoded body, unmodified.
    Success(Value),
    /// Any other status: the decoded error body.
    Error {
        /// The HTTP status code.
        status: u16,
        /// The decoded error payload.
        body: Value,
    },
}

impl ApiResponse {
    /// Classifies a raw response by status.
    #[must_use]
    pub fn from_http_response(response: HttpResponse) -> Self {
        if response.is_ok() {
            Self::Success(response.body)
        } else {
            Self::Error {
                status: response.code,
                body: response.body,
            }
        }
    }

    /// Returns `true` for [`ApiResponse::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`ApiResponse::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Returns the decoded body regardless of outcome.
    #[must_use]
    pub const fn body(&self) -> &Value {
        match self {
            Self::Success(body) | Self::Error { body, .. } => body,
        }
    }

    /// Converts into a `Result`, with the remote error as `(status, body)`.
    ///
    /// # Errors
    ///
    /// Returns `Err((status, body))` for [`ApiResponse::Error`].
    pub fn into_result(self) -> Result<Value, (u16, Value)> {
        match self {
            Self::Success(body) => Ok(body),
            Self::Error { status, body } => Err((status, body)),
        }
    }

    /// Renders the single-value shape: the body itself on success,
    /// `{"Error": body}` otherwise.
    #[must_use]
    pub fn to_legacy_json(&self) -> Value {
        match self {
            Self::Success(body) => body.clone(),
            Self::Error { body, .. } => {
                let mut wrapper = serde_json::Map::new();
                wrapper.insert(ERROR_KEY.to_string(), body.clone());
                Value::Object(wrapper)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(code: u16, body: Value) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body)
    }

    #[test]
    fn test_only_200_and_201_are_success() {
        assert!(response(200, Value::Null).is_ok());
        assert!(response(201, Value::Null).is_ok());
        assert!(!response(204, Value::Null).is_ok());
        assert!(!response(202, Value::Null).is_ok());
        assert!(!response(404, Value::Null).is_ok());
    }

    #[test]
    fn test_success_passes_body_through_unmodified() {
        let body = json!([{"id": 1, "name": "Shirt"}]);
        let api = ApiResponse::from_http_response(response(200, body.clone()));
        assert_eq!(api, ApiResponse::Success(body.clone()));
        assert_eq!(api.to_legacy_json(), body);
    }

    #[test]
    fn test_failure_wraps_body_under_error_key() {
        let body = json!([{"status": 400, "message": "bad field"}]);
        let api = ApiResponse::from_http_response(response(400, body.clone()));
        assert_eq!(
            api,
            ApiResponse::Error {
                status: 400,
                body: body.clone()
            }
        );
        assert_eq!(api.to_legacy_json(), json!({ "Error": body }));
    }

    #[test]
    fn test_into_result_splits_outcomes() {
        assert_eq!(
            ApiResponse::Success(json!({"a": 1})).into_result(),
            Ok(json!({"a": 1}))
        );
        assert_eq!(
            ApiResponse::Error {
                status: 500,
                body: Value::Null
            }
            .into_result(),
            Err((500, Value::Null))
        );
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc".to_string()]);
        let response = HttpResponse::new(200, headers, Value::Null);
        assert_eq!(response.header("X-Request-Id"), Some("abc"));
        assert_eq!(response.header("missing"), None);
    }
}
