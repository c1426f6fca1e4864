//! HTTP method handling for the BigCommerce API client.
//!
//! This module provides [`HttpMethod`] and the rule the connection uses to
//! pick the verb actually sent on the wire.

use std::fmt;

/// Content type sent alongside JSON request bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP methods supported by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for listing or fetching resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case wire name of the method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Resolves the verb dispatched for a request.
    ///
    /// A request carrying a body is sent as PUT when PUT was requested and as
    /// POST otherwise, so GET or DELETE with a body go out as POST. A request
    /// without a body is sent as DELETE when DELETE was requested and as GET
    /// otherwise.
    ///
    /// ```rust
    /// use bigcommerce_api::HttpMethod;
    ///
    /// assert_eq!(HttpMethod::Put.dispatched(true), HttpMethod::Put);
    /// assert_eq!(HttpMethod::Get.dispatched(true), HttpMethod::Post);
    /// assert_eq!(HttpMethod::Delete.dispatched(false), HttpMethod::Delete);
    /// assert_eq!(HttpMethod::Post.dispatched(false), HttpMethod::Get);
    /// ```
    #[must_use]
    pub const fn dispatched(self, has_body: bool) -> Self {
        match (has_body, self) {
            (true, Self::Put) => Self::Put,
            (true, _) => Self::Post,
            (false, Self::Delete) => Self::Delete,
            (false, _) => Self::Get,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
