//! Connection-level error types for the BigCommerce API client.
//!
//! These are the failures raised before or during an exchange: a request
//! that cannot be attempted for lack of configuration, a payload that cannot
//! be encoded, or a transport failure. A remote rejection is *not* an error
//! here; it comes back as [`ApiResponse::Error`](crate::clients::ApiResponse::Error).
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::{ApiResponse, ConnectionError};
//!
//! match connection.request_json(HttpMethod::Get, "/time", None).await {
//!     Ok(ApiResponse::Success(body)) => println!("Server time: {body}"),
//!     Ok(ApiResponse::Error { status, body }) => println!("Rejected ({status}): {body}"),
//!     Err(ConnectionError::MissingStoreAddress) => println!("Configure a host first"),
//!     Err(ConnectionError::MissingCredentials) => println!("Configure credentials first"),
//!     Err(e) => println!("Transport failure: {e}"),
//! }
//! ```

use thiserror::Error;

/// Unified error type for connection operations.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// A request was attempted with no store host configured.
    #[error("No store address was provided")]
    MissingStoreAddress,

    /// A request was attempted with neither a username nor an API key.
    #[error("Must provide authentication")]
    MissingCredentials,

    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The server sent a body that is not valid JSON.
    #[error("Malformed response body (status {status}): {source}")]
    Decode {
        /// The HTTP status code of the response.
        status: u16,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
