//! Resource-level error types for REST operations.
//!
//! This module contains [`ResourceError`], which extends
//! [`ConnectionError`](crate::clients::ConnectionError) with the failures that
//! only make sense once a resource is involved.
//!
//! # Error Handling
//!
//! - [`ResourceError::MissingIdentifier`]: update/delete with no id to target
//! - [`ResourceError::Remote`]: the API answered with a status other than 200/201
//! - [`ResourceError::UnexpectedShape`]: a success body that cannot be wrapped
//! - [`ResourceError::Connection`]: wrapped connection failure
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::ResourceError;
//!
//! match products.get_by_id(123).await {
//!     Ok(product) => println!("Found: {:?}", product.field("name")),
//!     Err(ResourceError::Remote { status, body, .. }) => {
//!         println!("Rejected with {status}: {body}");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::clients::ConnectionError;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::rest::ResourceError;
/// use serde_json::json;
///
/// let error = ResourceError::Remote {
///     resource: "products",
///     status: 404,
///     body: json!([{"status": 404, "message": "The requested resource was not found."}]),
/// };
/// assert!(error.is_not_found());
/// assert!(error.to_string().contains("products"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No id was supplied and none was previously selected.
    #[error("Cannot {operation} {resource}: no id supplied and none selected")]
    MissingIdentifier {
        /// The collection name (e.g., "products").
        resource: &'static str,
        /// The operation being attempted ("update" or "delete").
        operation: &'static str,
    },

    /// The API rejected the request.
    #[error("{resource} request failed with status {status}: {body}")]
    Remote {
        /// The collection name.
        resource: &'static str,
        /// The HTTP status code.
        status: u16,
        /// The decoded error payload.
        body: Value,
    },

    /// A success body did not have the shape the operation wraps.
    #[error("Expected a JSON {expected} from {resource}")]
    UnexpectedShape {
        /// The collection name.
        resource: &'static str,
        /// The expected JSON kind ("object" or "array").
        expected: &'static str,
    },

    /// A connection-level error occurred.
    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

impl ResourceError {
    /// Returns the remote error payload, if this is a [`ResourceError::Remote`].
    #[must_use]
    pub const fn remote_body(&self) -> Option<&Value> {
        match self {
            Self::Remote { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns `true` if the API answered 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Remote { status: 404, .. })
    }
}
