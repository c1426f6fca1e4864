//! Error types for the BigCommerce API client.
//!
//! This module contains error types used throughout the crate for
//! configuration and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Request-time failures (a missing store address or
//! missing credentials) live in [`ConnectionError`](crate::clients::ConnectionError)
//! because a configuration is allowed to be incomplete until a request is made.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{ApiUser, ConfigError};
//!
//! let result = ApiUser::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiUser)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Store host cannot be empty.
    #[error("Store host cannot be empty. Please provide the store address (e.g., 'store.example.com').")]
    EmptyStoreHost,

    /// API user cannot be empty.
    #[error("API user cannot be empty. Please provide the username of the API account.")]
    EmptyApiUser,

    /// API token cannot be empty.
    #[error("API key cannot be empty. Please provide a valid BigCommerce API key.")]
    EmptyApiToken,

    /// Protocol is not supported.
    #[error("Invalid protocol '{protocol}'. Expected 'http' or 'https'.")]
    InvalidProtocol {
        /// The protocol that was provided.
        protocol: String,
    },

    /// Base path is malformed.
    #[error("Invalid base path '{path}'. Expected an empty path or one starting with '/' and not ending with '/' (e.g., '/api/v2').")]
    InvalidBasePath {
        /// The base path that was provided.
        path: String,
    },

    /// An environment variable held an unusable value.
    #[error("Invalid value in environment variable '{variable}': {reason}")]
    InvalidEnvironment {
        /// The name of the offending variable.
        variable: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}
