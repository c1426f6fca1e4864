//! Configuration types for the BigCommerce API client.
//!
//! This module provides the configuration that feeds a
//! [`Connection`](crate::clients::Connection): where the store lives and how
//! to authenticate against it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ConnectionConfig`]: Protocol, host, base path, and credential pair
//! - [`ConnectionConfigBuilder`]: A builder for constructing [`ConnectionConfig`] instances
//! - [`StoreHost`], [`ApiUser`], [`ApiToken`]: Validated newtypes
//! - [`Protocol`]: `http` or `https`
//!
//! Host and credentials are optional at build time. Their absence is reported
//! when a request is attempted, as
//! [`ConnectionError::MissingStoreAddress`](crate::clients::ConnectionError::MissingStoreAddress)
//! and [`ConnectionError::MissingCredentials`](crate::clients::ConnectionError::MissingCredentials).
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{ApiToken, ApiUser, ConnectionConfig, StoreHost};
//!
//! let config = ConnectionConfig::builder()
//!     .host(StoreHost::new("store.example.com").unwrap())
//!     .username(ApiUser::new("admin").unwrap())
//!     .api_key(ApiToken::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_path(), "/api/v2");
//! ```

mod newtypes;

pub use newtypes::{ApiToken, ApiUser, Protocol, StoreHost};

use std::time::Duration;

use crate::error::ConfigError;

/// Base path of the V2 API, used when none is configured.
pub const DEFAULT_BASE_PATH: &str = "/api/v2";

/// Environment variable holding the store host.
pub const ENV_HOST: &str = "BIGCOMMERCE_HOST";
/// Environment variable holding the API username.
pub const ENV_USER: &str = "BIGCOMMERCE_USER";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "BIGCOMMERCE_API_KEY";
/// Environment variable overriding the protocol.
pub const ENV_PROTOCOL: &str = "BIGCOMMERCE_PROTOCOL";
/// Environment variable overriding the base path.
pub const ENV_BASE_PATH: &str = "BIGCOMMERCE_BASE_PATH";

/// Transport configuration for a [`Connection`](crate::clients::Connection).
///
/// # Thread Safety
///
/// `ConnectionConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ConnectionConfig {
    protocol: Protocol,
    host: Option<StoreHost>,
    base_path: String,
    username: Option<ApiUser>,
    api_key: Option<ApiToken>,
    timeout: Option<Duration>,
}

impl ConnectionConfig {
    /// Creates a new builder for constructing a `ConnectionConfig`.
    #[must_use]
    pub fn builder() -> ConnectionConfigBuilder {
        ConnectionConfigBuilder::new()
    }

    /// Loads configuration from the process environment.
    ///
    /// Reads [`ENV_HOST`], [`ENV_USER`], [`ENV_API_KEY`] and the optional
    /// [`ENV_PROTOCOL`] and [`ENV_BASE_PATH`]. Empty variables count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvironment`] if the protocol or base
    /// path variables hold an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// This is what [`from_env`](Self::from_env) uses; it exists so callers can
    /// feed values from any key/value source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvironment`] if the protocol or base
    /// path values are unusable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut builder = Self::builder();
        if let Some(host) = read(ENV_HOST) {
            builder = builder.host(StoreHost::new(host)?);
        }
        if let Some(user) = read(ENV_USER) {
            builder = builder.username(ApiUser::new(user)?);
        }
        if let Some(key) = read(ENV_API_KEY) {
            builder = builder.api_key(ApiToken::new(key)?);
        }
        if let Some(protocol) = read(ENV_PROTOCOL) {
            let protocol = protocol
                .parse()
                .map_err(|e: ConfigError| ConfigError::InvalidEnvironment {
                    variable: ENV_PROTOCOL,
                    reason: e.to_string(),
                })?;
            builder = builder.protocol(protocol);
        }
        if let Some(base_path) = read(ENV_BASE_PATH) {
            validate_base_path(&base_path).map_err(|e| ConfigError::InvalidEnvironment {
                variable: ENV_BASE_PATH,
                reason: e.to_string(),
            })?;
            builder = builder.base_path(base_path);
        }

        builder.build()
    }

    /// Returns the protocol.
    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Returns the store host, if configured.
    #[must_use]
    pub const fn host(&self) -> Option<&StoreHost> {
        self.host.as_ref()
    }

    /// Returns the base path (e.g., `/api/v2`).
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the API username, if configured.
    #[must_use]
    pub const fn username(&self) -> Option<&ApiUser> {
        self.username.as_ref()
    }

    /// Returns the API key, if configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiToken> {
        self.api_key.as_ref()
    }

    /// Returns the per-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns `true` if at least one half of the credential pair is set.
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.username.is_some() || self.api_key.is_some()
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            protocol: Protocol::default(),
            host: None,
            base_path: DEFAULT_BASE_PATH.to_string(),
            username: None,
            api_key: None,
            timeout: None,
        }
    }
}

// Verify ConnectionConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConnectionConfig>();
};

/// Builder for constructing [`ConnectionConfig`] instances.
///
/// # Defaults
///
/// - `protocol`: `https`
/// - `base_path`: `/api/v2`
/// - `host`, `username`, `api_key`, `timeout`: `None`
#[derive(Debug, Default)]
pub struct ConnectionConfigBuilder {
    protocol: Option<Protocol>,
    host: Option<StoreHost>,
    base_path: Option<String>,
    username: Option<ApiUser>,
    api_key: Option<ApiToken>,
    timeout: Option<Duration>,
}

impl ConnectionConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the protocol.
    #[must_use]
    pub const fn protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    /// Sets the store host.
    #[must_use]
    pub fn host(mut self, host: StoreHost) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the base path prefixed to every resource path.
    #[must_use]
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// Sets the API username.
    #[must_use]
    pub fn username(mut self, username: ApiUser) -> Self {
        self.username = Some(username);
        self
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, api_key: ApiToken) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Bounds every request to `timeout`.
    ///
    /// Without a timeout a stalled request waits indefinitely.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`ConnectionConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBasePath`] if the base path is non-empty
    /// and either lacks a leading `/` or has a trailing `/`.
    pub fn build(self) -> Result<ConnectionConfig, ConfigError> {
        let base_path = self
            .base_path
            .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());
        validate_base_path(&base_path)?;

        Ok(ConnectionConfig {
            protocol: self.protocol.unwrap_or_default(),
            host: self.host,
            base_path,
            username: self.username,
            api_key: self.api_key,
            timeout: self.timeout,
        })
    }
}

fn validate_base_path(path: &str) -> Result<(), ConfigError> {
    if path.is_empty() || (path.starts_with('/') && !path.ends_with('/')) {
        Ok(())
    } else {
        Err(ConfigError::InvalidBasePath {
            path: path.to_string(),
        })
    }
}
