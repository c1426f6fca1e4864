//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The URL scheme used to reach the store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Protocol {
    /// Plain HTTP. Useful for local mock servers.
    Http,
    /// HTTPS (the default).
    #[default]
    Https,
}

impl Protocol {
    /// Returns the scheme string (`"http"` or `"https"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            _ => Err(ConfigError::InvalidProtocol {
                protocol: s.to_string(),
            }),
        }
    }
}

/// A validated store address (host name, optionally with a port).
///
/// Surrounding whitespace and trailing slashes are stripped.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::StoreHost;
///
/// let host = StoreHost::new("store.example.com/").unwrap();
/// assert_eq!(host.as_ref(), "store.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreHost(String);

impl StoreHost {
    /// Creates a new validated store host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStoreHost`] if nothing remains after trimming.
    pub fn new(host: impl Into<String>) -> Result<Self, ConfigError> {
        let host = host.into();
        let host = host.trim().trim_end_matches('/');
        if host.is_empty() {
            return Err(ConfigError::EmptyStoreHost);
        }
        Ok(Self(host.to_string()))
    }
}

impl AsRef<str> for StoreHost {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for StoreHost {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StoreHost {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// The username of a BigCommerce API account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUser(String);

impl ApiUser {
    /// Creates a new validated API user.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiUser`] if the user is empty.
    pub fn new(user: impl Into<String>) -> Result<Self, ConfigError> {
        let user = user.into();
        if user.is_empty() {
            return Err(ConfigError::EmptyApiUser);
        }
        Ok(Self(user))
    }
}

impl AsRef<str> for ApiUser {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A BigCommerce API key (the password half of Basic authentication).
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `ApiToken(*****)`.
///
/// ```rust
/// use bigcommerce_api::ApiToken;
///
/// let token = ApiToken::new("secret").unwrap();
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}
