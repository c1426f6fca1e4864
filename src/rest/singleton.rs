//! Read-only endpoints that return one decoded document.
//!
//! Singleton endpoints (server time, store information, reference lists)
//! have no per-object CRUD: `get` takes no filters and returns the decoded
//! body as-is instead of wrapping it.

use std::fmt;
use std::marker::PhantomData;

use serde_json::Value;

use crate::clients::{Connection, HttpMethod};
use crate::rest::{ResourceDescriptor, ResourceError};

/// A singleton-style endpoint.
pub trait Singleton {
    /// The endpoint's name and URL suffix.
    const DESCRIPTOR: ResourceDescriptor;
}

/// Handle to singleton endpoint `K`.
pub struct SingletonResource<'c, K: Singleton> {
    connection: &'c Connection,
    kind: PhantomData<fn() -> K>,
}

impl<'c, K: Singleton> SingletonResource<'c, K> {
    /// Creates a handle bound to `connection`.
    #[must_use]
    pub const fn new(connection: &'c Connection) -> Self {
        Self {
            connection,
            kind: PhantomData,
        }
    }

    /// Returns the endpoint declaration.
    #[must_use]
    pub const fn descriptor() -> ResourceDescriptor {
        K::DESCRIPTOR
    }

    /// Fetches the endpoint, returning the decoded body untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Remote`] if the API rejects the request or
    /// [`ResourceError::Connection`] for connection failures.
    pub async fn get(&self) -> Result<Value, ResourceError> {
        let response = self
            .connection
            .request_json(HttpMethod::Get, K::DESCRIPTOR.url_suffix, None)
            .await?;
        response
            .into_result()
            .map_err(|(status, body)| ResourceError::Remote {
                resource: K::DESCRIPTOR.collection_name,
                status,
                body,
            })
    }
}

impl<K: Singleton> Clone for SingletonResource<'_, K> {
    fn clone(&self) -> Self {
        Self::new(self.connection)
    }
}

impl<K: Singleton> fmt::Debug for SingletonResource<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingletonResource")
            .field("endpoint", &K::DESCRIPTOR.collection_name)
            .finish_non_exhaustive()
    }
}
