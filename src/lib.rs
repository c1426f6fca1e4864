//! # BigCommerce API Rust Client
//!
//! A declarative client for the BigCommerce V2 REST API: named collections
//! reachable at predictable paths, authenticated uniformly with HTTP Basic
//! auth, exchanging JSON.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ConnectionConfig`] and [`ConnectionConfigBuilder`]
//! - A single authenticated request primitive, [`Connection`]
//! - An explicit success/remote-error union, [`ApiResponse`]
//! - Generic CRUD resources with identity tracking via [`rest::Resource`]
//! - Declarations for products, orders, customers and the other V2 collections
//!
//! ## Quick Start
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
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use bigcommerce_api::{Connection, ConnectionConfig};
//! use bigcommerce_api::rest::resources::Product;
//! use bigcommerce_api::rest::FilterSet;
//! use serde_json::json;
//!
//! let connection = Connection::new(ConnectionConfig::from_env()?)?;
//!
//! // List
//! let products = Product::new(&connection)
//!     .get(Some(&FilterSet::new().with("limit", 10)))
//!     .await?;
//!
//! // Fetch, then update the fetched object in place
//! let product = Product::new(&connection).get_by_id(42).await?;
//! let product = product.update(Some(&json!({"name": "Renamed"})), None).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: a [`Connection`] is passed explicitly to every resource
//! - **Remote errors are values**: non-200/201 responses come back as [`ApiResponse::Error`]
//! - **Opaque payloads**: resource fields are an ordered JSON mapping, never a fixed schema
//! - **One exchange per call**: no retries, no pagination, no caching

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    ApiToken, ApiUser, ConnectionConfig, ConnectionConfigBuilder, Protocol, StoreHost,
};
pub use error::ConfigError;

pub use clients::{ApiResponse, Connection, ConnectionError, HttpMethod, HttpResponse};
pub use rest::{FilterSet, Resource, ResourceError, ResourceId, SingletonResource};
