//! Declarative REST resources for the BigCommerce API.
//!
//! This module turns a declared "collection name + URL suffix" into full CRUD
//! semantics on top of [`Connection`](crate::clients::Connection):
//!
//! - **[`Collection`] / [`Singleton`]**: Declarations carrying a [`ResourceDescriptor`]
//! - **[`Resource<K>`](Resource)**: One object's fields plus CRUD and identity tracking
//! - **[`SingletonResource<K>`](SingletonResource)**: Raw `get` for singleton endpoints
//! - **[`FilterSet`]**: Ordered list filters rendered into a query string
//! - **[`ResourceError`]**: Semantic error types for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::rest::resources::{Order, Product};
//! use bigcommerce_api::rest::FilterSet;
//! use serde_json::json;
//!
//! // GET /products.json?limit=10
//! let products = Product::new(&connection)
//!     .get(Some(&FilterSet::new().with("limit", 10)))
//!     .await?;
//!
//! // GET /products/42.json, then PUT /products/42.json
//! let product = Product::new(&connection).get_by_id(42).await?;
//! let renamed = product.update(Some(&json!({"name": "x"})), None).await?;
//!
//! // POST /products.json
//! let created = Product::new(&connection)
//!     .create(&json!({"name": "New", "price": "9.99"}))
//!     .await?;
//!
//! // DELETE /orders/7.json, raw outcome
//! let outcome = Order::new(&connection).delete(Some(7.into())).await?;
//! ```

mod errors;
mod filters;
mod resource;
mod singleton;

pub mod resources;

pub use errors::ResourceError;
pub use filters::{filter_query_string, FilterSet};
pub use resource::{Collection, Fields, Resource, ResourceDescriptor, ResourceId};
pub use singleton::{Singleton, SingletonResource};
