//! HTTP connection layer for BigCommerce API communication.
//!
//! This module provides the single authenticated request primitive every
//! resource is built on.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Connection`]: Turns `(method, path, body)` into one authenticated exchange
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`HttpResponse`]: A raw response (status, headers, decoded body)
//! - [`ApiResponse`]: Success or remote error, decided by status
//! - [`ConnectionError`]: Failures raised before or during an exchange
//!
//! # Wire Contract
//!
//! Every request carries `Authorization: Basic base64(user:key)` and
//! `Accept: application/json;0.9`. Requests with a body add
//! `Content-Type: application/json`. Paths are suffixed with `.json`.
//!
//! Status 200 and 201 are successes; any other status is returned as
//! [`ApiResponse::Error`] rather than raised.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::clients::{ApiResponse, Connection, HttpMethod};
//!
//! let connection = Connection::new(config)?;
//! match connection.request_json(HttpMethod::Get, "/products", None).await? {
//!     ApiResponse::Success(products) => println!("{products}"),
//!     ApiResponse::Error { status, body } => println!("{status}: {body}"),
//! }
//! ```

mod connection;
mod errors;
mod http_request;
mod http_response;

pub use connection::{Connection, ACCEPT_HEADER_VALUE};
pub use errors::ConnectionError;
pub use http_request::{HttpMethod, JSON_CONTENT_TYPE};
pub use http_response::{ApiResponse, HttpResponse, ERROR_KEY};
