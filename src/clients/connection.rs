//! The authenticated request primitive for the BigCommerce API.
//!
//! This module provides [`Connection`], the single point through which every
//! resource reaches the remote API.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

use crate::clients::errors::ConnectionError;
use crate::clients::http_request::{HttpMethod, JSON_CONTENT_TYPE};
use crate::clients::http_response::{ApiResponse, HttpResponse};
use crate::config::ConnectionConfig;

/// Value of the `Accept` header sent with every request.
pub const ACCEPT_HEADER_VALUE: &str = "application/json;0.9";

/// An authenticated connection to a store.
///
/// The connection owns the transport configuration and turns
/// `(method, path, body)` into one HTTP exchange. It performs no retries.
///
/// # Thread Safety
///
/// `Connection` is `Send + Sync`. Requests borrow it shared; reconfiguring
/// requires `&mut`, so the configuration cannot change under an in-flight
/// request.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::{ApiToken, ApiUser, Connection, ConnectionConfig, HttpMethod, StoreHost};
///
/// let config = ConnectionConfig::builder()
///     .host(StoreHost::new("store.example.com")?)
///     .username(ApiUser::new("admin")?)
///     .api_key(ApiToken::new("secret")?)
///     .build()?;
/// let connection = Connection::new(config)?;
///
/// let response = connection.request_json(HttpMethod::Get, "/time", None).await?;
/// ```
#[derive(Debug)]
pub struct Connection {
    client: reqwest::Client,
    config: ConnectionConfig,
}

// Verify Connection is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Connection>();
};

impl Connection {
    /// Creates a connection from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::Network`] if the HTTP client cannot be
    /// initialized (e.g., TLS backend failure).
    pub fn new(config: ConnectionConfig) -> Result<Self, ConnectionError> {
        let client = Self::build_client(&config)?;
        Ok(Self { client, config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::Network`] if the HTTP client cannot be
    /// rebuilt. The previous configuration stays active in that case.
    pub fn reconfigure(&mut self, config: ConnectionConfig) -> Result<(), ConnectionError> {
        self.client = Self::build_client(&config)?;
        self.config = config;
        tracing::debug!(
            "Connection reconfigured for host {}",
            self.config
                .host()
                .map_or("<unset>", |host| host.as_ref())
        );
        Ok(())
    }

    fn build_client(config: &ConnectionConfig) -> Result<reqwest::Client, ConnectionError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }

    /// Builds the headers sent with every request.
    ///
    /// A single missing half of the credential pair is sent as an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::MissingCredentials`] if neither a username
    /// nor an API key is configured.
    pub fn build_headers(&self) -> Result<HashMap<String, String>, ConnectionError> {
        if !self.config.has_credentials() {
            return Err(ConnectionError::MissingCredentials);
        }

        let user = self.config.username().map_or("", |user| user.as_ref());
        let key = self.config.api_key().map_or("", |key| key.as_ref());
        let credentials = STANDARD.encode(format!("{user}:{key}"));

        let mut headers = HashMap::new();
        headers.insert("Authorization".to_string(), format!("Basic {credentials}"));
        headers.insert("Accept".to_string(), ACCEPT_HEADER_VALUE.to_string());
        Ok(headers)
    }

    /// Builds the full URL for a resource path.
    ///
    /// `.json` is appended to the path portion, ahead of any query string:
    /// `/products?limit=10` becomes `{protocol}://{host}{base_path}/products.json?limit=10`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::MissingStoreAddress`] if no host is configured.
    pub fn url_for(&self, path: &str) -> Result<String, ConnectionError> {
        let host = self
            .config
            .host()
            .ok_or(ConnectionError::MissingStoreAddress)?;

        let (path, query) = path
            .split_once('?')
            .map_or((path, None), |(path, query)| (path, Some(query)));
        let path = path.trim_start_matches('/');

        let mut url = format!(
            "{}://{}{}/{}.json",
            self.config.protocol(),
            host.as_ref(),
            self.config.base_path(),
            path
        );
        if let Some(query) = query {
            url.push('?');
            url.push_str(query);
        }
        Ok(url)
    }

    /// Sends one request and returns the raw response.
    ///
    /// The verb on the wire follows [`HttpMethod::dispatched`]: with a body,
    /// PUT stays PUT and everything else is sent as POST; without one, DELETE
    /// stays DELETE and everything else is sent as GET.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::MissingStoreAddress`] or
    /// [`ConnectionError::MissingCredentials`] before any network activity,
    /// [`ConnectionError::Serialization`] if the body cannot be encoded,
    /// [`ConnectionError::Decode`] for a non-JSON response body, and
    /// [`ConnectionError::Network`] for transport failures.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<HttpResponse, ConnectionError> {
        let url = self.url_for(path)?;
        let mut headers = self.build_headers()?;

        let dispatched = method.dispatched(body.is_some());
        if dispatched != method {
            tracing::warn!(
                "{} request to {} is being sent as {}",
                method,
                url,
                dispatched
            );
        }

        let mut req_builder = match dispatched {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        if let Some(body) = body {
            let encoded = serde_json::to_string(body).map_err(ConnectionError::Serialization)?;
            headers.insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());
            req_builder = req_builder.body(encoded);
        }

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        tracing::debug!("Dispatching {} {}", dispatched, url);
        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        tracing::debug!("Received status {} from {}", code, url);

        let body = if body_text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body_text)
                .map_err(|source| ConnectionError::Decode { status: code, source })?
        };

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Sends one request and classifies the decoded body.
    ///
    /// Status 200 and 201 yield [`ApiResponse::Success`] carrying the body
    /// unmodified; any other status yields [`ApiResponse::Error`].
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::MissingStoreAddress`] when no host is
    /// configured, checked before anything else. Otherwise fails as
    /// [`request`](Self::request) does.
    pub async fn request_json(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiResponse, ConnectionError> {
        if self.config.host().is_none() {
            return Err(ConnectionError::MissingStoreAddress);
        }

        let response = self.request(method, path, body).await?;
        Ok(ApiResponse::from_http_response(response))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
