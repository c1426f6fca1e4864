//! Integration tests for the connection layer.
//!
//! These tests verify header construction, URL building, verb dispatch and
//! response classification against a local mock server.

use bigcommerce_api::{
    ApiResponse, ApiToken, ApiUser, Connection, ConnectionConfig, ConnectionError, HttpMethod,
    Protocol, StoreHost,
};
use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a connection pointed at the mock server with `admin:secret`.
fn connection_for(server: &MockServer) -> Connection {
    let config = ConnectionConfig::builder()
        .protocol(Protocol::Http)
        .host(StoreHost::new(server.address().to_string()).unwrap())
        .username(ApiUser::new("admin").unwrap())
        .api_key(ApiToken::new("secret").unwrap())
        .build()
        .unwrap();
    Connection::new(config).unwrap()
}

// ============================================================================
// Pre-dispatch validation
// ============================================================================

#[tokio::test]
async fn test_missing_host_fails_before_any_request() {
    let config = ConnectionConfig::builder()
        .username(ApiUser::new("admin").unwrap())
        .api_key(ApiToken::new("secret").unwrap())
        .build()
        .unwrap();
    let connection = Connection::new(config).unwrap();

    let result = connection
        .request_json(HttpMethod::Get, "/products", None)
        .await;

    assert!(matches!(result, Err(ConnectionError::MissingStoreAddress)));
}

#[tokio::test]
async fn test_missing_host_wins_over_missing_credentials() {
    let connection = Connection::new(ConnectionConfig::default()).unwrap();

    let result = connection.request_json(HttpMethod::Get, "/time", None).await;

    assert!(matches!(result, Err(ConnectionError::MissingStoreAddress)));
}

#[tokio::test]
async fn test_missing_credentials_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = ConnectionConfig::builder()
        .protocol(Protocol::Http)
        .host(StoreHost::new(server.address().to_string()).unwrap())
        .build()
        .unwrap();
    let connection = Connection::new(config).unwrap();

    let result = connection
        .request_json(HttpMethod::Delete, "/orders/1", None)
        .await;

    assert!(matches!(result, Err(ConnectionError::MissingCredentials)));
}

// ============================================================================
// Wire format
// ============================================================================

#[tokio::test]
async fn test_get_sends_auth_and_accept_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/time.json"))
        .and(header("Authorization", "Basic YWRtaW46c2VjcmV0"))
        .and(header("Accept", "application/json;0.9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"time": 1_700_000_000})))
        .expect(1)
        .mount(&server)
        .await;

    let connection = connection_for(&server);
    let response = connection
        .request_json(HttpMethod::Get, "/time", None)
        .await
        .unwrap();

    assert_eq!(response, ApiResponse::Success(json!({"time": 1_700_000_000})));
}

#[tokio::test]
async fn test_query_string_follows_json_suffix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/products.json"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let connection = connection_for(&server);
    let response = connection
        .request_json(HttpMethod::Get, "/products?limit=10", None)
        .await
        .unwrap();

    assert!(response.is_success());
}

#[tokio::test]
async fn test_body_is_sent_as_json_with_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/products/5.json"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"name": "Renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5, "name": "Renamed"})))
        .expect(1)
        .mount(&server)
        .await;

    let connection = connection_for(&server);
    let response = connection
        .request_json(HttpMethod::Put, "/products/5", Some(&json!({"name": "Renamed"})))
        .await
        .unwrap();

    assert_eq!(response.body()["name"], "Renamed");
}

#[tokio::test]
async fn test_get_with_body_is_dispatched_as_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/products.json"))
        .and(body_json(json!({"name": "Shirt"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let connection = connection_for(&server);
    let response = connection
        .request_json(HttpMethod::Get, "/products", Some(&json!({"name": "Shirt"})))
        .await
        .unwrap();

    assert_eq!(response, ApiResponse::Success(json!({"id": 1})));
}

#[tokio::test]
async fn test_delete_with_body_is_dispatched_as_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/orders/3.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let connection = connection_for(&server);
    connection
        .request_json(HttpMethod::Delete, "/orders/3", Some(&json!({"force": true})))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_without_body_is_dispatched_as_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/orders/3.json"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let connection = connection_for(&server);
    let response = connection
        .request(HttpMethod::Delete, "/orders/3", None)
        .await
        .unwrap();

    assert_eq!(response.code, 204);
    assert!(response.body.is_null());
}

// ============================================================================
// Response classification
// ============================================================================

#[tokio::test]
async fn test_created_status_is_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/brands.json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 9, "name": "Acme"})))
        .mount(&server)
        .await;

    let connection = connection_for(&server);
    let response = connection
        .request_json(HttpMethod::Post, "/brands", Some(&json!({"name": "Acme"})))
        .await
        .unwrap();

    assert_eq!(response, ApiResponse::Success(json!({"id": 9, "name": "Acme"})));
}

#[tokio::test]
async fn test_other_statuses_are_wrapped_as_error() {
    let server = MockServer::start().await;
    let error_body = json!([{"status": 400, "message": "The field 'name' is invalid."}]);
    Mock::given(method("POST"))
        .and(path("/api/v2/products.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_body.clone()))
        .mount(&server)
        .await;

    let connection = connection_for(&server);
    let response = connection
        .request_json(HttpMethod::Post, "/products", Some(&json!({"name": ""})))
        .await
        .unwrap();

    assert_eq!(
        response,
        ApiResponse::Error {
            status: 400,
            body: error_body.clone()
        }
    );
    assert_eq!(response.to_legacy_json(), json!({ "Error": error_body }));
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/store.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let connection = connection_for(&server);
    let result = connection.request_json(HttpMethod::Get, "/store", None).await;

    assert!(matches!(
        result,
        Err(ConnectionError::Decode { status: 200, .. })
    ));
}

#[tokio::test]
async fn test_unreachable_host_is_a_network_error() {
    // Pooled mock servers keep listening after drop, so free a port directly.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap().to_string();
    drop(listener);

    let config = ConnectionConfig::builder()
        .protocol(Protocol::Http)
        .host(StoreHost::new(address).unwrap())
        .username(ApiUser::new("admin").unwrap())
        .build()
        .unwrap();
    let connection = Connection::new(config).unwrap();

    let result = connection.request_json(HttpMethod::Get, "/time", None).await;

    assert!(matches!(result, Err(ConnectionError::Network(_))));
}

#[tokio::test]
async fn test_reconfigure_redirects_requests() {
    let first = MockServer::start().await;
    let second = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"server": "second"})))
        .expect(1)
        .mount(&second)
        .await;

    let mut connection = connection_for(&first);
    let config = ConnectionConfig::builder()
        .protocol(Protocol::Http)
        .host(StoreHost::new(second.address().to_string()).unwrap())
        .username(ApiUser::new("admin").unwrap())
        .build()
        .unwrap();
    connection.reconfigure(config).unwrap();

    let response = connection
        .request_json(HttpMethod::Get, "/time", None)
        .await
        .unwrap();
    assert_eq!(response.body()["server"], "second");
}
