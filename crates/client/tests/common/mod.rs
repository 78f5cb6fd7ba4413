//! Common test utilities for integration tests.
//!
//! Provides a mock-server-backed client plus re-exports of the wiremock
//! types every test file uses. Both base URLs point at the same mock
//! server; the Elasticsearch and Kibana paths never overlap, so one
//! server can play both roles.

use secrecy::SecretString;
use tenantctl_client::{AutomationClient, Credentials};

#[allow(unused_imports)]
pub use wiremock::matchers::{
    body_json, body_partial_json, body_string_contains, header, method, path, query_param,
};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client whose Elasticsearch and Kibana endpoints both resolve to
/// the given mock server.
pub fn test_client(server: &MockServer) -> AutomationClient {
    AutomationClient::builder()
        .elasticsearch_base_url(server.uri())
        .kibana_base_url(server.uri())
        .credentials(Credentials::new(
            "elastic",
            SecretString::new("test-password".to_string().into()),
        ))
        .build()
        .expect("client builds against mock server")
}

/// The bodies of all requests the server received with the given method
/// and URL path, parsed as JSON.
#[allow(dead_code)]
pub async fn received_json_bodies(
    server: &MockServer,
    method: &str,
    url_path: &str,
) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.method.as_str() == method && request.url.path() == url_path)
        .map(|request| serde_json::from_slice(&request.body).expect("request body is JSON"))
        .collect()
}

/// Count the requests the server received with the given method and path.
#[allow(dead_code)]
pub async fn count_requests(server: &MockServer, method: &str, url_path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.method.as_str() == method && request.url.path() == url_path)
        .count()
}
