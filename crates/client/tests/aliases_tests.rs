//! Index alias endpoint tests.
//!
//! # Invariants
//! - Alias creation issues a single atomic alias-update action with a
//!   tenant term filter.
//! - A missing client id fails validation before any request is sent.
//! - Non-2xx responses become error reports carrying the platform body.

mod common;

use common::*;
use tenantctl_client::ClientError;

#[tokio::test]
async fn test_create_index_alias_success() {
    let mock_server = MockServer::start().await;

    let expected_body = serde_json::json!({
        "actions": [
            {
                "add": {
                    "index": "analytics-events",
                    "alias": "client_7_alias",
                    "filter": {"term": {"client_id": "7"}}
                }
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/_aliases"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "acknowledged": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let report = client
        .create_index_alias("analytics-events", "client_7_alias", Some("7"))
        .await
        .unwrap();

    assert!(report.is_success());
    assert_eq!(report.message, "Alias created successfully");
}

#[tokio::test]
async fn test_create_index_alias_error_report() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/_aliases"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string("index_not_found_exception"),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let report = client
        .create_index_alias("missing-index", "client_7_alias", Some("7"))
        .await
        .unwrap();

    assert!(!report.is_success());
    assert!(report.message.contains("index_not_found_exception"));
}

#[tokio::test]
async fn test_create_index_alias_requires_client_id() {
    let mock_server = MockServer::start().await;

    let client = test_client(&mock_server);
    let result = client
        .create_index_alias("analytics-events", "client_7_alias", None)
        .await;

    assert!(matches!(result, Err(ClientError::InvalidRequest(_))));
    // Validation must reject the call before anything goes on the wire.
    assert!(
        mock_server.received_requests().await.unwrap().is_empty(),
        "no request should have been sent"
    );
}

#[tokio::test]
async fn test_get_alias_returns_platform_json() {
    let mock_server = MockServer::start().await;

    let alias_structure = serde_json::json!({
        "analytics-events": {
            "aliases": {
                "client_7_alias": {
                    "filter": {"term": {"client_id": "7"}}
                }
            }
        }
    });

    Mock::given(method("GET"))
        .and(path("/_alias/client_7_alias"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&alias_structure))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let value = client.get_alias("client_7_alias").await.unwrap();
    assert_eq!(value, alias_structure);
}

#[tokio::test]
async fn test_get_alias_missing_is_hard_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_alias/client_7_alias"))
        .respond_with(ResponseTemplate::new(404).set_body_string("alias missing"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.get_alias("client_7_alias").await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 404, .. }));
    assert!(err.is_not_found());
}
