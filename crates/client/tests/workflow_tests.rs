//! Tenant provisioning workflow tests.
//!
//! # Invariants
//! - Only the requested operations run, in the fixed order.
//! - A failing step is reported and does not block later steps.
//! - All resource names derive from the client identifier.

mod common;

use common::*;
use tenantctl_client::{ProvisionRequest, StepFlags};

fn request(steps: StepFlags) -> ProvisionRequest {
    ProvisionRequest {
        client_id: "42".to_string(),
        space_name: "Retail Analytics".to_string(),
        index_name: "analytics-events".to_string(),
        source_space_id: "default".to_string(),
        source_data_view: "Demo Events".to_string(),
        steps,
    }
}

#[tokio::test]
async fn test_space_only_invocation_issues_one_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/spaces/space"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "client_42_space"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let results = client
        .provision_tenant(&request(StepFlags {
            space: true,
            ..StepFlags::default()
        }))
        .await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].operation, "create_space");
    assert!(results[0].report.is_success());

    // Exactly one request total, with the derived space id and the full
    // deny-list.
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["id"], "client_42_space");
    assert_eq!(body["name"], "Retail Analytics");
    assert_eq!(
        body["disabledFeatures"].as_array().unwrap().len(),
        tenantctl_client::models::DISABLED_FEATURES.len()
    );
}

#[tokio::test]
async fn test_failed_step_does_not_block_later_steps() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/_aliases"))
        .respond_with(ResponseTemplate::new(500).set_body_string("alias backend down"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/spaces/space"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let results = client
        .provision_tenant(&request(StepFlags {
            alias: true,
            space: true,
            ..StepFlags::default()
        }))
        .await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].operation, "create_index_alias");
    assert!(!results[0].report.is_success());
    assert!(results[0].report.message.contains("alias backend down"));
    assert_eq!(results[1].operation, "create_space");
    assert!(results[1].report.is_success());
}

#[tokio::test]
async fn test_full_provisioning_order_and_names() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/_aliases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/spaces/space"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/_security/role/client_42_role"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/_security/user/client_42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/s/client_42_space/api/data_views/data_view"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let results = client
        .provision_tenant(&request(StepFlags {
            alias: true,
            space: true,
            role: true,
            user: true,
            data_view: true,
            dashboards: false,
        }))
        .await;

    let operations: Vec<&str> = results.iter().map(|r| r.operation.as_str()).collect();
    assert_eq!(
        operations,
        vec![
            "create_index_alias",
            "create_space",
            "create_role",
            "create_user",
            "create_data_view"
        ]
    );
    assert!(results.iter().all(|r| r.report.is_success()));

    // The role grants access to the derived alias within the derived space.
    let role_bodies =
        received_json_bodies(&mock_server, "PUT", "/_security/role/client_42_role").await;
    assert_eq!(role_bodies[0]["indices"][0]["names"][0], "client_42_alias");
    assert_eq!(
        role_bodies[0]["applications"][0]["resources"][0],
        "space:client_42_space"
    );
}

#[tokio::test]
async fn test_tenant_user_gets_derived_password() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/_security/user/client_42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let results = client
        .provision_tenant(&request(StepFlags {
            user: true,
            ..StepFlags::default()
        }))
        .await;

    assert_eq!(results.len(), 1);
    assert!(results[0].report.is_success());

    let bodies = received_json_bodies(&mock_server, "PUT", "/_security/user/client_42").await;
    assert_eq!(bodies[0]["password"], "client_42");
    assert_eq!(bodies[0]["roles"], serde_json::json!(["client_42_role"]));
    assert_eq!(bodies[0]["enabled"], true);
}
