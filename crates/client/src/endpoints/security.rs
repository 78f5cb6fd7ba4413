//! Security endpoints: roles and users.
//!
//! Role and user writes go to the Elasticsearch security API; the role
//! listing is served by Kibana's security API and therefore takes the
//! Kibana base URL.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::{
    XSRF_HEADER, XSRF_VALUE, encode_path_segment, require_success, soft_report,
};
use crate::error::Result;
use crate::models::{OpReport, RoleSpec};

/// Create or overwrite a tenant role.
pub async fn create_role(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    role_name: &str,
    indices: &[String],
    space_id: &str,
) -> Result<OpReport> {
    let url = format!(
        "{}/_security/role/{}",
        base_url,
        encode_path_segment(role_name)
    );
    let payload = RoleSpec::dashboard_reader(indices, space_id);

    debug!(role = role_name, space = space_id, "PUT /_security/role");
    let response = credentials
        .apply(client.put(&url))
        .json(&payload)
        .send()
        .await?;

    soft_report(response, "Role created successfully").await
}

/// Create or overwrite a user bound to the given roles.
pub async fn create_user(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    username: &str,
    password: &SecretString,
    roles: &[String],
) -> Result<OpReport> {
    let url = format!(
        "{}/_security/user/{}",
        base_url,
        encode_path_segment(username)
    );
    let payload = json!({
        "password": password.expose_secret(),
        "roles": roles,
        "full_name": username,
        "enabled": true,
    });

    debug!(user = username, ?roles, "PUT /_security/user");
    let response = credentials
        .apply(client.put(&url))
        .json(&payload)
        .send()
        .await?;

    soft_report(response, "User created successfully").await
}

/// List all users known to the Elasticsearch security API.
pub async fn get_users(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<serde_json::Value> {
    let url = format!("{}/_security/user", base_url);

    debug!("GET /_security/user");
    let response = credentials.apply(client.get(&url)).send().await?;

    Ok(require_success(response).await?.json().await?)
}

/// List all roles via the Kibana security API.
pub async fn get_roles(
    client: &Client,
    kibana_base_url: &str,
    credentials: &Credentials,
) -> Result<serde_json::Value> {
    let url = format!("{}/api/security/role", kibana_base_url);

    debug!("GET /api/security/role");
    let response = credentials
        .apply(client.get(&url))
        .header(XSRF_HEADER, XSRF_VALUE)
        .send()
        .await?;

    Ok(require_success(response).await?.json().await?)
}
