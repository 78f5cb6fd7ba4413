//! Elasticsearch alias endpoints.

use reqwest::Client;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::{encode_path_segment, require_success, soft_report};
use crate::error::{ClientError, Result};
use crate::models::{AliasActions, OpReport};

/// Create a tenant alias over `index_pattern`, filtered by `client_id`.
///
/// Fails with [`ClientError::InvalidRequest`] before any request is sent
/// when `client_id` is absent: an unfiltered alias would leak every
/// tenant's documents.
pub async fn create_alias(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    index_pattern: &str,
    alias_name: &str,
    client_id: Option<&str>,
) -> Result<OpReport> {
    let Some(client_id) = client_id else {
        return Err(ClientError::InvalidRequest(
            "client_id is required to create an alias".to_string(),
        ));
    };

    let url = format!("{}/_aliases", base_url);
    let payload = AliasActions::add_tenant_alias(index_pattern, alias_name, client_id);

    debug!(alias = alias_name, index = index_pattern, "POST /_aliases");
    let response = credentials
        .apply(client.post(&url))
        .json(&payload)
        .send()
        .await?;

    soft_report(response, "Alias created successfully").await
}

/// Retrieve an alias structure (backing indices and filters).
pub async fn get_alias(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    alias_name: &str,
) -> Result<serde_json::Value> {
    let url = format!("{}/_alias/{}", base_url, encode_path_segment(alias_name));

    debug!(alias = alias_name, "GET /_alias");
    let response = credentials.apply(client.get(&url)).send().await?;

    Ok(require_success(response).await?.json().await?)
}
