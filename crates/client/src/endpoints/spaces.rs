//! Kibana spaces and features endpoints.

use reqwest::Client;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::{
    XSRF_HEADER, XSRF_VALUE, encode_path_segment, require_success, soft_report,
};
use crate::error::Result;
use crate::models::{Feature, OpReport, Space};

/// Create a space.
pub async fn create_space(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    space: &Space,
) -> Result<OpReport> {
    let url = format!("{}/api/spaces/space", base_url);

    debug!(space = space.id.as_str(), "POST /api/spaces/space");
    let response = credentials
        .apply(client.post(&url))
        .header(XSRF_HEADER, XSRF_VALUE)
        .json(space)
        .send()
        .await?;

    soft_report(response, "Space created successfully").await
}

/// List all spaces.
pub async fn get_spaces(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<serde_json::Value> {
    let url = format!(
        "{}/api/spaces/space?include_authorized_purposes=true",
        base_url
    );

    debug!("GET /api/spaces/space");
    let response = credentials
        .apply(client.get(&url))
        .header(XSRF_HEADER, XSRF_VALUE)
        .send()
        .await?;

    Ok(require_success(response).await?.json().await?)
}

/// Delete a space by id.
pub async fn delete_space(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    space_id: &str,
) -> Result<OpReport> {
    let url = format!(
        "{}/api/spaces/space/{}",
        base_url,
        encode_path_segment(space_id)
    );

    debug!(space = space_id, "DELETE /api/spaces/space");
    let response = credentials
        .apply(client.delete(&url))
        .header(XSRF_HEADER, XSRF_VALUE)
        .send()
        .await?;

    soft_report(response, "Space deleted successfully").await
}

/// List the feature ids usable in a space's disabled-features list.
pub async fn get_features(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<Vec<String>> {
    let url = format!("{}/api/features", base_url);

    debug!("GET /api/features");
    let response = credentials
        .apply(client.get(&url))
        .header(XSRF_HEADER, XSRF_VALUE)
        .send()
        .await?;

    let features: Vec<Feature> = require_success(response).await?.json().await?;
    Ok(features.into_iter().map(|f| f.id).collect())
}
