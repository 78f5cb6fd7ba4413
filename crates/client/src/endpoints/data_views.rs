//! Kibana data-view endpoints.

use reqwest::Client;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::{
    XSRF_HEADER, XSRF_VALUE, encode_path_segment, require_success, soft_report,
};
use crate::error::Result;
use crate::models::{CreateDataViewRequest, DataViewListResponse, DataViewSummary, OpReport};

/// Create a data view inside a space.
pub async fn create_data_view(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    space_id: &str,
    name: &str,
    index_pattern: &str,
) -> Result<OpReport> {
    let url = format!(
        "{}/s/{}/api/data_views/data_view",
        base_url,
        encode_path_segment(space_id)
    );
    let payload = CreateDataViewRequest::new(name, index_pattern);

    debug!(space = space_id, data_view = name, "POST data_views/data_view");
    let response = credentials
        .apply(client.post(&url))
        .header(XSRF_HEADER, XSRF_VALUE)
        .json(&payload)
        .send()
        .await?;

    soft_report(response, "Data view created successfully").await
}

/// List the data views of one space.
pub async fn list_data_views(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    space_id: &str,
) -> Result<Vec<DataViewSummary>> {
    let url = format!(
        "{}/s/{}/api/data_views",
        base_url,
        encode_path_segment(space_id)
    );

    debug!(space = space_id, "GET data_views");
    let response = credentials
        .apply(client.get(&url))
        .header(XSRF_HEADER, XSRF_VALUE)
        .send()
        .await?;

    let listing: DataViewListResponse = require_success(response).await?.json().await?;
    Ok(listing.data_view)
}

/// List the data views of the default space, as raw platform JSON.
pub async fn get_data_views(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
) -> Result<serde_json::Value> {
    let url = format!("{}/api/data_views", base_url);

    debug!("GET /api/data_views");
    let response = credentials
        .apply(client.get(&url))
        .header(XSRF_HEADER, XSRF_VALUE)
        .send()
        .await?;

    Ok(require_success(response).await?.json().await?)
}

/// Delete a data view (saved object type `index-pattern`) from a space.
pub async fn delete_data_view(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    space_id: &str,
    data_view_id: &str,
) -> Result<OpReport> {
    let url = format!(
        "{}/s/{}/api/saved_objects/index-pattern/{}",
        base_url,
        encode_path_segment(space_id),
        encode_path_segment(data_view_id)
    );

    debug!(space = space_id, id = data_view_id, "DELETE index-pattern");
    let response = credentials
        .apply(client.delete(&url))
        .header(XSRF_HEADER, XSRF_VALUE)
        .send()
        .await?;

    soft_report(response, "Data view deleted successfully").await
}
