//! Kibana saved-objects endpoints: export, import, get, update.
//!
//! These are all hard-tier operations: every one of them feeds the next
//! step of the dashboard-copy protocol, so a non-2xx response is an error,
//! not a report.

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::{XSRF_HEADER, XSRF_VALUE, encode_path_segment, require_success};
use crate::error::Result;
use crate::models::{ExportRequest, ImportResponse, Reference, SavedObject, SavedObjectUpdate};

/// Export saved objects from a space as an NDJSON bundle.
///
/// The bundle is opaque to this crate: produced here, handed verbatim to
/// [`import_objects`], never parsed or persisted.
pub async fn export_objects(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    space_id: &str,
    request: &ExportRequest,
) -> Result<Vec<u8>> {
    let url = format!(
        "{}/s/{}/api/saved_objects/_export",
        base_url,
        encode_path_segment(space_id)
    );

    debug!(space = space_id, "POST saved_objects/_export");
    let response = credentials
        .apply(client.post(&url))
        .header(XSRF_HEADER, XSRF_VALUE)
        .json(request)
        .send()
        .await?;

    Ok(require_success(response).await?.bytes().await?.to_vec())
}

/// Import an NDJSON bundle into a space, overwriting existing objects.
///
/// `createNewCopies=false` keeps original ids where possible so that the
/// overwrite semantics apply on repeated imports.
pub async fn import_objects(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    space_id: &str,
    bundle: Vec<u8>,
) -> Result<ImportResponse> {
    let url = format!(
        "{}/s/{}/api/saved_objects/_import",
        base_url,
        encode_path_segment(space_id)
    );

    let file = Part::bytes(bundle)
        .file_name("dashboard.ndjson")
        .mime_str("application/ndjson")?;
    let form = Form::new().part("file", file);

    debug!(space = space_id, "POST saved_objects/_import");
    let response = credentials
        .apply(client.post(&url))
        .header(XSRF_HEADER, XSRF_VALUE)
        .query(&[("overwrite", "true"), ("createNewCopies", "false")])
        .multipart(form)
        .send()
        .await?;

    Ok(require_success(response).await?.json().await?)
}

/// Fetch a dashboard saved object, including its references list.
pub async fn get_dashboard(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    space_id: &str,
    dashboard_id: &str,
) -> Result<SavedObject> {
    let url = format!(
        "{}/s/{}/api/saved_objects/dashboard/{}",
        base_url,
        encode_path_segment(space_id),
        encode_path_segment(dashboard_id)
    );

    debug!(space = space_id, id = dashboard_id, "GET saved_objects/dashboard");
    let response = credentials
        .apply(client.get(&url))
        .header(XSRF_HEADER, XSRF_VALUE)
        .send()
        .await?;

    Ok(require_success(response).await?.json().await?)
}

/// Persist a dashboard's attributes and references in full.
pub async fn update_dashboard(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    space_id: &str,
    dashboard_id: &str,
    attributes: &serde_json::Value,
    references: &[Reference],
) -> Result<()> {
    let url = format!(
        "{}/s/{}/api/saved_objects/dashboard/{}",
        base_url,
        encode_path_segment(space_id),
        encode_path_segment(dashboard_id)
    );
    let payload = SavedObjectUpdate {
        attributes,
        references,
    };

    debug!(space = space_id, id = dashboard_id, "PUT saved_objects/dashboard");
    let response = credentials
        .apply(client.put(&url))
        .header(XSRF_HEADER, XSRF_VALUE)
        .json(&payload)
        .send()
        .await?;

    require_success(response).await?;
    Ok(())
}
