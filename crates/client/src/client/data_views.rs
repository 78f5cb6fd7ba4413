//! Data-view methods for [`AutomationClient`].

use tracing::info;

use crate::client::AutomationClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{DataViewSummary, OpReport};

impl AutomationClient {
    /// Create a data view binding `index_pattern` inside `space_id`, keyed
    /// on the event-timestamp field.
    ///
    /// Soft operation.
    pub async fn create_data_view(
        &self,
        space_id: &str,
        name: &str,
        index_pattern: &str,
    ) -> Result<OpReport> {
        info!(
            space = space_id,
            data_view = name,
            index = index_pattern,
            "Creating data view"
        );
        endpoints::data_views::create_data_view(
            &self.http,
            &self.kibana_base_url,
            &self.credentials,
            space_id,
            name,
            index_pattern,
        )
        .await
    }

    /// List the data views of one space.
    pub async fn list_data_views(&self, space_id: &str) -> Result<Vec<DataViewSummary>> {
        endpoints::data_views::list_data_views(
            &self.http,
            &self.kibana_base_url,
            &self.credentials,
            space_id,
        )
        .await
    }

    /// Resolve a data-view id by exact display name within a space.
    ///
    /// Hard operation: the id feeds the reference rewrite, so an absent
    /// name is [`ClientError::DataViewNotFound`], surfaced before any
    /// rewrite or delete is attempted.
    pub async fn find_data_view_id(&self, space_id: &str, name: &str) -> Result<String> {
        info!(space = space_id, data_view = name, "Resolving data view id");
        let data_views = self.list_data_views(space_id).await?;
        data_views
            .into_iter()
            .find(|dv| dv.name == name)
            .map(|dv| dv.id)
            .ok_or_else(|| ClientError::DataViewNotFound {
                name: name.to_string(),
                space: space_id.to_string(),
            })
    }

    /// List the data views of the default space, as raw platform JSON.
    pub async fn get_data_views(&self) -> Result<serde_json::Value> {
        endpoints::data_views::get_data_views(&self.http, &self.kibana_base_url, &self.credentials)
            .await
    }

    /// Delete a data view from a space.
    ///
    /// Soft operation.
    pub async fn delete_data_view(&self, space_id: &str, data_view_id: &str) -> Result<OpReport> {
        info!(space = space_id, id = data_view_id, "Deleting data view");
        endpoints::data_views::delete_data_view(
            &self.http,
            &self.kibana_base_url,
            &self.credentials,
            space_id,
            data_view_id,
        )
        .await
    }
}
