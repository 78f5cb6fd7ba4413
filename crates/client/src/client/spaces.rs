//! Space and feature methods for [`AutomationClient`].

use tracing::info;

use crate::client::AutomationClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{OpReport, Space};

impl AutomationClient {
    /// Create a tenant space with every feature disabled except dashboards.
    ///
    /// Soft operation.
    pub async fn create_space(
        &self,
        space_id: &str,
        name: &str,
        description: &str,
    ) -> Result<OpReport> {
        info!(space = space_id, name, "Creating space");
        let space = Space::dashboard_only(space_id, name, description);
        endpoints::spaces::create_space(&self.http, &self.kibana_base_url, &self.credentials, &space)
            .await
    }

    /// List all spaces, as raw platform JSON.
    pub async fn get_spaces(&self) -> Result<serde_json::Value> {
        endpoints::spaces::get_spaces(&self.http, &self.kibana_base_url, &self.credentials).await
    }

    /// Delete a space by id.
    ///
    /// Soft operation.
    pub async fn delete_space(&self, space_id: &str) -> Result<OpReport> {
        info!(space = space_id, "Deleting space");
        endpoints::spaces::delete_space(
            &self.http,
            &self.kibana_base_url,
            &self.credentials,
            space_id,
        )
        .await
    }

    /// List the feature ids a space can disable.
    pub async fn get_features(&self) -> Result<Vec<String>> {
        endpoints::spaces::get_features(&self.http, &self.kibana_base_url, &self.credentials).await
    }
}
