//! Index alias methods for [`AutomationClient`].

use tracing::info;

use crate::client::AutomationClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::OpReport;

impl AutomationClient {
    /// Create an alias over `index_pattern` restricted to one tenant's
    /// documents via a `client_id` term filter.
    ///
    /// Soft operation: a non-2xx platform response becomes an error report.
    /// Passing `None` for `client_id` is an input-validation error and no
    /// request is sent.
    pub async fn create_index_alias(
        &self,
        index_pattern: &str,
        alias_name: &str,
        client_id: Option<&str>,
    ) -> Result<OpReport> {
        info!(
            alias = alias_name,
            index = index_pattern,
            client_id,
            "Creating filtered index alias"
        );
        endpoints::aliases::create_alias(
            &self.http,
            &self.elasticsearch_base_url,
            &self.credentials,
            index_pattern,
            alias_name,
            client_id,
        )
        .await
    }

    /// Retrieve the structure of an alias: its backing indices and filters.
    pub async fn get_alias(&self, alias_name: &str) -> Result<serde_json::Value> {
        info!(alias = alias_name, "Retrieving alias structure");
        endpoints::aliases::get_alias(
            &self.http,
            &self.elasticsearch_base_url,
            &self.credentials,
            alias_name,
        )
        .await
    }
}
