//! Role and user methods for [`AutomationClient`].

use secrecy::SecretString;
use tracing::info;

use crate::client::AutomationClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::OpReport;

impl AutomationClient {
    /// Create or overwrite a role granting read access to `indices` and
    /// read-only dashboards inside `space_id`.
    ///
    /// Soft operation.
    pub async fn create_role(
        &self,
        role_name: &str,
        indices: &[String],
        space_id: &str,
    ) -> Result<OpReport> {
        info!(role = role_name, ?indices, space = space_id, "Creating role");
        endpoints::security::create_role(
            &self.http,
            &self.elasticsearch_base_url,
            &self.credentials,
            role_name,
            indices,
            space_id,
        )
        .await
    }

    /// Create or overwrite a user bound to exactly `roles`.
    ///
    /// Soft operation.
    pub async fn create_user(
        &self,
        username: &str,
        password: &SecretString,
        roles: &[String],
    ) -> Result<OpReport> {
        info!(user = username, ?roles, "Creating user");
        endpoints::security::create_user(
            &self.http,
            &self.elasticsearch_base_url,
            &self.credentials,
            username,
            password,
            roles,
        )
        .await
    }

    /// List all users, as raw platform JSON.
    pub async fn get_users(&self) -> Result<serde_json::Value> {
        endpoints::security::get_users(
            &self.http,
            &self.elasticsearch_base_url,
            &self.credentials,
        )
        .await
    }

    /// List all roles via the Kibana security API, as raw platform JSON.
    pub async fn get_roles(&self) -> Result<serde_json::Value> {
        endpoints::security::get_roles(&self.http, &self.kibana_base_url, &self.credentials).await
    }
}
