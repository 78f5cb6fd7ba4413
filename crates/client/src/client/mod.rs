//! Main automation client and API methods.
//!
//! This module provides the primary [`AutomationClient`] for provisioning
//! tenant resources across the Elasticsearch and Kibana REST APIs.
//!
//! # Submodules
//! - [`builder`]: Client construction and TLS configuration
//! - `aliases`: Index alias methods
//! - `security`: Role and user methods
//! - `spaces`: Space and feature methods
//! - `data_views`: Data-view methods
//! - `migration`: The dashboard-copy protocol
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Operation sequencing for a whole tenant (see [`crate::workflow`])
//!
//! # Invariants
//! - Every request carries basic auth; every Kibana request carries the
//!   anti-CSRF header. Both are applied in the endpoints layer.
//! - The client holds no mutable state; all state lives on the platforms.

pub mod builder;

mod aliases;
mod data_views;
pub mod migration;
mod security;
mod spaces;

use crate::auth::Credentials;

/// Client for the coupled Elasticsearch and Kibana REST APIs.
///
/// # Creating a Client
///
/// Use [`AutomationClient::builder()`]:
///
/// ```rust,ignore
/// use secrecy::SecretString;
/// use tenantctl_client::{AutomationClient, Credentials};
///
/// let client = AutomationClient::builder()
///     .elasticsearch_base_url("https://es.example.com:9200".to_string())
///     .kibana_base_url("https://kb.example.com:5601".to_string())
///     .credentials(Credentials::new("elastic", SecretString::new("pw".into())))
///     .build()?;
/// ```
///
/// Or derive everything from a loaded configuration with
/// [`builder::AutomationClientBuilder::from_config`].
#[derive(Debug)]
pub struct AutomationClient {
    pub(crate) http: reqwest::Client,
    pub(crate) elasticsearch_base_url: String,
    pub(crate) kibana_base_url: String,
    pub(crate) credentials: Credentials,
}

impl AutomationClient {
    /// Create a new client builder.
    pub fn builder() -> builder::AutomationClientBuilder {
        builder::AutomationClientBuilder::new()
    }

    /// Base URL of the Elasticsearch endpoint.
    pub fn elasticsearch_base_url(&self) -> &str {
        &self.elasticsearch_base_url
    }

    /// Base URL of the Kibana endpoint.
    pub fn kibana_base_url(&self) -> &str {
        &self.kibana_base_url
    }
}
