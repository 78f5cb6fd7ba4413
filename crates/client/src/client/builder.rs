//! Client builder for constructing [`AutomationClient`] instances.
//!
//! Responsibilities:
//! - Provide a fluent builder API for client configuration.
//! - Validate required fields (both base URLs, credentials).
//! - Normalize base URLs (no trailing slashes).
//! - Configure the underlying HTTP client: timeout, redirect limit, and the
//!   TLS verification mode (verify / skip / pinned CA bundle).
//!
//! Does NOT handle:
//! - Actual API calls (see the resource submodules and [`crate::endpoints`]).
//! - Reading configuration sources (see `tenantctl-config`).
//!
//! Invariants:
//! - Both base URLs and the credentials are required before `build()`.
//! - `TlsMode::SkipVerify` only affects HTTPS URLs; plain-HTTP URLs log a
//!   warning instead.

use std::time::Duration;

use tenantctl_config::constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS};
use tenantctl_config::{Config, TlsMode};
use url::Url;

use crate::auth::Credentials;
use crate::client::AutomationClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`AutomationClient`].
pub struct AutomationClientBuilder {
    elasticsearch_base_url: Option<String>,
    kibana_base_url: Option<String>,
    credentials: Option<Credentials>,
    tls: TlsMode,
    timeout: Duration,
}

impl Default for AutomationClientBuilder {
    fn default() -> Self {
        Self {
            elasticsearch_base_url: None,
            kibana_base_url: None,
            credentials: None,
            tls: TlsMode::Verify,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AutomationClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Elasticsearch base URL, e.g. `https://es.example.com:9200`.
    pub fn elasticsearch_base_url(mut self, url: String) -> Self {
        self.elasticsearch_base_url = Some(url);
        self
    }

    /// Set the Kibana base URL, e.g. `https://kb.example.com:5601`.
    pub fn kibana_base_url(mut self, url: String) -> Self {
        self.kibana_base_url = Some(url);
        self
    }

    /// Set the basic-auth credentials used against both endpoints.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the TLS verification mode.
    ///
    /// # Security Warning
    /// `TlsMode::SkipVerify` makes the connection vulnerable to
    /// man-in-the-middle attacks; only use it against lab clusters.
    pub fn tls(mut self, tls: TlsMode) -> Self {
        self.tls = tls;
        self
    }

    /// Set the per-request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pre-populate the builder from a loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.elasticsearch_base_url = Some(config.elasticsearch.base_url());
        self.kibana_base_url = Some(config.kibana.base_url());
        self.credentials = Some(Credentials::new(
            config.credentials.username.clone(),
            config.credentials.password.clone(),
        ));
        self.tls = config.tls.clone();
        self.timeout = config.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes, preventing double
    /// slashes when concatenating endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    fn validate_base_url(url: &str, which: &str) -> Result<()> {
        let parsed = Url::parse(url)
            .map_err(|e| ClientError::InvalidUrl(format!("{which} base URL: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClientError::InvalidUrl(format!(
                "{which} base URL must be http or https, got {}",
                parsed.scheme()
            )));
        }
        Ok(())
    }

    /// Build the [`AutomationClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if either base URL is missing or
    /// unparseable, [`ClientError::AuthFailed`] if no credentials were
    /// provided, and [`ClientError::Tls`] if a CA bundle cannot be read.
    pub fn build(self) -> Result<AutomationClient> {
        let elasticsearch_base_url = self
            .elasticsearch_base_url
            .ok_or_else(|| ClientError::InvalidUrl("Elasticsearch base URL is required".to_string()))
            .map(Self::normalize_base_url)?;
        let kibana_base_url = self
            .kibana_base_url
            .ok_or_else(|| ClientError::InvalidUrl("Kibana base URL is required".to_string()))
            .map(Self::normalize_base_url)?;

        Self::validate_base_url(&elasticsearch_base_url, "Elasticsearch")?;
        Self::validate_base_url(&kibana_base_url, "Kibana")?;

        let credentials = self
            .credentials
            .ok_or_else(|| ClientError::AuthFailed("credentials are required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        match &self.tls {
            TlsMode::Verify => {}
            TlsMode::SkipVerify => {
                let all_https = elasticsearch_base_url.starts_with("https://")
                    && kibana_base_url.starts_with("https://");
                if !all_https {
                    // Skipping verification only affects TLS connections;
                    // there is no TLS layer on plain HTTP.
                    tracing::warn!(
                        "TlsMode::SkipVerify has no effect on HTTP URLs; TLS verification only applies to HTTPS connections"
                    );
                }
                http_builder = http_builder.danger_accept_invalid_certs(true);
            }
            TlsMode::CaBundle(path) => {
                let pem = std::fs::read(path).map_err(|e| {
                    ClientError::Tls(format!(
                        "Failed to read CA bundle {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                let certificate = reqwest::Certificate::from_pem(&pem)
                    .map_err(|e| ClientError::Tls(format!("Invalid CA bundle: {e}")))?;
                http_builder = http_builder.add_root_certificate(certificate);
            }
        }

        let http = http_builder.build()?;

        Ok(AutomationClient {
            http,
            elasticsearch_base_url,
            kibana_base_url,
            credentials,
        })
    }
}
