//! Connection configuration types for tenantctl.
//!
//! Responsibilities:
//! - Define the two platform endpoints (Elasticsearch, Kibana) and their URLs.
//! - Define credentials and TLS verification settings.
//! - Define the main `Config` structure combining endpoints, credentials,
//!   the tenant index name, and the request timeout.
//!
//! Does NOT handle:
//! - Loading from environment variables or `.env` files (see `loader`).
//! - Actual network connections (see the client crate).
//!
//! Invariants:
//! - `Config` is constructed once at startup and passed by reference; nothing
//!   in this crate mutates it afterwards.
//! - Passwords live in `SecretString` and never appear in `Debug` output.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;

use crate::constants::{
    DEFAULT_ELASTICSEARCH_PORT, DEFAULT_KIBANA_PORT, DEFAULT_TIMEOUT_SECS, DEFAULT_USERNAME,
};

/// One platform endpoint as a host/port pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub host: String,
    pub port: u16,
}

impl EndpointConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// The HTTPS base URL for this endpoint, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("https://{}:{}", self.host, self.port)
    }
}

/// Basic-auth credential pair shared by both platform APIs.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

/// TLS verification mode for both endpoints.
///
/// This is a deployment knob: clusters with self-signed or private-CA
/// certificates either skip verification or pin the CA bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsMode {
    /// Verify server certificates against the system trust store.
    #[default]
    Verify,
    /// Accept any certificate. Development and lab clusters only.
    SkipVerify,
    /// Verify against a PEM bundle at the given path.
    CaBundle(PathBuf),
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Elasticsearch endpoint (security and index APIs).
    pub elasticsearch: EndpointConfig,
    /// Kibana endpoint (spaces, data views, saved objects).
    pub kibana: EndpointConfig,
    /// Credentials used for both endpoints.
    pub credentials: Credentials,
    /// Index the tenant aliases are carved out of.
    pub index_name: String,
    /// TLS verification mode.
    pub tls: TlsMode,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Config {
    /// Create a config for the given hosts with default ports, credentials
    /// and timeout. Mostly a test and example convenience.
    pub fn new(
        elasticsearch_host: impl Into<String>,
        kibana_host: impl Into<String>,
        index_name: impl Into<String>,
    ) -> Self {
        Self {
            elasticsearch: EndpointConfig::new(elasticsearch_host, DEFAULT_ELASTICSEARCH_PORT),
            kibana: EndpointConfig::new(kibana_host, DEFAULT_KIBANA_PORT),
            credentials: Credentials::new(DEFAULT_USERNAME, SecretString::new(String::new().into())),
            index_name: index_name.into(),
            tls: TlsMode::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
