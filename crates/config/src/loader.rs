//! Environment-driven configuration loading.
//!
//! Responsibilities:
//! - Read `TENANTCTL_*` environment variables (optionally seeded from `.env`).
//! - Apply programmatic overrides (CLI flags) on top of the environment.
//! - Validate and assemble the final [`Config`].
//!
//! Does NOT handle:
//! - Persisting configuration to disk.
//! - Interpreting the values (the client crate owns TLS/connection setup).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Programmatic setters take precedence over environment values.
//! - Defaults are enumerated once, in `constants`, not scattered here.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

use crate::constants::{
    DEFAULT_ELASTICSEARCH_PORT, DEFAULT_KIBANA_PORT, DEFAULT_TIMEOUT_SECS, DEFAULT_USERNAME,
    MAX_TIMEOUT_SECS,
};
use crate::types::{Config, Credentials, EndpointConfig, TlsMode};

/// Errors produced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required field was never provided.
    #[error("Missing required configuration: {0}")]
    MissingField(&'static str),

    /// An environment variable held an unparseable value.
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// `.env` file could not be read.
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Read an environment variable, returning `None` if unset, empty, or
/// whitespace-only. The returned value is trimmed.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: std::str::FromStr>(var: &str, value: &str, expected: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: expected.to_string(),
    })
}

/// Builder that assembles a [`Config`] from the environment plus overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    elasticsearch_host: Option<String>,
    elasticsearch_port: Option<u16>,
    kibana_host: Option<String>,
    kibana_port: Option<u16>,
    username: Option<String>,
    password: Option<SecretString>,
    index_name: Option<String>,
    skip_verify: Option<bool>,
    ca_bundle: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.env` file from the working directory, if present.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load_dotenv(&self) -> Result<(), ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => Ok(()),
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(ConfigError::DotenvError(e.to_string())),
        }
    }

    /// Apply `TENANTCTL_*` environment variables to any fields not already
    /// set programmatically.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        if self.elasticsearch_host.is_none() {
            self.elasticsearch_host = env_var_or_none("TENANTCTL_ES_HOST");
        }
        if self.elasticsearch_port.is_none() {
            if let Some(port) = env_var_or_none("TENANTCTL_ES_PORT") {
                self.elasticsearch_port =
                    Some(parse_env("TENANTCTL_ES_PORT", &port, "must be a port number")?);
            }
        }
        if self.kibana_host.is_none() {
            self.kibana_host = env_var_or_none("TENANTCTL_KB_HOST");
        }
        if self.kibana_port.is_none() {
            if let Some(port) = env_var_or_none("TENANTCTL_KB_PORT") {
                self.kibana_port =
                    Some(parse_env("TENANTCTL_KB_PORT", &port, "must be a port number")?);
            }
        }
        if self.username.is_none() {
            self.username = env_var_or_none("TENANTCTL_USERNAME");
        }
        if self.password.is_none() {
            if let Some(password) = env_var_or_none("TENANTCTL_PASSWORD") {
                self.password = Some(SecretString::new(password.into()));
            }
        }
        if self.index_name.is_none() {
            self.index_name = env_var_or_none("TENANTCTL_INDEX");
        }
        if self.skip_verify.is_none() {
            if let Some(skip) = env_var_or_none("TENANTCTL_SKIP_VERIFY") {
                self.skip_verify =
                    Some(parse_env("TENANTCTL_SKIP_VERIFY", &skip, "must be true or false")?);
            }
        }
        if self.ca_bundle.is_none() {
            self.ca_bundle = env_var_or_none("TENANTCTL_CA_BUNDLE").map(PathBuf::from);
        }
        if self.timeout.is_none() {
            if let Some(timeout) = env_var_or_none("TENANTCTL_TIMEOUT") {
                let secs: u64 = parse_env("TENANTCTL_TIMEOUT", &timeout, "must be a number")?;
                if secs == 0 || secs > MAX_TIMEOUT_SECS {
                    return Err(ConfigError::InvalidValue {
                        var: "TENANTCTL_TIMEOUT".to_string(),
                        message: format!("must be between 1 and {} seconds", MAX_TIMEOUT_SECS),
                    });
                }
                self.timeout = Some(Duration::from_secs(secs));
            }
        }
        Ok(self)
    }

    pub fn with_elasticsearch_host(mut self, host: String) -> Self {
        self.elasticsearch_host = Some(host);
        self
    }

    pub fn with_elasticsearch_port(mut self, port: u16) -> Self {
        self.elasticsearch_port = Some(port);
        self
    }

    pub fn with_kibana_host(mut self, host: String) -> Self {
        self.kibana_host = Some(host);
        self
    }

    pub fn with_kibana_port(mut self, port: u16) -> Self {
        self.kibana_port = Some(port);
        self
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_password(mut self, password: SecretString) -> Self {
        self.password = Some(password);
        self
    }

    pub fn with_index_name(mut self, index_name: String) -> Self {
        self.index_name = Some(index_name);
        self
    }

    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    pub fn with_ca_bundle(mut self, path: PathBuf) -> Self {
        self.ca_bundle = Some(path);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate and build the final [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when the Elasticsearch host,
    /// Kibana host, or index name was never provided. A CA bundle combined
    /// with `skip_verify` is rejected as contradictory.
    pub fn build(self) -> Result<Config, ConfigError> {
        let elasticsearch_host = self
            .elasticsearch_host
            .ok_or(ConfigError::MissingField("Elasticsearch host"))?;
        let kibana_host = self
            .kibana_host
            .ok_or(ConfigError::MissingField("Kibana host"))?;
        let index_name = self
            .index_name
            .ok_or(ConfigError::MissingField("index name"))?;

        let tls = match (self.skip_verify.unwrap_or(false), self.ca_bundle) {
            (true, Some(_)) => {
                return Err(ConfigError::InvalidValue {
                    var: "TENANTCTL_CA_BUNDLE".to_string(),
                    message: "cannot be combined with skip_verify".to_string(),
                });
            }
            (true, None) => TlsMode::SkipVerify,
            (false, Some(path)) => TlsMode::CaBundle(path),
            (false, None) => TlsMode::Verify,
        };

        let username = self
            .username
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        let password = self
            .password
            .unwrap_or_else(|| SecretString::new(String::new().into()));

        if tls == TlsMode::SkipVerify {
            tracing::warn!(
                "TLS certificate verification is disabled; only use this against lab clusters"
            );
        }

        Ok(Config {
            elasticsearch: EndpointConfig::new(
                elasticsearch_host,
                self.elasticsearch_port.unwrap_or(DEFAULT_ELASTICSEARCH_PORT),
            ),
            kibana: EndpointConfig::new(
                kibana_host,
                self.kibana_port.unwrap_or(DEFAULT_KIBANA_PORT),
            ),
            credentials: Credentials::new(username, password),
            index_name,
            tls,
            timeout: self.timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        })
    }
}
