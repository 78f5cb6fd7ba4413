//! Error types for the automation client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during automation client operations.
///
/// These are the "hard" failures: transport problems and non-2xx responses
/// on operations whose result is required by subsequent steps. Provisioning
/// writes report non-2xx outcomes through [`crate::models::OpReport`]
/// instead and reserve this enum for transport failures.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from one of the platform APIs.
    #[error("API error ({status}) at {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    /// Missing or unusable credentials.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Input validation failed before any request was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// TLS configuration error.
    #[error("TLS error: {0}")]
    Tls(String),

    /// A data view could not be resolved by display name.
    #[error("Data view '{name}' not found in space '{space}'")]
    DataViewNotFound { name: String, space: String },

    /// A dashboard copy aborted partway through the protocol.
    #[error("Failed to copy dashboard {dashboard_id}: {source}")]
    CopyFailed {
        dashboard_id: String,
        #[source]
        source: Box<ClientError>,
    },
}

impl ClientError {
    /// Check if this error indicates a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.root(),
            Self::DataViewNotFound { .. } | Self::Api { status: 404, .. }
        )
    }

    /// Check if this error indicates an authentication/authorization failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.root(),
            Self::AuthFailed(_) | Self::Api { status: 401 | 403, .. }
        )
    }

    /// The underlying error, unwrapping any copy-context layers.
    pub fn root(&self) -> &ClientError {
        match self {
            Self::CopyFailed { source, .. } => source.root(),
            other => other,
        }
    }
}
