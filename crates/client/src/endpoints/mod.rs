//! REST API endpoint implementations.
//!
//! Responsibilities:
//! - Build and send the actual HTTP requests for each platform operation.
//! - Translate non-2xx responses into soft reports or hard errors.
//!
//! Does NOT handle:
//! - Operation sequencing (see [`crate::client`] and [`crate::workflow`]).
//! - Client construction and TLS setup (see [`crate::client::builder`]).
//!
//! Invariants:
//! - No endpoint retries; a request is sent exactly once.
//! - Every Kibana call carries the `kbn-xsrf` header.

pub mod aliases;
pub mod data_views;
pub mod saved_objects;
pub mod security;
pub mod spaces;
pub mod url_encoding;

use reqwest::Response;

use crate::error::{ClientError, Result};
use crate::models::OpReport;

pub use url_encoding::encode_path_segment;

/// Anti-CSRF header required by the Kibana API on every call.
pub(crate) const XSRF_HEADER: &str = "kbn-xsrf";
pub(crate) const XSRF_VALUE: &str = "true";

/// Turn a non-2xx response into [`ClientError::Api`], carrying the body.
///
/// Used by the hard tier: operations whose result is required by
/// subsequent steps.
pub(crate) async fn require_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    Err(ClientError::Api {
        status: status.as_u16(),
        url,
        message,
    })
}

/// Map any HTTP outcome onto an [`OpReport`].
///
/// Used by the soft tier: a non-2xx response becomes an error report
/// carrying the raw platform body, never an `Err`.
pub(crate) async fn soft_report(response: Response, success_message: &str) -> Result<OpReport> {
    if response.status().is_success() {
        Ok(OpReport::success(success_message))
    } else {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        Ok(OpReport::error(body))
    }
}
