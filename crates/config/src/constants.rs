//! Centralized constants for the tenantctl workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default Elasticsearch HTTP port.
pub const DEFAULT_ELASTICSEARCH_PORT: u16 = 9200;

/// Default Kibana HTTP port.
pub const DEFAULT_KIBANA_PORT: u16 = 5601;

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default username when none is configured.
///
/// Matches the platform's built-in superuser so that a bare development
/// cluster works without extra setup.
pub const DEFAULT_USERNAME: &str = "elastic";
