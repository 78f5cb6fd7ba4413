//! Configuration management for tenantctl.
//!
//! This crate provides the typed connection configuration shared by the
//! client library and the CLI, plus a loader that assembles it from
//! environment variables and `.env` files.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{Config, Credentials, EndpointConfig, TlsMode};
