//! Command implementations.

pub mod alias;
pub mod dashboards;
pub mod data_views;
pub mod features;
pub mod provision;
pub mod roles;
pub mod spaces;
pub mod users;

use anyhow::Result;
use tenantctl_client::AutomationClient;
use tenantctl_config::Config;

/// Build the automation client from the loaded configuration.
pub fn build_client(config: &Config) -> Result<AutomationClient> {
    Ok(AutomationClient::builder().from_config(config).build()?)
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
