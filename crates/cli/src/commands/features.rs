//! Kibana feature listing command.
//!
//! Useful for checking which feature ids exist on the target cluster
//! before relying on the space deny-list.

use anyhow::Result;

use tenantctl_config::Config;

use crate::commands::{build_client, print_json};

pub async fn run(config: &Config) -> Result<()> {
    let client = build_client(config)?;
    let features = client.get_features().await?;
    print_json(&serde_json::json!({ "features": features }))
}
