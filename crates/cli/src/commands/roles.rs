//! Role listing command.

use anyhow::Result;

use tenantctl_config::Config;

use crate::commands::{build_client, print_json};

pub async fn run(config: &Config) -> Result<()> {
    let client = build_client(config)?;
    let roles = client.get_roles().await?;
    print_json(&serde_json::json!({ "roles": roles }))
}
