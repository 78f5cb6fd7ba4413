//! Alias inspection command.

use anyhow::Result;

use tenantctl_config::Config;

use crate::commands::{build_client, print_json};

pub async fn run(config: &Config, alias_name: &str) -> Result<()> {
    let client = build_client(config)?;
    let structure = client.get_alias(alias_name).await?;
    print_json(&structure)
}
