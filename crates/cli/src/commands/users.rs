//! User listing command.

use anyhow::Result;

use tenantctl_config::Config;

use crate::commands::{build_client, print_json};

pub async fn run(config: &Config) -> Result<()> {
    let client = build_client(config)?;
    let users = client.get_users().await?;
    print_json(&users)
}
