//! Data-view listing command.

use anyhow::Result;

use tenantctl_config::Config;

use crate::commands::{build_client, print_json};

pub async fn run(config: &Config) -> Result<()> {
    let client = build_client(config)?;
    let data_views = client.get_data_views().await?;
    print_json(&serde_json::json!({ "dataviews": data_views }))
}
