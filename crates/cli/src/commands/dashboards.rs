//! Dashboard batch-copy command.

use anyhow::Result;
use tracing::info;

use tenantctl_client::TenantNames;
use tenantctl_config::Config;

use crate::commands::{build_client, print_json};

pub async fn run(
    config: &Config,
    client_id: &str,
    source_space_id: &str,
    source_data_view: &str,
) -> Result<()> {
    let names = TenantNames::derive(client_id);
    info!(
        client_id,
        target_space = names.space.as_str(),
        "Copying tenant dashboards"
    );

    let client = build_client(config)?;
    let report = client
        .copy_dashboards(source_space_id, source_data_view, &names)
        .await?;

    print_json(&report)
}
