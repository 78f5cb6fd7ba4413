//! Tenant provisioning command.
//!
//! Responsibilities:
//! - Map the CLI flags onto a provisioning request.
//! - Run the workflow and print the ordered step reports as JSON.
//!
//! Invariants:
//! - The report list is always printed, even when steps failed; the exit
//!   code signals whether every requested step succeeded.

use anyhow::{Result, bail};
use tracing::info;

use tenantctl_client::{ProvisionRequest, StepFlags};
use tenantctl_config::Config;

use crate::commands::{build_client, print_json};

pub async fn run(
    config: &Config,
    client_id: String,
    space_name: String,
    steps: StepFlags,
    source_space_id: String,
    source_data_view: String,
) -> Result<()> {
    if steps == StepFlags::default() {
        bail!("no provisioning steps requested; pass --all or at least one step flag");
    }

    info!(client_id = client_id.as_str(), "Running tenant provisioning");

    let client = build_client(config)?;
    let request = ProvisionRequest {
        client_id,
        space_name,
        index_name: config.index_name.clone(),
        source_space_id,
        source_data_view,
        steps,
    };

    let results = client.provision_tenant(&request).await;
    print_json(&serde_json::json!({ "results": &results }))?;

    let failed = results.iter().filter(|r| !r.report.is_success()).count();
    if failed > 0 {
        bail!("{failed} of {} provisioning steps failed", results.len());
    }
    Ok(())
}
