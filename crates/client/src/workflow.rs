//! Tenant provisioning workflow.
//!
//! Responsibilities:
//! - Derive the tenant naming scheme once per invocation.
//! - Run the requested subset of operations in a fixed order: alias,
//!   space, role, user, data view, dashboards.
//! - Collect every step's outcome into an ordered report list.
//!
//! Does NOT handle:
//! - The individual operations (resource methods on [`AutomationClient`]).
//! - Aborting on step failure: a failed step is reported and the
//!   remaining requested steps still run. Hard stops exist only inside
//!   the dashboard-copy protocol itself.

use secrecy::SecretString;
use serde::Serialize;
use tracing::{info, warn};

use crate::client::AutomationClient;
use crate::error::ClientError;
use crate::models::OpReport;
use crate::tenant::TenantNames;

/// Description attached to every tenant space.
pub const SPACE_DESCRIPTION: &str = "Space for events analysis";

/// Which provisioning operations to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepFlags {
    pub alias: bool,
    pub space: bool,
    pub role: bool,
    pub user: bool,
    pub data_view: bool,
    pub dashboards: bool,
}

impl StepFlags {
    /// Every operation enabled.
    pub fn all() -> Self {
        Self {
            alias: true,
            space: true,
            role: true,
            user: true,
            data_view: true,
            dashboards: true,
        }
    }
}

/// One tenant provisioning invocation.
#[derive(Debug, Clone)]
pub struct ProvisionRequest {
    /// Stable client identifier; all resource names derive from it.
    pub client_id: String,
    /// Human-readable display name for the tenant space.
    pub space_name: String,
    /// Index the tenant alias is carved out of.
    pub index_name: String,
    /// Space the dashboard batch copies from.
    pub source_space_id: String,
    /// Display name of the data view the source dashboards reference.
    pub source_data_view: String,
    pub steps: StepFlags,
}

/// Outcome of one requested step.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub operation: String,
    #[serde(flatten)]
    pub report: OpReport,
}

impl StepReport {
    fn from_outcome(
        operation: &str,
        outcome: Result<OpReport, ClientError>,
    ) -> Self {
        let report = match outcome {
            Ok(report) => report,
            Err(e) => OpReport::error(e.to_string()),
        };
        Self {
            operation: operation.to_string(),
            report,
        }
    }
}

impl AutomationClient {
    /// Provision a tenant: run the requested operations in the fixed order
    /// and return one report per requested step, in that order.
    pub async fn provision_tenant(&self, request: &ProvisionRequest) -> Vec<StepReport> {
        let names = TenantNames::derive(&request.client_id);
        info!(
            client_id = request.client_id.as_str(),
            space = names.space.as_str(),
            "Provisioning tenant"
        );

        let mut results = Vec::new();

        if request.steps.alias {
            let outcome = self
                .create_index_alias(&request.index_name, &names.alias, Some(&request.client_id))
                .await;
            results.push(StepReport::from_outcome("create_index_alias", outcome));
        }

        if request.steps.space {
            let outcome = self
                .create_space(&names.space, &request.space_name, SPACE_DESCRIPTION)
                .await;
            results.push(StepReport::from_outcome("create_space", outcome));
        }

        if request.steps.role {
            let outcome = self
                .create_role(&names.role, std::slice::from_ref(&names.alias), &names.space)
                .await;
            results.push(StepReport::from_outcome("create_role", outcome));
        }

        if request.steps.user {
            // The tenant password equals the derived username; predictable
            // credentials (see DESIGN.md).
            warn!(
                user = names.client_name.as_str(),
                "Creating tenant user with derived (predictable) password"
            );
            let password = SecretString::new(names.client_name.clone().into());
            let outcome = self
                .create_user(
                    &names.client_name,
                    &password,
                    std::slice::from_ref(&names.role),
                )
                .await;
            results.push(StepReport::from_outcome("create_user", outcome));
        }

        if request.steps.data_view {
            let outcome = self
                .create_data_view(&names.space, &names.data_view, &names.alias)
                .await;
            results.push(StepReport::from_outcome("create_data_view", outcome));
        }

        if request.steps.dashboards {
            let outcome = self
                .copy_dashboards(&request.source_space_id, &request.source_data_view, &names)
                .await;
            results.push(StepReport::from_outcome("copy_dashboards", outcome));
        }

        results
    }
}
