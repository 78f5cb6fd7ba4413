//! Dashboard-copy protocol for [`AutomationClient`].
//!
//! Responsibilities:
//! - Export a dashboard (deep) from a source space and import it into a
//!   target space.
//! - Retarget the imported dashboard's `index-pattern` references from the
//!   source data view to the target data view.
//! - Prune the duplicate source-named data view the import leaves behind.
//! - Run the fixed tenant dashboard set as a sequential batch.
//!
//! Does NOT handle:
//! - Creating the target space or data view (see [`crate::workflow`]).
//!
//! Invariants:
//! - This is the one stateful multi-step procedure in the crate: any
//!   failure halts the sequence and surfaces as a hard error, because
//!   partial completion leaves inconsistent remote state.
//! - Data-view names are resolved before anything is rewritten or deleted.

use tracing::{info, warn};

use crate::client::AutomationClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{ExportRequest, ImportResponse, OpReport};
use crate::tenant::TenantNames;

/// Dashboards copied into every tenant space, in copy order.
pub const TENANT_DASHBOARDS: [&str; 3] = [
    // visitor count
    "3a81edc6-40d2-435a-87a3-41ce352a523d",
    // visitor count by area
    "5b898e8b-12e9-4638-acf3-34fea03e7b61",
    // vehicle count
    "e1f0588e-41fd-45b8-8160-e334b866f2f7",
];

/// Parameters for copying one dashboard between spaces.
#[derive(Debug, Clone)]
pub struct DashboardCopyRequest {
    pub dashboard_id: String,
    pub source_space_id: String,
    pub target_space_id: String,
    /// Display name of the data view the dashboard references in the
    /// source space.
    pub source_data_view: String,
    /// Display name of the data view it should reference after the copy.
    pub target_data_view: String,
}

impl AutomationClient {
    /// Export a single dashboard with its full reference graph as an
    /// NDJSON bundle.
    pub async fn export_dashboard(
        &self,
        dashboard_id: &str,
        source_space_id: &str,
    ) -> Result<Vec<u8>> {
        info!(
            dashboard = dashboard_id,
            space = source_space_id,
            "Exporting dashboard"
        );
        endpoints::saved_objects::export_objects(
            &self.http,
            &self.kibana_base_url,
            &self.credentials,
            source_space_id,
            &ExportRequest::dashboard(dashboard_id),
        )
        .await
    }

    /// Import an export bundle into a space, overwriting existing objects.
    pub async fn import_dashboard(
        &self,
        bundle: Vec<u8>,
        target_space_id: &str,
    ) -> Result<ImportResponse> {
        info!(space = target_space_id, "Importing dashboard bundle");
        endpoints::saved_objects::import_objects(
            &self.http,
            &self.kibana_base_url,
            &self.credentials,
            target_space_id,
            bundle,
        )
        .await
    }

    /// Copy one dashboard between spaces, retargeting its data view.
    ///
    /// The five steps, in order: export from the source space, import into
    /// the target space, resolve the source and target data-view ids by
    /// name, rewrite matching `index-pattern` references on every imported
    /// dashboard, and delete the source-named data view from the target
    /// space. Any failure aborts with [`ClientError::CopyFailed`] wrapping
    /// the underlying error.
    pub async fn copy_dashboard_between_spaces(
        &self,
        request: &DashboardCopyRequest,
    ) -> Result<ImportResponse> {
        info!(
            dashboard = request.dashboard_id.as_str(),
            source = request.source_space_id.as_str(),
            target = request.target_space_id.as_str(),
            "Copying dashboard between spaces"
        );
        self.copy_dashboard_inner(request)
            .await
            .map_err(|e| ClientError::CopyFailed {
                dashboard_id: request.dashboard_id.clone(),
                source: Box::new(e),
            })
    }

    async fn copy_dashboard_inner(&self, request: &DashboardCopyRequest) -> Result<ImportResponse> {
        let bundle = self
            .export_dashboard(&request.dashboard_id, &request.source_space_id)
            .await?;
        let import_result = self.import_dashboard(bundle, &request.target_space_id).await?;

        let source_id = self
            .find_data_view_id(&request.target_space_id, &request.source_data_view)
            .await?;
        let target_id = self
            .find_data_view_id(&request.target_space_id, &request.target_data_view)
            .await?;

        for imported in import_result
            .success_results
            .iter()
            .filter(|object| object.object_type == "dashboard")
        {
            self.retarget_dashboard(
                &request.target_space_id,
                imported.effective_id(),
                &source_id,
                &target_id,
            )
            .await?;
        }

        // The import brings the source-named data view along as a duplicate;
        // prune it even when no reference needed rewriting. When the source
        // name already resolves to a data view in legitimate use, this
        // deletes it (see DESIGN.md).
        let cleanup = self
            .delete_data_view(&request.target_space_id, &source_id)
            .await?;
        if !cleanup.is_success() {
            warn!(
                space = request.target_space_id.as_str(),
                id = source_id.as_str(),
                message = cleanup.message.as_str(),
                "Could not delete source-named data view"
            );
        }

        Ok(import_result)
    }

    /// Rewrite one imported dashboard's `index-pattern` references from
    /// `source_id` to `target_id`, persisting only if something changed.
    async fn retarget_dashboard(
        &self,
        space_id: &str,
        dashboard_id: &str,
        source_id: &str,
        target_id: &str,
    ) -> Result<()> {
        let dashboard = endpoints::saved_objects::get_dashboard(
            &self.http,
            &self.kibana_base_url,
            &self.credentials,
            space_id,
            dashboard_id,
        )
        .await?;

        let mut references = dashboard.references;
        let mut rewritten = 0usize;
        for reference in &mut references {
            if reference.ref_type == "index-pattern"
                && reference.id == source_id
                && reference.id != target_id
            {
                reference.id = target_id.to_string();
                rewritten += 1;
            }
        }

        if rewritten == 0 {
            // Nothing referenced the source data view; leave the document
            // untouched.
            return Ok(());
        }

        info!(
            dashboard = dashboard_id,
            space = space_id,
            rewritten,
            "Rewriting data-view references"
        );
        endpoints::saved_objects::update_dashboard(
            &self.http,
            &self.kibana_base_url,
            &self.credentials,
            space_id,
            dashboard_id,
            &dashboard.attributes,
            &references,
        )
        .await
    }

    /// Copy the fixed tenant dashboard set into a tenant's space.
    ///
    /// Runs [`Self::copy_dashboard_between_spaces`] for each id in
    /// [`TENANT_DASHBOARDS`], sequentially. The first failure aborts the
    /// remaining dashboards; already-copied dashboards are not rolled back.
    pub async fn copy_dashboards(
        &self,
        source_space_id: &str,
        source_data_view: &str,
        names: &TenantNames,
    ) -> Result<OpReport> {
        for dashboard_id in TENANT_DASHBOARDS {
            let request = DashboardCopyRequest {
                dashboard_id: dashboard_id.to_string(),
                source_space_id: source_space_id.to_string(),
                target_space_id: names.space.clone(),
                source_data_view: source_data_view.to_string(),
                target_data_view: names.data_view.clone(),
            };
            self.copy_dashboard_between_spaces(&request).await?;
        }
        Ok(OpReport::success("Dashboards copied successfully"))
    }
}
