//! REST automation client for multi-tenant Elasticsearch/Kibana provisioning.
//!
//! This crate provides a type-safe client for provisioning per-tenant
//! observability resources (index aliases, security roles, users, spaces,
//! data views) and for copying dashboards between Kibana spaces while
//! retargeting their data-view references.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod tenant;
pub mod workflow;

pub use auth::Credentials;
pub use client::AutomationClient;
pub use client::builder::AutomationClientBuilder;
pub use client::migration::{DashboardCopyRequest, TENANT_DASHBOARDS};
pub use error::{ClientError, Result};
pub use models::{
    DataViewSummary, ImportResponse, ImportedObject, OpReport, OpStatus, Reference, SavedObject,
    Space,
};
pub use tenant::TenantNames;
pub use workflow::{ProvisionRequest, SPACE_DESCRIPTION, StepFlags, StepReport};
