//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not assemble the configuration (see `main`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "tenantctl")]
#[command(about = "Provision multi-tenant analytics resources in Elasticsearch and Kibana", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  tenantctl provision --client-id 42 --all --space-name 'Retail Analytics'\n  tenantctl provision --client-id 42 --space --role --user\n  tenantctl copy-dashboards --client-id 42 --source-data-view 'Demo Events'\n  tenantctl spaces list\n  tenantctl alias client_42_alias\n"
)]
pub struct Cli {
    /// Elasticsearch host
    #[arg(long, global = true, env = "TENANTCTL_ES_HOST")]
    pub es_host: Option<String>,

    /// Elasticsearch port (default 9200)
    #[arg(long, global = true, env = "TENANTCTL_ES_PORT")]
    pub es_port: Option<u16>,

    /// Kibana host
    #[arg(long, global = true, env = "TENANTCTL_KB_HOST")]
    pub kb_host: Option<String>,

    /// Kibana port (default 5601)
    #[arg(long, global = true, env = "TENANTCTL_KB_PORT")]
    pub kb_port: Option<u16>,

    /// Username for basic authentication
    #[arg(short, long, global = true, env = "TENANTCTL_USERNAME")]
    pub username: Option<String>,

    /// Password for basic authentication
    #[arg(short, long, global = true, env = "TENANTCTL_PASSWORD")]
    pub password: Option<String>,

    /// Index the tenant aliases are carved out of
    #[arg(long, global = true, env = "TENANTCTL_INDEX")]
    pub index: Option<String>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "TENANTCTL_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Verify TLS against a PEM CA bundle instead of the system store
    #[arg(long, global = true, env = "TENANTCTL_CA_BUNDLE", value_name = "FILE")]
    pub ca_bundle: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "TENANTCTL_TIMEOUT")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Provision tenant resources in a fixed order
    Provision {
        /// Client identifier all resource names derive from
        #[arg(long)]
        client_id: String,

        /// Display name for the tenant space
        #[arg(long, default_value = "Client Space")]
        space_name: String,

        /// Create the filtered index alias
        #[arg(long)]
        alias: bool,

        /// Create the tenant space
        #[arg(long)]
        space: bool,

        /// Create the tenant role
        #[arg(long)]
        role: bool,

        /// Create the tenant user
        #[arg(long)]
        user: bool,

        /// Create the tenant data view
        #[arg(long)]
        data_view: bool,

        /// Copy the tenant dashboard set
        #[arg(long)]
        dashboards: bool,

        /// Run every provisioning step
        #[arg(long, conflicts_with_all = ["alias", "space", "role", "user", "data_view", "dashboards"])]
        all: bool,

        /// Space the dashboard batch copies from
        #[arg(long, default_value = "default")]
        source_space: String,

        /// Display name of the data view the source dashboards reference
        #[arg(long, default_value = "Demo Events")]
        source_data_view: String,
    },

    /// Copy the tenant dashboard set into an existing tenant space
    CopyDashboards {
        /// Client identifier the target space/data view derive from
        #[arg(long)]
        client_id: String,

        /// Space the dashboards are copied from
        #[arg(long, default_value = "default")]
        source_space: String,

        /// Display name of the data view the source dashboards reference
        #[arg(long, default_value = "Demo Events")]
        source_data_view: String,
    },

    /// List and manage Kibana spaces
    Spaces {
        #[command(subcommand)]
        command: commands::spaces::SpacesCommand,
    },

    /// List all roles
    Roles,

    /// List all users
    Users,

    /// List data views in the default space
    DataViews,

    /// Show an alias structure (backing indices and filters)
    Alias {
        /// Alias name
        name: String,
    },

    /// List the feature ids a space can disable
    Features,
}
