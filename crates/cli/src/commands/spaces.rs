//! Space listing and deletion commands.
//!
//! Invariants:
//! - Deletion requires --force; there is no interactive confirmation.

use anyhow::{Result, bail};
use clap::Subcommand;
use tracing::info;

use tenantctl_config::Config;

use crate::commands::{build_client, print_json};

#[derive(Debug, Subcommand)]
pub enum SpacesCommand {
    /// List all spaces (default)
    List,
    /// Delete a space by id
    Delete {
        /// Space id (e.g. client_42_space)
        id: String,
        /// Confirm the deletion
        #[arg(short, long)]
        force: bool,
    },
}

pub async fn run(config: &Config, command: SpacesCommand) -> Result<()> {
    match command {
        SpacesCommand::List => {
            let client = build_client(config)?;
            let spaces = client.get_spaces().await?;
            print_json(&serde_json::json!({ "spaces": spaces }))
        }
        SpacesCommand::Delete { id, force } => {
            if !force {
                bail!("refusing to delete space '{id}' without --force");
            }
            info!(space = id.as_str(), "Deleting space");
            let client = build_client(config)?;
            let report = client.delete_space(&id).await?;
            print_json(&report)?;
            if !report.is_success() {
                bail!("space deletion failed");
            }
            Ok(())
        }
    }
}
