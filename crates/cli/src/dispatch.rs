//! Command dispatch: route a parsed subcommand to its implementation.

use anyhow::Result;
use tenantctl_config::Config;

use crate::args::Commands;
use crate::commands;

pub async fn run_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Provision {
            client_id,
            space_name,
            alias,
            space,
            role,
            user,
            data_view,
            dashboards,
            all,
            source_space,
            source_data_view,
        } => {
            let steps = if all {
                tenantctl_client::StepFlags::all()
            } else {
                tenantctl_client::StepFlags {
                    alias,
                    space,
                    role,
                    user,
                    data_view,
                    dashboards,
                }
            };
            commands::provision::run(
                config,
                client_id,
                space_name,
                steps,
                source_space,
                source_data_view,
            )
            .await
        }
        Commands::CopyDashboards {
            client_id,
            source_space,
            source_data_view,
        } => commands::dashboards::run(config, &client_id, &source_space, &source_data_view).await,
        Commands::Spaces { command } => commands::spaces::run(config, command).await,
        Commands::Roles => commands::roles::run(config).await,
        Commands::Users => commands::users::run(config).await,
        Commands::DataViews => commands::data_views::run(config).await,
        Commands::Alias { name } => commands::alias::run(config, &name).await,
        Commands::Features => commands::features::run(config).await,
    }
}
