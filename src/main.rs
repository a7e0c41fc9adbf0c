//! IDMCctl - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use idmc::cli::{CreateResource, DeleteResource, UpdateResource};
use idmc::idmc::{
    run_create_role_command, run_create_rte_command, run_delete_role_command,
    run_delete_rte_command, run_get_agent_installer_command, run_get_privilege_command,
    run_get_role_command, run_get_rte_command, run_login_command, run_update_role_command,
    run_update_rte_command,
};
use idmc::ui::{create_spinner, finish_spinner};
use idmc::{Cli, Command, CredentialResolver, GetResource, HttpSettings, IdmcClient};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting idmcctl v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let credentials = CredentialResolver::new(
        cli.host.as_deref(),
        cli.username.as_deref(),
        cli.password.as_deref(),
    )
    .resolve()?;
    debug!(
        "Logging in to '{}' as '{}'",
        credentials.host, credentials.username
    );

    let settings = HttpSettings::with_request_timeout(cli.timeout);

    let spinner = create_spinner(&format!("Logging in to {}...", credentials.host), cli.batch);
    let result = IdmcClient::connect(&settings, &credentials).await;
    finish_spinner(spinner);
    let mut client = result?;
    client.set_batch_mode(cli.batch);

    match &cli.command {
        Command::Login(_) => run_login_command(&client, cli).await,
        Command::Get { resource } => match resource {
            GetResource::Role(_) => run_get_role_command(&client, cli).await,
            GetResource::Privilege(_) => run_get_privilege_command(&client, cli).await,
            GetResource::Rte(_) => run_get_rte_command(&client, cli).await,
            GetResource::AgentInstaller(_) => run_get_agent_installer_command(&client, cli).await,
        },
        Command::Create { resource } => match resource {
            CreateResource::Role(_) => run_create_role_command(&client, cli).await,
            CreateResource::Rte(_) => run_create_rte_command(&client, cli).await,
        },
        Command::Update { resource } => match resource {
            UpdateResource::Role(_) => run_update_role_command(&client, cli).await,
            UpdateResource::Rte(_) => run_update_rte_command(&client, cli).await,
        },
        Command::Delete { resource } => match resource {
            DeleteResource::Role(_) => run_delete_role_command(&client, cli).await,
            DeleteResource::Rte(_) => run_delete_rte_command(&client, cli).await,
        },
    }
}
