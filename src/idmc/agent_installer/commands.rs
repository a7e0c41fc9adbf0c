//! Secure Agent installer command handlers

use crate::cli::{Cli, Command, GetResource};
use crate::idmc::IdmcClient;
use crate::output::output_agent_installer_info;
use crate::ui::{create_spinner, finish_spinner};

/// Run the get agent-installer command
pub async fn run_get_agent_installer_command(
    client: &IdmcClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::AgentInstaller(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner(
        &format!("Fetching {} installer info...", args.platform),
        client.is_batch_mode(),
    );
    let result = client.get_agent_installer_info(args.platform).await;
    finish_spinner(spinner);

    output_agent_installer_info(args.platform, &result?, &args.output);
    Ok(())
}
