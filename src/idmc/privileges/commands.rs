//! Privilege command handlers

use log::debug;

use crate::cli::{Cli, Command, GetResource};
use crate::idmc::IdmcClient;
use crate::output::output_privileges;
use crate::ui::{create_spinner, finish_spinner};

/// Run the get privilege command
pub async fn run_get_privilege_command(
    client: &IdmcClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Get {
        resource: GetResource::Privilege(args),
    } = &cli.command
    else {
        unreachable!()
    };

    debug!("Listing privileges (status: {:?})", args.status);

    let spinner = create_spinner("Fetching privileges...", client.is_batch_mode());
    let result = client.list_privileges(args.status).await;
    finish_spinner(spinner);

    let mut privileges = result?;
    privileges.sort_by(|a, b| a.service().cmp(b.service()).then(a.name().cmp(b.name())));

    output_privileges(&privileges, &args.output);
    Ok(())
}
