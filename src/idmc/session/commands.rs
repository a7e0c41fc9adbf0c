//! Login command handler

use crate::cli::{Cli, Command};
use crate::idmc::IdmcClient;
use crate::output::output_session;

/// Run the login command
///
/// Login already happened when the client was built; this only reports the
/// session that came out of it.
pub async fn run_login_command(
    client: &IdmcClient,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let Command::Login(args) = &cli.command else {
        unreachable!()
    };

    output_session(client.session(), &args.output);
    Ok(())
}
