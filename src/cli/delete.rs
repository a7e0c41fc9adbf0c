//! Delete command resource definitions and arguments

use clap::{Parser, Subcommand};

/// Resource types for the 'delete' command
#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Delete a role
    Role(DeleteRoleArgs),

    /// Delete a runtime environment
    #[command(visible_alias = "runtime-environment")]
    Rte(DeleteRteArgs),
}

/// Arguments for 'delete role' subcommand
#[derive(Parser, Debug)]
pub struct DeleteRoleArgs {
    /// Role ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete rte' subcommand
#[derive(Parser, Debug)]
pub struct DeleteRteArgs {
    /// Runtime environment ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
