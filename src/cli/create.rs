//! Create command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'create' command
#[derive(Subcommand, Debug)]
pub enum CreateResource {
    /// Create a custom role
    Role(CreateRoleArgs),

    /// Create a runtime environment
    #[command(visible_alias = "runtime-environment")]
    Rte(CreateRteArgs),
}

/// Arguments for 'create role' subcommand
#[derive(Parser, Debug)]
pub struct CreateRoleArgs {
    /// Role name
    pub name: String,

    /// Role description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Privilege ID to grant (repeatable or comma-separated)
    #[arg(long = "privilege", value_name = "ID", value_delimiter = ',', required = true)]
    pub privileges: Vec<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'create rte' subcommand
#[derive(Parser, Debug)]
pub struct CreateRteArgs {
    /// Runtime environment name
    pub name: String,

    /// Share the environment with sub-organizations
    #[arg(long, default_value_t = false)]
    pub shared: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
