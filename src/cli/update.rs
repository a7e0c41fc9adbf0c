//! Update command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;

/// Resource types for the 'update' command
#[derive(Subcommand, Debug)]
pub enum UpdateResource {
    /// Set the privileges of a role (adds missing, removes extra)
    Role(UpdateRoleArgs),

    /// Update a runtime environment
    #[command(visible_alias = "runtime-environment")]
    Rte(UpdateRteArgs),
}

/// Arguments for 'update role' subcommand
#[derive(Parser, Debug)]
pub struct UpdateRoleArgs {
    /// Role ID
    pub id: String,

    /// Complete desired privilege set (repeatable or comma-separated)
    #[arg(long = "privilege", value_name = "ID", value_delimiter = ',', required = true)]
    pub privileges: Vec<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'update rte' subcommand
///
/// Fields that are not given keep their current value.
#[derive(Parser, Debug)]
pub struct UpdateRteArgs {
    /// Runtime environment ID
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// Share the environment with sub-organizations
    #[arg(long)]
    pub shared: Option<bool>,

    /// Secure Agent ID to assign (repeatable or comma-separated; replaces the current agents)
    #[arg(long = "agent", value_name = "ID", value_delimiter = ',')]
    pub agents: Vec<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
