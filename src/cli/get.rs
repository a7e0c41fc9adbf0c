//! Get command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;
use crate::idmc::{Platform, PrivilegeStatus};

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get roles
    #[command(visible_alias = "roles")]
    Role(RoleArgs),

    /// Get privileges
    #[command(visible_alias = "privileges")]
    Privilege(PrivilegeArgs),

    /// Get runtime environments
    #[command(
        visible_alias = "rtes",
        visible_alias = "runtime-environment",
        visible_alias = "runtime-environments"
    )]
    Rte(RteArgs),

    /// Get Secure Agent installer download details
    #[command(visible_alias = "agent-installer-info")]
    AgentInstaller(AgentInstallerArgs),
}

/// Arguments for 'get role' subcommand
#[derive(Parser, Debug)]
pub struct RoleArgs {
    /// Role ID (if specified, shows details and privileges for that role)
    #[arg(conflicts_with = "name")]
    pub id: Option<String>,

    /// Look up a single role by exact name
    #[arg(long)]
    pub name: Option<String>,

    /// Include privilege counts when listing
    #[arg(long, default_value_t = false)]
    pub with_privileges: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get privilege' subcommand
#[derive(Parser, Debug)]
pub struct PrivilegeArgs {
    /// Only show privileges with this status
    #[arg(long, value_enum)]
    pub status: Option<PrivilegeStatus>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get rte' subcommand
#[derive(Parser, Debug)]
pub struct RteArgs {
    /// Runtime environment ID (if specified, shows details for that environment)
    pub id: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get agent-installer' subcommand
#[derive(Parser, Debug)]
pub struct AgentInstallerArgs {
    /// Target platform of the installer
    #[arg(value_enum)]
    pub platform: Platform,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
