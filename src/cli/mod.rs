//! CLI argument parsing

mod common;
mod create;
mod delete;
mod get;
mod update;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::OutputFormat;
pub use create::{CreateResource, CreateRoleArgs, CreateRteArgs};
pub use delete::{DeleteResource, DeleteRoleArgs, DeleteRteArgs};
pub use get::{AgentInstallerArgs, GetResource, PrivilegeArgs, RoleArgs, RteArgs};
pub use update::{UpdateResource, UpdateRoleArgs, UpdateRteArgs};

/// Manage Informatica IDMC administration resources
#[derive(Parser, Debug)]
#[command(name = "idmcctl")]
#[command(version)]
#[command(
    about = "Manage Informatica Intelligent Data Management Cloud (IDMC) roles, privileges and runtime environments",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Login host, e.g. dm-us.informaticacloud.com (or set IDMC_AUTH_HOST)
    #[arg(short = 'H', long, global = true)]
    pub host: Option<String>,

    /// Username (or set IDMC_AUTH_USER)
    #[arg(short = 'u', long, global = true)]
    pub username: Option<String>,

    /// Password (or set IDMC_AUTH_PASS)
    #[arg(short = 'p', long, global = true)]
    pub password: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Whole-request timeout in seconds
    #[arg(
        long,
        global = true,
        env = "IDMC_HTTP_TIMEOUT",
        default_value_t = defaults::REQUEST_TIMEOUT_SECS
    )]
    pub timeout: u64,

    /// Batch mode - no prompts, no spinners
    #[arg(short, long, global = true, default_value_t = false)]
    pub batch: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and show the session details
    Login(LoginArgs),

    /// Get resources
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Create resources
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// Update resources
    Update {
        #[command(subcommand)]
        resource: UpdateResource,
    },

    /// Delete resources
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },
}

/// Arguments for 'login'
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idmc::{Platform, PrivilegeStatus};

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["idmcctl", "login"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(!cli.batch);
        assert!(cli.host.is_none());
        assert!(cli.username.is_none());
        assert!(cli.password.is_none());
        let Command::Login(args) = cli.command else {
            panic!("Expected login command");
        };
        assert_eq!(args.output, OutputFormat::Table);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "idmcctl",
            "get",
            "role",
            "--host",
            "dm-us.informaticacloud.com",
            "-u",
            "user",
            "-p",
            "pass",
            "--timeout",
            "5",
            "--batch",
        ]);
        assert_eq!(cli.host.as_deref(), Some("dm-us.informaticacloud.com"));
        assert_eq!(cli.username.as_deref(), Some("user"));
        assert_eq!(cli.password.as_deref(), Some("pass"));
        assert_eq!(cli.timeout, 5);
        assert!(cli.batch);
    }

    #[test]
    fn test_get_role_by_id() {
        let cli = Cli::parse_from(["idmcctl", "get", "role", "r-1", "-o", "json"]);
        let Command::Get {
            resource: GetResource::Role(args),
        } = cli.command
        else {
            panic!("Expected get role");
        };
        assert_eq!(args.id.as_deref(), Some("r-1"));
        assert_eq!(args.output, OutputFormat::Json);
    }

    #[test]
    fn test_get_role_id_and_name_conflict() {
        let result = Cli::try_parse_from(["idmcctl", "get", "role", "r-1", "--name", "auditor"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_get_privileges_with_status() {
        let cli = Cli::parse_from(["idmcctl", "get", "privileges", "--status", "enabled"]);
        let Command::Get {
            resource: GetResource::Privilege(args),
        } = cli.command
        else {
            panic!("Expected get privilege");
        };
        assert_eq!(args.status, Some(PrivilegeStatus::Enabled));
    }

    #[test]
    fn test_get_agent_installer_platform() {
        let cli = Cli::parse_from(["idmcctl", "get", "agent-installer", "linux64"]);
        let Command::Get {
            resource: GetResource::AgentInstaller(args),
        } = cli.command
        else {
            panic!("Expected get agent-installer");
        };
        assert_eq!(args.platform, Platform::Linux64);
    }

    #[test]
    fn test_create_role_requires_privilege() {
        let result = Cli::try_parse_from(["idmcctl", "create", "role", "auditor"]);
        assert!(result.is_err());

        let cli = Cli::parse_from([
            "idmcctl",
            "create",
            "role",
            "auditor",
            "--privilege",
            "p1",
            "--privilege",
            "p2",
        ]);
        let Command::Create {
            resource: CreateResource::Role(args),
        } = cli.command
        else {
            panic!("Expected create role");
        };
        assert_eq!(args.privileges, vec!["p1", "p2"]);
    }

    #[test]
    fn test_update_role_requires_privilege() {
        let result = Cli::try_parse_from(["idmcctl", "update", "role", "r-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_role_privileges_comma_separated() {
        let cli = Cli::parse_from([
            "idmcctl",
            "update",
            "role",
            "r-1",
            "--privilege",
            "p1,p2",
        ]);
        let Command::Update {
            resource: UpdateResource::Role(args),
        } = cli.command
        else {
            panic!("Expected update role");
        };
        assert_eq!(args.privileges, vec!["p1", "p2"]);
    }

    #[test]
    fn test_delete_rte_with_yes() {
        let cli = Cli::parse_from(["idmcctl", "delete", "rte", "rte-1", "-y"]);
        let Command::Delete {
            resource: DeleteResource::Rte(args),
        } = cli.command
        else {
            panic!("Expected delete rte");
        };
        assert_eq!(args.id, "rte-1");
        assert!(args.yes);
    }
}
