//! IDMCctl - Manage Informatica Intelligent Data Management Cloud
//!
//! A CLI and library for administering IDMC organizations.
//!
//! # Features
//!
//! - Session login with automatic region discovery
//! - v2 and v3 header injection through a request pipeline
//! - Role privilege reconciliation (add new, then remove stale)
//! - Runtime environments and Secure Agent installer details
//! - Multiple output formats (table, JSON)
//!
//! # Example
//!
//! ```bash
//! export IDMC_AUTH_HOST=dm-us.informaticacloud.com
//! export IDMC_AUTH_USER=admin@example.com
//! export IDMC_AUTH_PASS=secret
//!
//! # Show the session
//! idmcctl login
//!
//! # List roles with their privileges
//! idmcctl get role --with-privileges
//!
//! # Make a role hold exactly these privileges
//! idmcctl update role 3xKz1 --privilege p1,p2,p3
//!
//! # Output as JSON
//! idmcctl get rte -o json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod idmc;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, GetResource, OutputFormat};
pub use error::{IdmcError, Result};
pub use idmc::{
    authenticate, reconcile, AgentInstallerInfo, ApiVersion, CredentialResolver, Credentials,
    HttpSettings, IdmcClient, Pipeline, Platform, Privilege, PrivilegeSet, ReconciliationPlan,
    Role, RuntimeEnvironment, Session, Transport,
};
