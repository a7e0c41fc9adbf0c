//! IDMC API module
//!
//! Session login, the header-injecting request pipeline, and the typed
//! operations for each administration resource.

pub mod agent_installer;
pub mod client;
pub mod credentials;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod privileges;
pub mod reconcile;
pub mod roles;
pub mod runtime_environments;
pub mod session;
pub mod transport;

#[cfg(test)]
mod testing;

pub use agent_installer::{run_get_agent_installer_command, AgentInstallerInfo, Platform};
pub use client::IdmcClient;
pub use credentials::{CredentialResolver, Credentials};
pub use logging::{RequestLogger, ResponseLogger};
pub use pipeline::{ApiVersion, Pipeline, RequestHook, ResponseHook, SessionHeaders};
pub use privileges::{run_get_privilege_command, Privilege, PrivilegeStatus};
pub use reconcile::{reconcile, PrivilegeSet, ReconcilePhase, ReconciliationPlan};
pub use roles::{
    run_create_role_command, run_delete_role_command, run_get_role_command,
    run_update_role_command, Role, RoleFilter, RolePrivilege,
};
pub use runtime_environments::{
    run_create_rte_command, run_delete_rte_command, run_get_rte_command, run_update_rte_command,
    RuntimeEnvironment, RuntimeEnvironmentAgent,
};
pub use session::{authenticate, login_url, run_login_command, Session};
pub use transport::{build_http_client, ApiResponse, HttpSettings, Transport};
