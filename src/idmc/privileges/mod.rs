//! Privileges module - the privilege catalogue roles are built from

mod api;
mod commands;
mod models;

pub use commands::run_get_privilege_command;
pub use models::{Privilege, PrivilegeStatus};
