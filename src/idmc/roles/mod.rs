//! Roles module - custom roles and their privilege sets (v3 API)

mod api;
mod commands;
mod models;

pub use commands::{
    run_create_role_command, run_delete_role_command, run_get_role_command,
    run_update_role_command,
};
pub use models::{Role, RoleFilter, RolePrivilege};
