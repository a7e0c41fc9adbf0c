//! Runtime environments module - Secure Agent groups (v2 API)

mod api;
mod commands;
mod models;

pub use commands::{
    run_create_rte_command, run_delete_rte_command, run_get_rte_command, run_update_rte_command,
};
pub use models::{RuntimeEnvironment, RuntimeEnvironmentAgent};
