//! Agent installer module - Secure Agent download details

mod api;
mod commands;
mod models;

pub use commands::run_get_agent_installer_command;
pub use models::{AgentInstallerInfo, Platform};
