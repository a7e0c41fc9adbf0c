//! Output formatting module
//!
//! Every resource prints as a table (comfy-table) or as JSON.

mod agent_installer;
mod common;
mod privileges;
mod roles;
mod runtime_environments;
mod session;

pub use agent_installer::output_agent_installer_info;
pub use privileges::output_privileges;
pub use roles::{output_reconciliation_plan, output_role, output_roles};
pub use runtime_environments::{output_runtime_environment, output_runtime_environments};
pub use session::output_session;
