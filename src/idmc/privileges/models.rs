//! Privilege data models

use clap::ValueEnum;
use serde::Deserialize;

/// Privilege as returned by the v3 privileges endpoint
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Privilege {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Privilege {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn service(&self) -> &str {
        self.service.as_deref().unwrap_or("")
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }
}

/// Privilege status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrivilegeStatus {
    /// Enabled privileges
    Enabled,
    /// Disabled privileges
    Disabled,
    /// Privileges no licensed service grants
    Unassigned,
}

impl PrivilegeStatus {
    /// Value used by the API's `status` filter
    pub fn as_api_str(&self) -> &'static str {
        match self {
            PrivilegeStatus::Enabled => "Enabled",
            PrivilegeStatus::Disabled => "Disabled",
            PrivilegeStatus::Unassigned => "Unassigned",
        }
    }
}
