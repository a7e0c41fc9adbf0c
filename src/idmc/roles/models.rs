//! Role data models

use serde::{Deserialize, Serialize};

use crate::error::{IdmcError, Result};
use crate::idmc::reconcile::PrivilegeSet;

/// Role as returned by the v3 roles endpoint
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    #[serde(default)]
    pub org_id: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub updated_by: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub display_description: Option<String>,
    #[serde(default)]
    pub system_role: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
    /// Only present when listed with `expand=privileges`
    #[serde(default)]
    pub privileges: Option<Vec<RolePrivilege>>,
}

impl Role {
    pub fn name(&self) -> &str {
        self.role_name.as_deref().unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }

    pub fn is_system_role(&self) -> bool {
        self.system_role.unwrap_or(false)
    }

    /// Ids of the privileges granted to this role
    pub fn privilege_ids(&self) -> PrivilegeSet {
        self.privileges
            .iter()
            .flatten()
            .map(|p| p.id.clone())
            .collect()
    }
}

/// Privilege as embedded in a role
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RolePrivilege {
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

/// Body of a role creation request
#[derive(Serialize, Debug)]
pub struct CreateRoleRequest<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub privileges: Vec<&'a str>,
}

/// Body of the add/remove privileges requests
#[derive(Serialize, Debug)]
pub struct RolePrivilegesRequest<'a> {
    pub privileges: Vec<&'a str>,
}

impl<'a> RolePrivilegesRequest<'a> {
    pub fn new(privileges: &'a PrivilegeSet) -> Self {
        Self {
            privileges: privileges.iter().map(String::as_str).collect(),
        }
    }
}

/// Which roles a listing asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleFilter {
    All,
    Id(String),
    Name(String),
}

impl RoleFilter {
    /// Value of the `q` query parameter, if any
    ///
    /// The filter language has no escape for `"`, so values containing one
    /// are rejected.
    pub fn query(&self) -> Result<Option<String>> {
        let (field, value) = match self {
            RoleFilter::All => return Ok(None),
            RoleFilter::Id(id) => ("roleId", id),
            RoleFilter::Name(name) => ("roleName", name),
        };
        if value.contains('"') {
            return Err(IdmcError::Config(format!(
                "{} '{}' must not contain '\"'",
                field, value
            )));
        }
        Ok(Some(format!("{}==\"{}\"", field, value)))
    }
}
