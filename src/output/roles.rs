//! Role output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{detail_table, or_dash, print_json};
use crate::cli::OutputFormat;
use crate::idmc::{ReconciliationPlan, Role, RolePrivilege};

/// Serializable role for structured output
#[derive(Serialize)]
struct SerializableRole {
    id: String,
    name: String,
    description: Option<String>,
    system_role: bool,
    status: Option<String>,
    org_id: Option<String>,
    created_by: Option<String>,
    updated_by: Option<String>,
    create_time: Option<String>,
    update_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    privileges: Option<Vec<SerializablePrivilege>>,
}

#[derive(Serialize)]
struct SerializablePrivilege {
    id: String,
    name: Option<String>,
    service: Option<String>,
    status: Option<String>,
}

impl From<&RolePrivilege> for SerializablePrivilege {
    fn from(p: &RolePrivilege) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            service: p.service.clone(),
            status: p.status.clone(),
        }
    }
}

impl From<&Role> for SerializableRole {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id.clone(),
            name: role.name().to_string(),
            description: role.description.clone(),
            system_role: role.is_system_role(),
            status: role.status.clone(),
            org_id: role.org_id.clone(),
            created_by: role.created_by.clone(),
            updated_by: role.updated_by.clone(),
            create_time: role.create_time.clone(),
            update_time: role.update_time.clone(),
            privileges: role
                .privileges
                .as_ref()
                .map(|ps| ps.iter().map(SerializablePrivilege::from).collect()),
        }
    }
}

/// Output a list of roles
pub fn output_roles(roles: &[Role], with_privileges: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            let mut header = vec!["ID", "NAME", "SYSTEM", "STATUS"];
            if with_privileges {
                header.push("PRIVILEGES");
            }
            header.push("DESCRIPTION");
            table.set_header(header);

            for role in roles {
                let mut row = vec![
                    role.id.clone(),
                    role.name().to_string(),
                    role.is_system_role().to_string(),
                    role.status().to_string(),
                ];
                if with_privileges {
                    row.push(role.privilege_ids().len().to_string());
                }
                row.push(role.description().to_string());
                table.add_row(row);
            }

            println!("{table}");
        }
        OutputFormat::Json => {
            let serializable: Vec<SerializableRole> =
                roles.iter().map(SerializableRole::from).collect();
            print_json(&serializable);
        }
    }
}

/// Output one role with its privileges
pub fn output_role(role: &Role, format: &OutputFormat) {
    match format {
        OutputFormat::Table => {
            let table = detail_table(&[
                ("ID", role.id.clone()),
                ("Name", role.name().to_string()),
                ("Description", or_dash(role.description.as_deref())),
                ("System role", role.is_system_role().to_string()),
                ("Status", or_dash(role.status.as_deref())),
                ("Created by", or_dash(role.created_by.as_deref())),
                ("Created", or_dash(role.create_time.as_deref())),
                ("Updated by", or_dash(role.updated_by.as_deref())),
                ("Updated", or_dash(role.update_time.as_deref())),
            ]);
            println!("{table}");

            if let Some(privileges) = &role.privileges {
                println!();
                let mut table = Table::new();
                table.load_preset(NOTHING);
                table.set_header(vec!["PRIVILEGE ID", "NAME", "SERVICE", "STATUS"]);
                for p in privileges {
                    table.add_row(vec![
                        p.id.clone(),
                        or_dash(p.name.as_deref()),
                        or_dash(p.service.as_deref()),
                        or_dash(p.status.as_deref()),
                    ]);
                }
                println!("{table}");
            }
        }
        OutputFormat::Json => print_json(&SerializableRole::from(role)),
    }
}

#[derive(Serialize)]
struct SerializablePlan<'a> {
    role_id: &'a str,
    added: Vec<&'a str>,
    removed: Vec<&'a str>,
}

/// Output the privilege changes applied to a role
pub fn output_reconciliation_plan(role_id: &str, plan: &ReconciliationPlan, format: &OutputFormat) {
    match format {
        OutputFormat::Table => {
            if plan.is_empty() {
                return;
            }
            let mut table = Table::new();
            table.load_preset(NOTHING);
            table.set_header(vec!["CHANGE", "PRIVILEGE ID"]);
            for id in &plan.to_add {
                table.add_row(vec!["+ added", id.as_str()]);
            }
            for id in &plan.to_remove {
                table.add_row(vec!["- removed", id.as_str()]);
            }
            println!("{table}");
        }
        OutputFormat::Json => print_json(&SerializablePlan {
            role_id,
            added: plan.to_add.iter().map(String::as_str).collect(),
            removed: plan.to_remove.iter().map(String::as_str).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_role(with_privileges: bool) -> Role {
        let mut value = serde_json::json!({
            "id": "r-1",
            "roleName": "auditor",
            "description": "Read only",
            "systemRole": false,
            "status": "ENABLED"
        });
        if with_privileges {
            value["privileges"] = serde_json::json!([
                {"id": "p1", "name": "view.role", "service": "Administrator", "status": "Enabled"}
            ]);
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_serializable_role() {
        let role = create_test_role(true);
        let serializable = SerializableRole::from(&role);

        assert_eq!(serializable.id, "r-1");
        assert_eq!(serializable.name, "auditor");
        assert!(!serializable.system_role);
        assert_eq!(serializable.privileges.as_ref().map(|p| p.len()), Some(1));
    }

    #[test]
    fn test_serializable_role_skips_missing_privileges() {
        let role = create_test_role(false);
        let json = serde_json::to_value(SerializableRole::from(&role)).unwrap();
        assert!(json.get("privileges").is_none());
    }

    #[test]
    fn test_serializable_plan_is_sorted() {
        let plan = ReconciliationPlan {
            to_add: ["p3", "p1"].iter().map(|s| s.to_string()).collect(),
            to_remove: ["p4"].iter().map(|s| s.to_string()).collect(),
        };
        let json = serde_json::to_value(SerializablePlan {
            role_id: "r-1",
            added: plan.to_add.iter().map(String::as_str).collect(),
            removed: plan.to_remove.iter().map(String::as_str).collect(),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"role_id": "r-1", "added": ["p1", "p3"], "removed": ["p4"]})
        );
    }
}
