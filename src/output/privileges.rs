//! Privilege output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::print_json;
use crate::cli::OutputFormat;
use crate::idmc::Privilege;

#[derive(Serialize)]
struct SerializablePrivilege<'a> {
    id: &'a str,
    name: &'a str,
    service: &'a str,
    status: &'a str,
    description: &'a str,
}

impl<'a> From<&'a Privilege> for SerializablePrivilege<'a> {
    fn from(p: &'a Privilege) -> Self {
        Self {
            id: &p.id,
            name: p.name(),
            service: p.service(),
            status: p.status(),
            description: p.description(),
        }
    }
}

/// Output privileges in the specified format
pub fn output_privileges(privileges: &[Privilege], format: &OutputFormat) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            table.set_header(vec!["ID", "NAME", "SERVICE", "STATUS"]);

            for p in privileges {
                table.add_row(vec![p.id.as_str(), p.name(), p.service(), p.status()]);
            }

            println!("{table}");
        }
        OutputFormat::Json => {
            let serializable: Vec<SerializablePrivilege> =
                privileges.iter().map(SerializablePrivilege::from).collect();
            print_json(&serializable);
        }
    }
}
