//! Runtime environment output formatter

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{detail_table, or_dash, print_json};
use crate::cli::OutputFormat;
use crate::idmc::RuntimeEnvironment;

#[derive(Serialize)]
struct SerializableAgent<'a> {
    id: &'a str,
    name: Option<&'a str>,
    org_id: Option<&'a str>,
}

/// Serializable runtime environment for structured output
#[derive(Serialize)]
struct SerializableRuntimeEnvironment<'a> {
    id: &'a str,
    name: &'a str,
    description: Option<&'a str>,
    shared: bool,
    org_id: Option<&'a str>,
    federated_id: Option<&'a str>,
    created_by: Option<&'a str>,
    create_time: Option<&'a str>,
    updated_by: Option<&'a str>,
    update_time: Option<&'a str>,
    agents: Vec<SerializableAgent<'a>>,
}

impl<'a> From<&'a RuntimeEnvironment> for SerializableRuntimeEnvironment<'a> {
    fn from(rte: &'a RuntimeEnvironment) -> Self {
        Self {
            id: &rte.id,
            name: rte.name(),
            description: rte.description.as_deref(),
            shared: rte.is_shared(),
            org_id: rte.org_id.as_deref(),
            federated_id: rte.federated_id.as_deref(),
            created_by: rte.created_by.as_deref(),
            create_time: rte.create_time.as_deref(),
            updated_by: rte.updated_by.as_deref(),
            update_time: rte.update_time.as_deref(),
            agents: rte
                .agents
                .iter()
                .map(|a| SerializableAgent {
                    id: &a.id,
                    name: a.name.as_deref(),
                    org_id: a.org_id.as_deref(),
                })
                .collect(),
        }
    }
}

/// Output a list of runtime environments
pub fn output_runtime_environments(rtes: &[RuntimeEnvironment], format: &OutputFormat) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(NOTHING);
            table.set_header(vec!["ID", "NAME", "SHARED", "AGENTS", "UPDATED"]);

            for rte in rtes {
                table.add_row(vec![
                    rte.id.clone(),
                    rte.name().to_string(),
                    rte.is_shared().to_string(),
                    rte.agents.len().to_string(),
                    or_dash(rte.update_time.as_deref()),
                ]);
            }

            println!("{table}");
        }
        OutputFormat::Json => {
            let serializable: Vec<SerializableRuntimeEnvironment> = rtes
                .iter()
                .map(SerializableRuntimeEnvironment::from)
                .collect();
            print_json(&serializable);
        }
    }
}

/// Output one runtime environment with its agents
pub fn output_runtime_environment(rte: &RuntimeEnvironment, format: &OutputFormat) {
    match format {
        OutputFormat::Table => {
            let table = detail_table(&[
                ("ID", rte.id.clone()),
                ("Name", rte.name().to_string()),
                ("Description", or_dash(rte.description.as_deref())),
                ("Shared", rte.is_shared().to_string()),
                ("Federated ID", or_dash(rte.federated_id.as_deref())),
                ("Created by", or_dash(rte.created_by.as_deref())),
                ("Created", or_dash(rte.create_time.as_deref())),
                ("Updated by", or_dash(rte.updated_by.as_deref())),
                ("Updated", or_dash(rte.update_time.as_deref())),
            ]);
            println!("{table}");

            if !rte.agents.is_empty() {
                println!();
                let mut table = Table::new();
                table.load_preset(NOTHING);
                table.set_header(vec!["AGENT ID", "NAME"]);
                for agent in &rte.agents {
                    table.add_row(vec![agent.id.clone(), or_dash(agent.name.as_deref())]);
                }
                println!("{table}");
            }
        }
        OutputFormat::Json => print_json(&SerializableRuntimeEnvironment::from(rte)),
    }
}
