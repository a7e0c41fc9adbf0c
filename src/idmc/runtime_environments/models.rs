//! Runtime environment data models

use serde::{Deserialize, Serialize};

const OBJECT_TYPE: &str = "runtimeEnvironment";

/// Runtime environment (Secure Agent group) as returned by the v2 API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeEnvironment {
    pub id: String,
    #[serde(default)]
    pub org_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub updated_by: Option<String>,
    #[serde(default)]
    pub agents: Vec<RuntimeEnvironmentAgent>,
    #[serde(default)]
    pub is_shared: Option<bool>,
    #[serde(default)]
    pub federated_id: Option<String>,
}

impl RuntimeEnvironment {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn is_shared(&self) -> bool {
        self.is_shared.unwrap_or(false)
    }
}

/// Secure Agent assigned to a runtime environment
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeEnvironmentAgent {
    pub id: String,
    #[serde(default)]
    pub org_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of create and update requests
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeEnvironmentRequest<'a> {
    #[serde(rename = "@type")]
    pub object_type: &'static str,
    pub name: &'a str,
    pub is_shared: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<AgentReference<'a>>>,
}

impl<'a> RuntimeEnvironmentRequest<'a> {
    pub fn create(name: &'a str, is_shared: bool) -> Self {
        Self {
            object_type: OBJECT_TYPE,
            name,
            is_shared,
            agents: None,
        }
    }

    pub fn update(name: &'a str, is_shared: bool, agents: &'a [RuntimeEnvironmentAgent]) -> Self {
        Self {
            object_type: OBJECT_TYPE,
            name,
            is_shared,
            agents: Some(
                agents
                    .iter()
                    .map(|a| AgentReference {
                        id: &a.id,
                        org_id: a.org_id.as_deref(),
                    })
                    .collect(),
            ),
        }
    }
}

/// Agent entry in an update request
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AgentReference<'a> {
    pub id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<&'a str>,
}
