//! Workspace variable data models

use serde::{Deserialize, Serialize};

use crate::hcp::models::{related_id, RelationshipData};
use crate::hcp::traits::TfeResource;

/// Variable category
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VariableCategory {
    #[default]
    Terraform,
    Env,
}

impl VariableCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableCategory::Terraform => "terraform",
            VariableCategory::Env => "env",
        }
    }
}

/// Variable data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Variable {
    pub id: String,
    pub attributes: VariableAttributes,
    pub relationships: Option<VariableRelationships>,
}

/// Variable relationships from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct VariableRelationships {
    pub configurable: Option<RelationshipData>,
}

/// Variable attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct VariableAttributes {
    pub key: String,

    /// Absent (null) for sensitive variables
    pub value: Option<String>,

    pub description: Option<String>,

    #[serde(default)]
    pub category: VariableCategory,

    #[serde(default)]
    pub hcl: bool,

    #[serde(default)]
    pub sensitive: bool,
}

impl TfeResource for Variable {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.key
    }
}

impl Variable {
    /// Value for display; sensitive values are never returned by the API
    pub fn display_value(&self) -> &str {
        if self.attributes.sensitive {
            "<sensitive>"
        } else {
            self.attributes.value.as_deref().unwrap_or("")
        }
    }

    /// Workspace the variable belongs to
    pub fn workspace_id(&self) -> Option<&str> {
        related_id(
            self.relationships
                .as_ref()
                .and_then(|r| r.configurable.as_ref()),
        )
    }
}

/// A variable to create; key and value are sent as given
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewVariable {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: VariableCategory,
    pub hcl: bool,
    pub sensitive: bool,
}

/// Fields to change on an existing variable; unset fields are left alone
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hcl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitive: Option<bool>,
}
