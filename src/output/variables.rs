//! Variable output rows

use serde::Serialize;

use super::{cell, yes_no, Tabular};
use crate::hcp::Variable;

/// Flattened variable data for output
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct VariableRow {
    pub id: String,
    pub key: String,
    pub value: String,
    pub category: String,
    pub hcl: bool,
    pub sensitive: bool,
    pub description: String,
}

impl From<&Variable> for VariableRow {
    fn from(var: &Variable) -> Self {
        Self {
            id: var.id.clone(),
            key: var.attributes.key.clone(),
            value: var.display_value().to_string(),
            category: var.attributes.category.as_str().to_string(),
            hcl: var.attributes.hcl,
            sensitive: var.attributes.sensitive,
            description: cell(var.attributes.description.as_deref()),
        }
    }
}

impl Tabular for VariableRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Key", "Value", "Category", "HCL", "Sensitive", "Description"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.key.clone(),
            self.value.clone(),
            self.category.clone(),
            yes_no(self.hcl),
            yes_no(self.sensitive),
            self.description.clone(),
        ]
    }
}
