//! Registry module output rows

use serde::Serialize;

use super::{cell, Tabular};
use crate::hcp::{ModuleSummary, RegistryModule, TfeResource};

/// Flattened module data for output
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ModuleRow {
    pub id: String,
    pub name: String,
    pub provider: String,
    pub namespace: String,
    pub version: String,
    pub status: String,
    pub source: String,
}

impl From<&RegistryModule> for ModuleRow {
    fn from(module: &RegistryModule) -> Self {
        Self {
            id: module.id.clone(),
            name: module.name().to_string(),
            provider: module.provider().to_string(),
            namespace: cell(module.attributes.namespace.as_deref()),
            version: cell(module.latest_version()),
            status: cell(module.attributes.status.as_deref()),
            source: module.source().to_string(),
        }
    }
}

impl From<&ModuleSummary> for ModuleRow {
    fn from(module: &ModuleSummary) -> Self {
        Self {
            id: module.id.clone(),
            name: module.name.clone(),
            provider: module.provider.clone(),
            namespace: module.namespace.clone(),
            version: module.version.clone(),
            status: String::new(),
            source: cell(module.source.as_deref()),
        }
    }
}

impl Tabular for ModuleRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Provider", "Namespace", "Version", "Status", "Source"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.provider.clone(),
            self.namespace.clone(),
            self.version.clone(),
            self.status.clone(),
            self.source.clone(),
        ]
    }
}
