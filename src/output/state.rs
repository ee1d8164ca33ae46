//! State version output rows

use serde::Serialize;

use super::{cell, Tabular};
use crate::hcp::StateVersion;

/// Flattened state version data for output
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StateVersionRow {
    pub id: String,
    pub serial: u64,
    pub status: String,
    pub terraform_version: String,
    pub run_id: String,
    pub created_at: String,
}

impl From<&StateVersion> for StateVersionRow {
    fn from(sv: &StateVersion) -> Self {
        Self {
            id: sv.id.clone(),
            serial: sv.serial(),
            status: cell(sv.attributes.status.as_deref()),
            terraform_version: cell(sv.attributes.terraform_version.as_deref()),
            run_id: cell(sv.run_id()),
            created_at: cell(sv.attributes.created_at.as_deref()),
        }
    }
}

impl Tabular for StateVersionRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Serial", "Status", "TF Version", "Run ID", "Created At"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.serial.to_string(),
            self.status.clone(),
            self.terraform_version.clone(),
            self.run_id.clone(),
            self.created_at.clone(),
        ]
    }
}
