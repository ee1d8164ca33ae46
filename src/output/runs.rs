//! Run output rows

use serde::Serialize;

use super::{cell, yes_no, Tabular};
use crate::hcp::Run;

/// Flattened run data for output
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RunRow {
    pub id: String,
    pub workspace_id: String,
    pub status: String,
    pub source: String,
    pub message: String,
    pub has_changes: bool,
    pub is_destroy: bool,
    pub plan_only: bool,
    pub created_at: String,
}

impl From<&Run> for RunRow {
    fn from(run: &Run) -> Self {
        Self {
            id: run.id.clone(),
            workspace_id: cell(run.workspace_id()),
            status: run.status().to_string(),
            source: cell(run.attributes.source.as_deref()),
            message: run.message().to_string(),
            has_changes: run.attributes.has_changes.unwrap_or(false),
            is_destroy: run.attributes.is_destroy.unwrap_or(false),
            plan_only: run.attributes.plan_only.unwrap_or(false),
            created_at: run.created_at().to_string(),
        }
    }
}

impl Tabular for RunRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Run ID",
            "Workspace ID",
            "Status",
            "Source",
            "Message",
            "Changes",
            "Destroy",
            "Plan Only",
            "Created At",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.workspace_id.clone(),
            self.status.clone(),
            self.source.clone(),
            self.message.clone(),
            yes_no(self.has_changes),
            yes_no(self.is_destroy),
            yes_no(self.plan_only),
            self.created_at.clone(),
        ]
    }
}
