//! Workspace output rows

use serde::Serialize;

use super::{cell, yes_no, Tabular};
use crate::hcp::{TfeResource, Workspace};

/// Flattened workspace data for output
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WorkspaceRow {
    pub id: String,
    pub name: String,
    pub project_id: String,
    pub resources: u32,
    pub execution_mode: String,
    pub auto_apply: bool,
    pub locked: bool,
    pub locked_by: String,
    pub terraform_version: String,
    pub updated_at: String,
}

impl From<&Workspace> for WorkspaceRow {
    fn from(workspace: &Workspace) -> Self {
        Self {
            id: workspace.id.clone(),
            name: workspace.name().to_string(),
            project_id: cell(workspace.project_id()),
            resources: workspace.resource_count(),
            execution_mode: workspace.execution_mode().to_string(),
            auto_apply: workspace.attributes.auto_apply.unwrap_or(false),
            locked: workspace.is_locked(),
            locked_by: cell(workspace.locked_by()),
            terraform_version: workspace.terraform_version().to_string(),
            updated_at: workspace.updated_at().to_string(),
        }
    }
}

impl Tabular for WorkspaceRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Name",
            "Project ID",
            "Resources",
            "Execution Mode",
            "Auto Apply",
            "Locked",
            "Locked By",
            "TF Version",
            "Updated At",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.project_id.clone(),
            self.resources.to_string(),
            self.execution_mode.clone(),
            yes_no(self.auto_apply),
            yes_no(self.locked),
            self.locked_by.clone(),
            self.terraform_version.clone(),
            self.updated_at.clone(),
        ]
    }
}
