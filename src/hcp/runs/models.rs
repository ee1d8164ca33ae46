//! Run data models

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hcp::models::{related_id, RelationshipData};
use crate::hcp::traits::TfeResource;

/// Run data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct Run {
    pub id: String,
    pub attributes: RunAttributes,
    pub relationships: Option<RunRelationships>,
}

/// Run attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct RunAttributes {
    pub status: String,
    pub message: Option<String>,
    pub source: Option<String>,
    #[serde(rename = "created-at")]
    pub created_at: Option<String>,
    #[serde(rename = "has-changes")]
    pub has_changes: Option<bool>,
    #[serde(rename = "is-destroy")]
    pub is_destroy: Option<bool>,
    #[serde(rename = "plan-only")]
    pub plan_only: Option<bool>,
    #[serde(rename = "auto-apply")]
    pub auto_apply: Option<bool>,
}

/// Run relationships from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct RunRelationships {
    pub workspace: Option<RelationshipData>,
}

impl TfeResource for Run {
    fn id(&self) -> &str {
        &self.id
    }

    /// Runs have no name; the id stands in
    fn name(&self) -> &str {
        &self.id
    }
}

impl Run {
    pub fn status(&self) -> &str {
        &self.attributes.status
    }

    pub fn message(&self) -> &str {
        self.attributes.message.as_deref().unwrap_or("")
    }

    pub fn created_at(&self) -> &str {
        self.attributes.created_at.as_deref().unwrap_or("")
    }

    pub fn workspace_id(&self) -> Option<&str> {
        related_id(self.relationships.as_ref().and_then(|r| r.workspace.as_ref()))
    }
}

/// A run to queue
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct NewRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub is_destroy: bool,
    pub plan_only: bool,
    /// Unset follows the workspace's auto-apply setting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_apply: Option<bool>,
}

/// Which run an action applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunTarget {
    /// A run id (run-xxx)
    Id(String),
    /// The most recent run of a workspace (name or id)
    LatestOf(String),
}

impl fmt::Display for RunTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunTarget::Id(id) => write!(f, "{}", id),
            RunTarget::LatestOf(ws) => write!(f, "latest run of {}", ws),
        }
    }
}

/// Run action endpoints (`POST /runs/:id/actions/<endpoint>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunActionKind {
    Apply,
    Discard,
    Cancel,
    ForceCancel,
    ForceExecute,
}

impl RunActionKind {
    pub fn endpoint(&self) -> &'static str {
        match self {
            RunActionKind::Apply => "apply",
            RunActionKind::Discard => "discard",
            RunActionKind::Cancel => "cancel",
            RunActionKind::ForceCancel => "force-cancel",
            RunActionKind::ForceExecute => "force-execute",
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            RunActionKind::Apply => "Apply",
            RunActionKind::Discard => "Discard",
            RunActionKind::Cancel => "Cancel",
            RunActionKind::ForceCancel => "Force-cancel",
            RunActionKind::ForceExecute => "Force-execute",
        }
    }

    /// force-execute takes no request body
    pub fn accepts_comment(&self) -> bool {
        !matches!(self, RunActionKind::ForceExecute)
    }
}
