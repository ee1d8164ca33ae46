//! Workspace data models

use serde::{Deserialize, Serialize};

use crate::hcp::models::{related_id, RelationshipData};
use crate::hcp::traits::TfeResource;

/// Workspace as returned by `/workspaces` endpoints
#[derive(Deserialize, Debug, Clone)]
pub struct Workspace {
    pub id: String,
    pub attributes: WorkspaceAttributes,
    pub relationships: Option<WorkspaceRelationships>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct WorkspaceAttributes {
    pub name: String,
    pub description: Option<String>,
    pub execution_mode: Option<String>,
    pub auto_apply: Option<bool>,
    pub resource_count: Option<u32>,
    pub locked: Option<bool>,
    pub terraform_version: Option<String>,
    pub working_directory: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct WorkspaceRelationships {
    pub project: Option<RelationshipData>,
    pub locked_by: Option<RelationshipData>,
}

impl TfeResource for Workspace {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.attributes.name
    }
}

impl Workspace {
    pub fn resource_count(&self) -> u32 {
        self.attributes.resource_count.unwrap_or_default()
    }

    /// `remote`, `local` or `agent`; older servers omit it
    pub fn execution_mode(&self) -> &str {
        self.attributes.execution_mode.as_deref().unwrap_or("unknown")
    }

    pub fn is_locked(&self) -> bool {
        self.attributes.locked == Some(true)
    }

    pub fn terraform_version(&self) -> &str {
        self.attributes.terraform_version.as_deref().unwrap_or("unknown")
    }

    pub fn updated_at(&self) -> &str {
        self.attributes.updated_at.as_deref().unwrap_or_default()
    }

    pub fn project_id(&self) -> Option<&str> {
        related_id(self.relationships.as_ref().and_then(|r| r.project.as_ref()))
    }

    /// Id of the user, run or team holding the lock
    pub fn locked_by(&self) -> Option<&str> {
        related_id(self.relationships.as_ref().and_then(|r| r.locked_by.as_ref()))
    }
}

/// Writable workspace settings; unset fields are left out of the request
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct WorkspaceSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_apply: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terraform_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
}

/// Lock-family action on a workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockAction {
    /// Lock, with an optional reason shown to other users
    Lock { reason: Option<String> },
    /// Unlock a lock held by the caller
    Unlock,
    /// Unlock a lock held by someone else
    ForceUnlock,
}

impl LockAction {
    /// Action path segment under `/workspaces/:id/actions/`
    pub fn endpoint(&self) -> &'static str {
        match self {
            LockAction::Lock { .. } => "lock",
            LockAction::Unlock => "unlock",
            LockAction::ForceUnlock => "force-unlock",
        }
    }

    /// Verb for confirmations and messages
    pub fn verb(&self) -> &'static str {
        match self {
            LockAction::Lock { .. } => "Lock",
            LockAction::Unlock => "Unlock",
            LockAction::ForceUnlock => "Force-unlock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_deserialization() {
        let ws: Workspace = serde_json::from_value(serde_json::json!({
            "id": "ws-abc123",
            "type": "workspaces",
            "attributes": {
                "name": "prod",
                "execution-mode": "remote",
                "auto-apply": true,
                "resource-count": 50,
                "locked": true,
                "terraform-version": "1.6.0",
                "updated-at": "2026-01-02T03:04:05Z"
            },
            "relationships": {
                "project": {"data": {"id": "prj-1", "type": "projects"}},
                "locked-by": {"data": {"id": "user-9", "type": "users"}}
            }
        }))
        .unwrap();

        assert_eq!(ws.name(), "prod");
        assert!(ws.matches("ws-abc123"));
        assert_eq!(ws.resource_count(), 50);
        assert_eq!(ws.execution_mode(), "remote");
        assert!(ws.is_locked());
        assert_eq!(ws.locked_by(), Some("user-9"));
        assert_eq!(ws.project_id(), Some("prj-1"));
        assert_eq!(ws.updated_at(), "2026-01-02T03:04:05Z");
    }

    #[test]
    fn test_workspace_defaults() {
        let ws: Workspace = serde_json::from_value(serde_json::json!({
            "id": "ws-123",
            "attributes": {"name": "test"}
        }))
        .unwrap();
        assert_eq!(ws.resource_count(), 0);
        assert_eq!(ws.execution_mode(), "unknown");
        assert_eq!(ws.terraform_version(), "unknown");
        assert!(!ws.is_locked());
        assert_eq!(ws.locked_by(), None);
        assert_eq!(ws.project_id(), None);
    }

    #[test]
    fn test_settings_serialize_only_set_fields() {
        let settings = WorkspaceSettings {
            execution_mode: Some("local".to_string()),
            auto_apply: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            serde_json::json!({"execution-mode": "local", "auto-apply": true})
        );
    }

    #[test]
    fn test_lock_action_endpoints() {
        assert_eq!(LockAction::Lock { reason: None }.endpoint(), "lock");
        assert_eq!(LockAction::Unlock.endpoint(), "unlock");
        assert_eq!(LockAction::ForceUnlock.endpoint(), "force-unlock");
    }
}
