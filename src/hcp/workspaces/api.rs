//! Workspace API operations

use log::debug;
use reqwest::Method;
use serde_json::json;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::models::document;
use crate::hcp::pagination::PageScheme;
use crate::hcp::resolver::{parse_target, ResourceRef, Target};
use crate::hcp::traits::ApiListResponse;
use crate::hcp::TfeClient;

use super::models::{LockAction, Workspace, WorkspaceSettings};

/// Build the API path for an organization's workspaces with optional search
fn build_workspaces_path(org: &str, search: Option<&str>) -> String {
    let mut path = format!(
        "/{}/{}/{}",
        api::ORGANIZATIONS,
        urlencoding::encode(org),
        api::WORKSPACES
    );
    if let Some(s) = search {
        path.push_str(&format!("?search[name]={}", urlencoding::encode(s)));
    }
    path
}

impl TfeClient {
    /// List workspaces of the session organization
    ///
    /// `search` is the server-side fuzzy `search[name]` filter.
    pub async fn list_workspaces(&self, search: Option<&str>) -> Result<Vec<Workspace>> {
        self.session().require_credentials()?;
        let org = self.org()?;
        let url = self.api_url(&build_workspaces_path(org, search))?;
        let context = format!("workspaces for organization '{}'", org);

        Ok(self
            .list_all::<Workspace, ApiListResponse<Workspace>>(url, PageScheme::Number, context)
            .await)
    }

    /// Get a single workspace by name in the session organization
    pub async fn get_workspace_by_name(&self, name: &str) -> Result<Option<Workspace>> {
        let org = self.org()?;
        let url = self.api_url(&format!(
            "/{}/{}/{}/{}",
            api::ORGANIZATIONS,
            urlencoding::encode(org),
            api::WORKSPACES,
            urlencoding::encode(name)
        ))?;
        self.fetch_resource(&url, &format!("workspace '{}'", name))
            .await
    }

    /// Get a single workspace by ID (no org needed)
    pub async fn get_workspace_by_id(&self, workspace_id: &str) -> Result<Option<Workspace>> {
        let url = self.api_url(&format!("/{}/{}", api::WORKSPACES, workspace_id))?;
        self.fetch_resource(&url, &format!("workspace '{}'", workspace_id))
            .await
    }

    /// Get a workspace by `ws-` id or by name
    pub async fn get_workspace(&self, target: &str) -> Result<Option<Workspace>> {
        self.session().require_credentials()?;
        match parse_target(target, "ws-") {
            Target::Id(id) => self.get_workspace_by_id(&id).await,
            Target::Name(name) => self.get_workspace_by_name(&name).await,
        }
    }

    /// Create a workspace in the session organization
    pub async fn create_workspace(
        &self,
        name: &str,
        settings: &WorkspaceSettings,
    ) -> Result<Workspace> {
        self.session().require_credentials()?;
        let org = self.org()?;
        self.confirm(&format!("Create workspace '{}' in '{}'", name, org))?;

        let mut attributes = serde_json::to_value(settings)?;
        attributes["name"] = json!(name);
        let body = document("workspaces", attributes, None);
        let url = self.api_url(&build_workspaces_path(org, None))?;

        debug!("Creating workspace '{}' in '{}'", name, org);
        self.write_resource(Method::POST, &url, &body, &format!("workspace '{}'", name))
            .await
    }

    /// Update settings of a workspace given by name or id
    pub async fn update_workspace(
        &self,
        workspace: &str,
        settings: &WorkspaceSettings,
    ) -> Result<Workspace> {
        let id = self.require_id(&ResourceRef::workspace(workspace)).await?;
        self.confirm(&format!("Update workspace '{}'", workspace))?;

        let body = document("workspaces", serde_json::to_value(settings)?, None);
        let url = self.api_url(&format!("/{}/{}", api::WORKSPACES, id))?;
        self.write_resource(Method::PATCH, &url, &body, &format!("workspace '{}'", workspace))
            .await
    }

    /// Delete a workspace given by name or id
    pub async fn delete_workspace(&self, workspace: &str) -> Result<()> {
        let id = self.require_id(&ResourceRef::workspace(workspace)).await?;
        self.confirm(&format!("Delete workspace '{}'", workspace))?;

        let url = self.api_url(&format!("/{}/{}", api::WORKSPACES, id))?;
        debug!("Deleting workspace {}", id);
        self.send_action(Method::DELETE, &url, None).await
    }

    /// Lock, unlock or force-unlock a workspace given by name or id
    pub async fn set_workspace_lock(
        &self,
        workspace: &str,
        action: &LockAction,
    ) -> Result<Workspace> {
        let id = self.require_id(&ResourceRef::workspace(workspace)).await?;
        self.confirm(&format!("{} workspace '{}'", action.verb(), workspace))?;

        let url = self.api_url(&format!(
            "/{}/{}/actions/{}",
            api::WORKSPACES,
            id,
            action.endpoint()
        ))?;
        let body = match action {
            LockAction::Lock {
                reason: Some(reason),
            } => Some(json!({ "reason": reason })),
            _ => None,
        };

        debug!("{} workspace {}", action.verb(), id);
        let raw = self
            .send(Method::POST, &url, body.as_ref())
            .await?
            .ok_or_else(|| TfeError::Json(format!("Empty response locking '{}'", workspace)))?;
        Ok(serde_json::from_value(raw["data"].clone())?)
    }
}
