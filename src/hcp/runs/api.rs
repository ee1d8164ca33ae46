//! Run API operations

use log::debug;
use reqwest::Method;
use serde_json::json;

use crate::config::api;
use crate::error::Result;
use crate::hcp::models::{document, relationship};
use crate::hcp::pagination::PageScheme;
use crate::hcp::resolver::ResourceRef;
use crate::hcp::traits::ApiListResponse;
use crate::hcp::TfeClient;

use super::models::{NewRun, Run, RunActionKind, RunTarget};

fn workspace_runs_path(workspace_id: &str) -> String {
    format!("/{}/{}/{}", api::WORKSPACES, workspace_id, api::RUNS)
}

impl TfeClient {
    /// List runs of a workspace given by name or id, newest first
    pub async fn list_runs(&self, workspace: &str) -> Result<Vec<Run>> {
        let workspace_id = self.require_id(&ResourceRef::workspace(workspace)).await?;
        let url = self.api_url(&workspace_runs_path(&workspace_id))?;
        let context = format!("runs of workspace '{}'", workspace);
        Ok(self
            .list_all::<Run, ApiListResponse<Run>>(url, PageScheme::Number, context)
            .await)
    }

    /// Get a single run by ID
    pub async fn get_run(&self, run_id: &str) -> Result<Option<Run>> {
        self.session().require_credentials()?;
        let url = self.api_url(&format!("/{}/{}", api::RUNS, run_id))?;
        self.fetch_resource(&url, &format!("run '{}'", run_id)).await
    }

    /// Most recent run of a workspace given by id.
    ///
    /// Only the first page is requested.
    pub async fn latest_run(&self, workspace_id: &str) -> Result<Option<Run>> {
        self.session().require_credentials()?;
        let url = self.api_url(&workspace_runs_path(workspace_id))?;
        self.first_item::<Run, ApiListResponse<Run>>(url, PageScheme::Number)
            .await
    }

    /// Latest run of a workspace given by name or id
    pub async fn latest_run_for(&self, workspace: &str) -> Result<Option<Run>> {
        let workspace_id = self.require_id(&ResourceRef::workspace(workspace)).await?;
        self.latest_run(&workspace_id).await
    }

    /// Queue a run on a workspace given by name or id
    pub async fn create_run(&self, workspace: &str, run: &NewRun) -> Result<Run> {
        let workspace_id = self.require_id(&ResourceRef::workspace(workspace)).await?;
        self.confirm(&format!("Queue a run on workspace '{}'", workspace))?;

        let relationships = json!({ "workspace": relationship("workspaces", &workspace_id) });
        let body = document("runs", serde_json::to_value(run)?, Some(relationships));
        let url = self.api_url(&format!("/{}", api::RUNS))?;

        debug!("Creating run on {}", workspace_id);
        self.write_resource(Method::POST, &url, &body, &format!("run on '{}'", workspace))
            .await
    }

    /// Resolve a run target to a run id
    pub async fn resolve_run(&self, target: &RunTarget) -> Result<String> {
        match target {
            RunTarget::Id(id) => {
                self.session().require_credentials()?;
                Ok(id.clone())
            }
            RunTarget::LatestOf(workspace) => {
                let workspace_id = self.require_id(&ResourceRef::workspace(workspace)).await?;
                self.require_id(&ResourceRef::latest_run(&workspace_id)).await
            }
        }
    }

    /// Apply, discard, cancel, force-cancel or force-execute a run.
    ///
    /// Returns the id of the run acted on.
    pub async fn run_action(
        &self,
        target: &RunTarget,
        kind: RunActionKind,
        comment: Option<&str>,
    ) -> Result<String> {
        let run_id = self.resolve_run(target).await?;
        self.confirm(&format!("{} run {}", kind.verb(), run_id))?;

        let url = self.api_url(&format!(
            "/{}/{}/actions/{}",
            api::RUNS,
            run_id,
            kind.endpoint()
        ))?;
        let body = match comment {
            Some(c) if kind.accepts_comment() => Some(json!({ "comment": c })),
            _ => None,
        };

        debug!("{} run {}", kind.verb(), run_id);
        self.send_action(Method::POST, &url, body.as_ref()).await?;
        Ok(run_id)
    }
}
