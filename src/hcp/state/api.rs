//! State version API operations

use log::debug;
use reqwest::Method;
use serde_json::json;
use std::path::Path;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::helpers::not_found;
use crate::hcp::models::{document, relationship};
use crate::hcp::pagination::PageScheme;
use crate::hcp::resolver::ResourceRef;
use crate::hcp::traits::ApiListResponse;
use crate::hcp::TfeClient;

use super::models::{StateUpload, StateVersion};

/// Build the filtered state version list path
fn build_state_versions_path(org: &str, workspace_name: &str) -> String {
    format!(
        "/{}?filter[workspace][name]={}&filter[organization][name]={}",
        api::STATE_VERSIONS,
        urlencoding::encode(workspace_name),
        urlencoding::encode(org)
    )
}

impl TfeClient {
    /// List state versions of a workspace, newest first.
    ///
    /// The API filters by workspace name, not id.
    pub async fn list_state_versions(&self, workspace_name: &str) -> Result<Vec<StateVersion>> {
        self.session().require_credentials()?;
        let org = self.org()?;
        let url = self.api_url(&build_state_versions_path(org, workspace_name))?;
        let context = format!("state versions of workspace '{}'", workspace_name);
        Ok(self
            .list_all::<StateVersion, ApiListResponse<StateVersion>>(url, PageScheme::Number, context)
            .await)
    }

    /// Get a state version by ID
    pub async fn get_state_version(&self, state_version_id: &str) -> Result<Option<StateVersion>> {
        self.session().require_credentials()?;
        let url = self.api_url(&format!("/{}/{}", api::STATE_VERSIONS, state_version_id))?;
        self.fetch_resource(&url, &format!("state version '{}'", state_version_id))
            .await
    }

    /// Current state version of a workspace given by name or id.
    ///
    /// `None` when the workspace has no state yet.
    pub async fn current_state_version(&self, workspace: &str) -> Result<Option<StateVersion>> {
        let workspace_id = self.require_id(&ResourceRef::workspace(workspace)).await?;
        let url = self.api_url(&format!(
            "/{}/{}/current-state-version",
            api::WORKSPACES,
            workspace_id
        ))?;
        self.fetch_resource(&url, &format!("current state of '{}'", workspace))
            .await
    }

    /// Upload a local state file as a new state version.
    ///
    /// The workspace must be locked by the caller.
    pub async fn create_state_version(
        &self,
        workspace: &str,
        state_file: &Path,
        run_id: Option<&str>,
    ) -> Result<StateVersion> {
        self.session().require_credentials()?;
        let raw = std::fs::read(state_file).map_err(|e| {
            TfeError::Config(format!(
                "Cannot read state file '{}': {}",
                state_file.display(),
                e
            ))
        })?;
        let upload = StateUpload::from_state_bytes(&raw)?;

        let workspace_id = self.require_id(&ResourceRef::workspace(workspace)).await?;
        self.confirm(&format!(
            "Upload state serial {} to workspace '{}'",
            upload.serial, workspace
        ))?;

        let relationships = run_id.map(|id| json!({ "run": relationship("runs", id) }));
        let body = document("state-versions", serde_json::to_value(&upload)?, relationships);
        let url = self.api_url(&format!(
            "/{}/{}/{}",
            api::WORKSPACES,
            workspace_id,
            api::STATE_VERSIONS
        ))?;

        debug!(
            "Uploading state version (serial: {}) for {}",
            upload.serial, workspace_id
        );
        self.write_resource(
            Method::POST,
            &url,
            &body,
            &format!("state version of '{}'", workspace),
        )
        .await
    }

    /// Download the current state of a workspace given by name or id
    pub async fn download_current_state(&self, workspace: &str) -> Result<serde_json::Value> {
        let current = self
            .current_state_version(workspace)
            .await?
            .ok_or_else(|| not_found(&format!("State of workspace '{}'", workspace)))?;
        let download_url = current.download_url().ok_or_else(|| TfeError::Api {
            status: 404,
            message: format!("State version '{}' has no download URL", current.id),
        })?;

        debug!("Downloading state from: {}", download_url);
        self.send(Method::GET, download_url, None)
            .await?
            .ok_or_else(|| TfeError::Json(format!("Empty state for '{}'", workspace)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sv_json(id: &str, serial: u64, download_url: Option<&str>) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "type": "state-versions",
            "attributes": {
                "serial": serial,
                "lineage": "lin-1",
                "hosted-state-download-url": download_url
            }
        })
    }

    async fn mount_workspace(server: &MockServer, name: &str, id: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/api/v2/organizations/my-org/workspaces/{}", name)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"id": id, "type": "workspaces", "attributes": {"name": name}}
            })))
            .mount(server)
            .await;
    }

    #[test]
    fn test_build_state_versions_path() {
        assert_eq!(
            build_state_versions_path("my-org", "prod app"),
            "/state-versions?filter[workspace][name]=prod%20app&filter[organization][name]=my-org"
        );
    }

    #[tokio::test]
    async fn test_list_state_versions_filters_by_name() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/state-versions"))
            .and(query_param("filter[workspace][name]", "prod"))
            .and(query_param("filter[organization][name]", "my-org"))
            .and(query_param("page[number]", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [sv_json("sv-2", 2, None), sv_json("sv-1", 1, None)]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let versions = client.list_state_versions("prod").await.unwrap();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0].serial(), 2);
    }

    #[tokio::test]
    async fn test_current_state_version_absent() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/workspaces/ws-empty/current-state-version"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        assert!(client
            .current_state_version("ws-empty")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_create_state_version_from_file() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        mount_workspace(&mock_server, "prod", "ws-prod").await;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"version":4,"serial":8,"lineage":"lin-1","outputs":{},"resources":[]}"#)
            .unwrap();

        Mock::given(method("POST"))
            .and(path("/api/v2/workspaces/ws-prod/state-versions"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"data": sv_json("sv-new", 8, None)})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let sv = client
            .create_state_version("prod", file.path(), Some("run-1"))
            .await
            .unwrap();
        assert_eq!(sv.id, "sv-new");

        let requests = mock_server.received_requests().await.unwrap();
        let post = requests
            .iter()
            .find(|r| r.method.as_str() == "POST")
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&post.body).unwrap();
        assert_eq!(body["data"]["type"], "state-versions");
        assert_eq!(body["data"]["attributes"]["serial"], 8);
        assert_eq!(body["data"]["attributes"]["lineage"], "lin-1");
        assert_eq!(body["data"]["relationships"]["run"]["data"]["id"], "run-1");
    }

    #[tokio::test]
    async fn test_create_from_missing_file_sends_nothing() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = client
            .create_state_version("ws-prod", Path::new("/nonexistent/terraform.tfstate"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, TfeError::Config(_)));
    }

    #[tokio::test]
    async fn test_download_current_state() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        let download_url = format!("{}/_archivist/v1/object/abc", mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/workspaces/ws-prod/current-state-version"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": sv_json("sv-5", 5, Some(&download_url))
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/_archivist/v1/object/abc"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "version": 4, "serial": 5, "lineage": "lin-1"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let state = client.download_current_state("ws-prod").await.unwrap();
        assert_eq!(state["serial"], 5);
    }
}
