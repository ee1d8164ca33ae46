//! Workspace variable API operations

use log::debug;
use reqwest::Method;
use serde_json::json;

use crate::config::api;
use crate::error::Result;
use crate::hcp::models::document;
use crate::hcp::pagination::PageScheme;
use crate::hcp::resolver::ResourceRef;
use crate::hcp::traits::ApiListResponse;
use crate::hcp::TfeClient;

use super::models::{NewVariable, Variable, VariableUpdate};

fn vars_path(workspace_id: &str) -> String {
    format!("/{}/{}/{}", api::WORKSPACES, workspace_id, api::VARS)
}

impl TfeClient {
    /// List variables of a workspace given by id
    pub async fn list_variables_by_workspace_id(&self, workspace_id: &str) -> Result<Vec<Variable>> {
        let url = self.api_url(&vars_path(workspace_id))?;
        let context = format!("variables of workspace '{}'", workspace_id);
        Ok(self
            .list_all::<Variable, ApiListResponse<Variable>>(url, PageScheme::Number, context)
            .await)
    }

    /// List variables of a workspace given by name or id
    pub async fn list_variables(&self, workspace: &str) -> Result<Vec<Variable>> {
        let workspace_id = self.require_id(&ResourceRef::workspace(workspace)).await?;
        self.list_variables_by_workspace_id(&workspace_id).await
    }

    /// Find a variable of a workspace by key; stops paging at the first match
    pub async fn find_variable(&self, workspace_id: &str, key: &str) -> Result<Option<Variable>> {
        let url = self.api_url(&vars_path(workspace_id))?;
        self.find_first::<Variable, ApiListResponse<Variable>, _>(url, PageScheme::Number, |var| {
            var.attributes.key == key
        })
        .await
    }

    /// Get a variable of a workspace by key (or `var-` id)
    pub async fn get_variable(&self, workspace: &str, key: &str) -> Result<Option<Variable>> {
        let workspace_id = self.require_id(&ResourceRef::workspace(workspace)).await?;
        if key.starts_with("var-") {
            let url = self.api_url(&vars_path(&workspace_id))?;
            self.find_first::<Variable, ApiListResponse<Variable>, _>(url, PageScheme::Number, |var| {
                var.id == key
            })
            .await
        } else {
            self.find_variable(&workspace_id, key).await
        }
    }

    /// Create a variable on a workspace given by name or id
    pub async fn create_variable(&self, workspace: &str, variable: &NewVariable) -> Result<Variable> {
        let workspace_id = self.require_id(&ResourceRef::workspace(workspace)).await?;
        self.confirm(&format!(
            "Create variable '{}' on workspace '{}'",
            variable.key, workspace
        ))?;

        let body = document("vars", serde_json::to_value(variable)?, None);
        let url = self.api_url(&vars_path(&workspace_id))?;

        debug!("Creating variable '{}' on {}", variable.key, workspace_id);
        self.write_resource(Method::POST, &url, &body, &format!("variable '{}'", variable.key))
            .await
    }

    /// Update a variable given by key (or `var-` id)
    pub async fn update_variable(
        &self,
        workspace: &str,
        key: &str,
        update: &VariableUpdate,
    ) -> Result<Variable> {
        let workspace_id = self.require_id(&ResourceRef::workspace(workspace)).await?;
        let var_id = self
            .require_id(&ResourceRef::variable(&workspace_id, key))
            .await?;
        self.confirm(&format!(
            "Update variable '{}' on workspace '{}'",
            key, workspace
        ))?;

        let mut body = document("vars", serde_json::to_value(update)?, None);
        body["data"]["id"] = json!(var_id);
        let url = self.api_url(&format!("{}/{}", vars_path(&workspace_id), var_id))?;

        self.write_resource(Method::PATCH, &url, &body, &format!("variable '{}'", key))
            .await
    }

    /// Delete a variable given by key (or `var-` id)
    pub async fn delete_variable(&self, workspace: &str, key: &str) -> Result<()> {
        let workspace_id = self.require_id(&ResourceRef::workspace(workspace)).await?;
        let var_id = self
            .require_id(&ResourceRef::variable(&workspace_id, key))
            .await?;
        self.confirm(&format!(
            "Delete variable '{}' from workspace '{}'",
            key, workspace
        ))?;

        let url = self.api_url(&format!("{}/{}", vars_path(&workspace_id), var_id))?;
        debug!("Deleting variable {} from {}", var_id, workspace_id);
        self.send_action(Method::DELETE, &url, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TfeError;
    use crate::hcp::VariableCategory;
    use crate::test_log::warnings_about;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn var_json(id: &str, key: &str, value: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "type": "vars",
            "attributes": {
                "key": key,
                "value": value,
                "category": "terraform",
                "hcl": false,
                "sensitive": false
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

    async fn mount_vars(server: &MockServer, workspace_id: &str, vars: Vec<serde_json::Value>) {
        Mock::given(method("GET"))
            .and(path(format!("/api/v2/workspaces/{}/vars", workspace_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": vars})))
            .mount(server)
            .await;
    }

    fn new_variable() -> NewVariable {
        NewVariable {
            key: "Region".to_string(),
            value: "EU-West-1".to_string(),
            description: None,
            category: VariableCategory::Terraform,
            hcl: false,
            sensitive: false,
        }
    }

    #[tokio::test]
    async fn test_list_variables() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        mount_workspace(&mock_server, "prod", "ws-prod").await;
        mount_vars(
            &mock_server,
            "ws-prod",
            vec![var_json("var-1", "a", "1"), var_json("var-2", "b", "2")],
        )
        .await;

        let vars = client.list_variables("prod").await.unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[1].attributes.key, "b");
    }

    #[tokio::test]
    async fn test_get_variable_by_key() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        mount_vars(
            &mock_server,
            "ws-prod",
            vec![var_json("var-1", "a", "1"), var_json("var-2", "b", "2")],
        )
        .await;

        let var = client.get_variable("ws-prod", "b").await.unwrap().unwrap();
        assert_eq!(var.id, "var-2");
        assert!(client.get_variable("ws-prod", "zzz").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_variable_sends_value_verbatim() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        mount_workspace(&mock_server, "prod", "ws-prod").await;

        Mock::given(method("POST"))
            .and(path("/api/v2/workspaces/ws-prod/vars"))
            .and(body_json(serde_json::json!({
                "data": {
                    "type": "vars",
                    "attributes": {
                        "key": "Region",
                        "value": "EU-West-1",
                        "category": "terraform",
                        "hcl": false,
                        "sensitive": false
                    }
                }
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"data": var_json("var-9", "Region", "EU-West-1")})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let var = client.create_variable("prod", &new_variable()).await.unwrap();
        assert_eq!(var.id, "var-9");
    }

    #[tokio::test]
    async fn test_create_variable_on_unresolved_workspace_sends_no_post() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/organizations/my-org/workspaces/ghost"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = client
            .create_variable("ghost", &new_variable())
            .await
            .unwrap_err();
        match err {
            TfeError::Resolution { kind, name } => {
                assert_eq!(kind, "workspace");
                assert_eq!(name, "ghost");
            }
            other => panic!("Expected resolution error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_variable_by_key() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        mount_vars(&mock_server, "ws-prod", vec![var_json("var-1", "region", "old")]).await;

        Mock::given(method("PATCH"))
            .and(path("/api/v2/workspaces/ws-prod/vars/var-1"))
            .and(body_json(serde_json::json!({
                "data": {"id": "var-1", "type": "vars", "attributes": {"value": "New"}}
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": var_json("var-1", "region", "New")})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let update = VariableUpdate {
            value: Some("New".to_string()),
            ..Default::default()
        };
        let var = client
            .update_variable("ws-prod", "region", &update)
            .await
            .unwrap();
        assert_eq!(var.attributes.value.as_deref(), Some("New"));
    }

    #[tokio::test]
    async fn test_delete_unknown_key_sends_no_delete() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        mount_vars(&mock_server, "ws-prod", vec![var_json("var-1", "region", "x")]).await;

        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = client.delete_variable("ws-prod", "missing").await.unwrap_err();
        assert!(matches!(err, TfeError::Resolution { .. }));
    }

    #[tokio::test]
    async fn test_delete_variable_by_id() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/api/v2/workspaces/ws-prod/vars/var-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        client.delete_variable("ws-prod", "var-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_variable_listing_is_api_error_not_unresolved() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/workspaces/ws-prod/vars"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = client.delete_variable("ws-prod", "region").await.unwrap_err();
        assert!(matches!(err, TfeError::Api { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_unresolved_workspace_is_reported_exactly_once() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        warnings_about("ghost-once");

        Mock::given(method("GET"))
            .and(path("/api/v2/organizations/my-org/workspaces/ghost-once"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = client
            .create_variable("ghost-once", &new_variable())
            .await
            .unwrap_err();

        assert_eq!(warnings_about("ghost-once"), 1);
        assert!(err.already_reported());
    }
}
