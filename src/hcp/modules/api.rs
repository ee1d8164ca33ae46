//! Private registry module API operations

use log::debug;
use reqwest::Method;
use serde_json::json;

use crate::config::api;
use crate::error::Result;
use crate::hcp::models::document;
use crate::hcp::pagination::PageScheme;
use crate::hcp::resolver::ResourceRef;
use crate::hcp::TfeClient;

use super::models::{
    ModuleListPage, ModuleSource, ModuleSummary, PublishingMode, RegistryModule, VcsRepo,
};

/// Registry name of modules owned by the organization
const PRIVATE_REGISTRY: &str = "private";

fn org_modules_path(org: &str) -> String {
    format!(
        "/{}/{}/{}",
        api::ORGANIZATIONS,
        urlencoding::encode(org),
        api::REGISTRY_MODULES
    )
}

/// v2 path of one private module (`namespace` is the organization)
fn module_path(org: &str, name: &str, provider: &str) -> String {
    format!(
        "{}/{}/{}/{}/{}",
        org_modules_path(org),
        PRIVATE_REGISTRY,
        urlencoding::encode(org),
        urlencoding::encode(name),
        urlencoding::encode(provider)
    )
}

impl TfeClient {
    /// List private modules of the session organization (latest version of each)
    pub async fn list_registry_modules(&self) -> Result<Vec<ModuleSummary>> {
        self.session().require_credentials()?;
        let org = self.org()?;
        let url = self.registry_url(&format!("/modules/{}", urlencoding::encode(org)))?;
        let context = format!("registry modules for organization '{}'", org);
        Ok(self
            .list_all::<ModuleSummary, ModuleListPage>(url, PageScheme::Offset, context)
            .await)
    }

    /// Get a private module by name and provider
    pub async fn get_registry_module(
        &self,
        name: &str,
        provider: &str,
    ) -> Result<Option<RegistryModule>> {
        self.session().require_credentials()?;
        let org = self.org()?;
        let url = self.api_url(&module_path(org, name, provider))?;
        self.fetch_resource(&url, &format!("module '{}/{}'", name, provider))
            .await
    }

    /// Publish a module from a VCS repository or as an API-driven module
    pub async fn create_registry_module(&self, source: &ModuleSource) -> Result<RegistryModule> {
        self.session().require_credentials()?;
        let org = self.org()?;

        let (url, attributes, label) = match source {
            ModuleSource::Vcs {
                identifier,
                oauth_token_id,
                branch,
            } => {
                let vcs_repo = VcsRepo {
                    identifier: Some(identifier.clone()),
                    oauth_token_id: Some(oauth_token_id.clone()),
                    display_identifier: Some(identifier.clone()),
                    branch: branch.clone(),
                    tags: None,
                };
                (
                    self.api_url(&format!("{}/vcs", org_modules_path(org)))?,
                    json!({ "vcs-repo": vcs_repo }),
                    identifier.clone(),
                )
            }
            ModuleSource::Standalone { name, provider } => (
                self.api_url(&org_modules_path(org))?,
                json!({
                    "name": name,
                    "provider": provider,
                    "registry-name": PRIVATE_REGISTRY,
                }),
                format!("{}/{}", name, provider),
            ),
        };

        self.confirm(&format!("Publish module '{}' in '{}'", label, org))?;
        let body = document("registry-modules", attributes, None);

        debug!("Creating registry module '{}' in '{}'", label, org);
        self.write_resource(Method::POST, &url, &body, &format!("module '{}'", label))
            .await
    }

    /// Switch a VCS-backed module between branch and tag publishing
    pub async fn update_registry_module(
        &self,
        name: &str,
        provider: &str,
        mode: &PublishingMode,
    ) -> Result<RegistryModule> {
        self.require_id(&ResourceRef::module(name, provider)).await?;
        let org = self.org()?;
        self.confirm(&format!("Update module '{}/{}'", name, provider))?;

        let body = document(
            "registry-modules",
            json!({ "vcs-repo": mode.to_vcs_repo() }),
            None,
        );
        let url = self.api_url(&module_path(org, name, provider))?;
        self.write_resource(
            Method::PATCH,
            &url,
            &body,
            &format!("module '{}/{}'", name, provider),
        )
        .await
    }

    /// Delete a module, or only one of its versions
    pub async fn delete_registry_module(
        &self,
        name: &str,
        provider: &str,
        version: Option<&str>,
    ) -> Result<()> {
        self.require_id(&ResourceRef::module(name, provider)).await?;
        let org = self.org()?;

        let mut path = module_path(org, name, provider);
        let action = match version {
            Some(v) => {
                path.push_str(&format!("/{}", urlencoding::encode(v)));
                format!("Delete version {} of module '{}/{}'", v, name, provider)
            }
            None => format!("Delete module '{}/{}'", name, provider),
        };
        self.confirm(&action)?;

        let url = self.api_url(&path)?;
        debug!("{}", action);
        self.send_action(Method::DELETE, &url, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TfeError;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn module_json(id: &str, name: &str, provider: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "type": "registry-modules",
            "attributes": {"name": name, "provider": provider, "namespace": "my-org"}
        })
    }

    fn summary_json(name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": format!("my-org/{}/aws/1.0.0", name),
            "namespace": "my-org",
            "name": name,
            "provider": "aws",
            "version": "1.0.0"
        })
    }

    async fn mount_module(server: &MockServer, name: &str, provider: &str) {
        Mock::given(method("GET"))
            .and(path(format!(
                "/api/v2/organizations/my-org/registry-modules/private/my-org/{}/{}",
                name, provider
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": module_json("mod-1", name, provider)
            })))
            .mount(server)
            .await;
    }

    #[test]
    fn test_module_path() {
        assert_eq!(
            module_path("my-org", "vpc", "aws"),
            "/organizations/my-org/registry-modules/private/my-org/vpc/aws"
        );
    }

    #[tokio::test]
    async fn test_list_uses_offset_paging() {
        let mock_server = MockServer::start().await;
        let mut client = TfeClient::test_client(&mock_server.uri());
        client.set_page_size(2);

        Mock::given(method("GET"))
            .and(path("/api/registry/v1/modules/my-org"))
            .and(query_param("offset", "0"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "modules": [summary_json("a"), summary_json("b")]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/registry/v1/modules/my-org"))
            .and(query_param("offset", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "modules": [summary_json("c")]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let modules = client.list_registry_modules().await.unwrap();
        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_get_module() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        mount_module(&mock_server, "vpc", "aws").await;

        let module = client.get_registry_module("vpc", "aws").await.unwrap().unwrap();
        assert_eq!(module.id, "mod-1");
    }

    #[tokio::test]
    async fn test_create_vcs_module() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/api/v2/organizations/my-org/registry-modules/vcs"))
            .and(body_json(serde_json::json!({
                "data": {
                    "type": "registry-modules",
                    "attributes": {
                        "vcs-repo": {
                            "identifier": "acme/terraform-aws-vpc",
                            "oauth-token-id": "ot-1",
                            "display-identifier": "acme/terraform-aws-vpc"
                        }
                    }
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": module_json("mod-9", "vpc", "aws")
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let source = ModuleSource::Vcs {
            identifier: "acme/terraform-aws-vpc".to_string(),
            oauth_token_id: "ot-1".to_string(),
            branch: None,
        };
        let module = client.create_registry_module(&source).await.unwrap();
        assert_eq!(module.id, "mod-9");
    }

    #[tokio::test]
    async fn test_create_standalone_module() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/api/v2/organizations/my-org/registry-modules"))
            .and(body_json(serde_json::json!({
                "data": {
                    "type": "registry-modules",
                    "attributes": {"name": "vpc", "provider": "aws", "registry-name": "private"}
                }
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "data": module_json("mod-2", "vpc", "aws")
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let source = ModuleSource::Standalone {
            name: "vpc".to_string(),
            provider: "aws".to_string(),
        };
        client.create_registry_module(&source).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_to_branch_publishing() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        mount_module(&mock_server, "vpc", "aws").await;

        Mock::given(method("PATCH"))
            .and(path("/api/v2/organizations/my-org/registry-modules/private/my-org/vpc/aws"))
            .and(body_json(serde_json::json!({
                "data": {
                    "type": "registry-modules",
                    "attributes": {"vcs-repo": {"branch": "main", "tags": false}}
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": module_json("mod-1", "vpc", "aws")
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        client
            .update_registry_module("vpc", "aws", &PublishingMode::Branch("main".to_string()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_version() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());
        mount_module(&mock_server, "vpc", "aws").await;

        Mock::given(method("DELETE"))
            .and(path(
                "/api/v2/organizations/my-org/registry-modules/private/my-org/vpc/aws/1.0.0",
            ))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        client
            .delete_registry_module("vpc", "aws", Some("1.0.0"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_unknown_module_sends_no_delete() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = client
            .delete_registry_module("ghost", "aws", None)
            .await
            .unwrap_err();
        match err {
            TfeError::Resolution { kind, name } => {
                assert_eq!(kind, "module");
                assert_eq!(name, "ghost/aws");
            }
            other => panic!("Expected resolution error, got {:?}", other),
        }
    }
}
