//! Name-to-id resolution for id-scoped operations
//!
//! Every mutation on a named resource resolves the name first, fresh on
//! every call. An unresolved name never reaches the mutating request.

use log::{debug, warn};

use crate::error::{Result, TfeError};
use crate::hcp::TfeClient;

/// A resource addressed by the names a user knows it by
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRef {
    /// Workspace in the session organization (name or `ws-` id)
    Workspace { name: String },
    /// Variable of a workspace, by key (or `var-` id)
    Variable { workspace_id: String, key: String },
    /// Private registry module in the session organization
    Module { name: String, provider: String },
    /// OAuth client by name (or `oc-` id)
    OAuthClient { name: String },
    /// Most recent run of a workspace
    LatestRun { workspace_id: String },
}

/// Either a server-assigned id or a name to resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Id(String),
    Name(String),
}

/// Treat `input` as an id when it carries the resource's id prefix
pub fn parse_target(input: &str, id_prefix: &str) -> Target {
    if input.starts_with(id_prefix) {
        Target::Id(input.to_string())
    } else {
        Target::Name(input.to_string())
    }
}

impl ResourceRef {
    pub fn workspace(name: &str) -> Self {
        ResourceRef::Workspace {
            name: name.to_string(),
        }
    }

    pub fn variable(workspace_id: &str, key: &str) -> Self {
        ResourceRef::Variable {
            workspace_id: workspace_id.to_string(),
            key: key.to_string(),
        }
    }

    pub fn module(name: &str, provider: &str) -> Self {
        ResourceRef::Module {
            name: name.to_string(),
            provider: provider.to_string(),
        }
    }

    pub fn oauth_client(name: &str) -> Self {
        ResourceRef::OAuthClient {
            name: name.to_string(),
        }
    }

    pub fn latest_run(workspace_id: &str) -> Self {
        ResourceRef::LatestRun {
            workspace_id: workspace_id.to_string(),
        }
    }

    /// Resource kind for messages
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceRef::Workspace { .. } => "workspace",
            ResourceRef::Variable { .. } => "variable",
            ResourceRef::Module { .. } => "module",
            ResourceRef::OAuthClient { .. } => "OAuth client",
            ResourceRef::LatestRun { .. } => "latest run",
        }
    }

    /// Human-readable name for messages
    pub fn label(&self) -> String {
        match self {
            ResourceRef::Workspace { name } | ResourceRef::OAuthClient { name } => name.clone(),
            ResourceRef::Variable { workspace_id, key } => format!("{}/{}", workspace_id, key),
            ResourceRef::Module { name, provider } => format!("{}/{}", name, provider),
            ResourceRef::LatestRun { workspace_id } => workspace_id.clone(),
        }
    }

    /// The id itself when the reference already carries one
    fn direct_id(&self) -> Option<&str> {
        let (input, prefix) = match self {
            ResourceRef::Workspace { name } => (name, "ws-"),
            ResourceRef::Variable { key, .. } => (key, "var-"),
            ResourceRef::OAuthClient { name } => (name, "oc-"),
            ResourceRef::Module { .. } | ResourceRef::LatestRun { .. } => return None,
        };
        match parse_target(input, prefix) {
            Target::Id(_) => Some(input.as_str()),
            Target::Name(_) => None,
        }
    }
}

impl TfeClient {
    /// Resolve a reference to its id.
    ///
    /// Returns `None` when nothing matches (including 404). Fails with a
    /// configuration error before any request when credentials are missing.
    pub async fn resolve_id(&self, target: &ResourceRef) -> Result<Option<String>> {
        self.session().require_credentials()?;

        if let Some(id) = target.direct_id() {
            debug!("{} '{}' is already an id", target.kind(), id);
            return Ok(Some(id.to_string()));
        }

        debug!("Resolving {} '{}'", target.kind(), target.label());
        let id = match target {
            ResourceRef::Workspace { name } => {
                self.get_workspace_by_name(name).await?.map(|ws| ws.id)
            }
            ResourceRef::Variable { workspace_id, key } => {
                self.find_variable(workspace_id, key).await?.map(|var| var.id)
            }
            ResourceRef::Module { name, provider } => {
                self.get_registry_module(name, provider).await?.map(|m| m.id)
            }
            ResourceRef::OAuthClient { name } => {
                self.find_oauth_client(name).await?.map(|oc| oc.id)
            }
            ResourceRef::LatestRun { workspace_id } => {
                self.latest_run(workspace_id).await?.map(|run| run.id)
            }
        };
        Ok(id)
    }

    /// Resolve a reference or fail with a resolution error.
    ///
    /// The unresolved name is reported once, here.
    pub async fn require_id(&self, target: &ResourceRef) -> Result<String> {
        match self.resolve_id(target).await? {
            Some(id) => Ok(id),
            None => {
                warn!(
                    "{} '{}' not found; no request was sent",
                    capitalize(target.kind()),
                    target.label()
                );
                Err(TfeError::unresolved(target.kind(), &target.label()))
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("ws-abc", "ws-"), Target::Id("ws-abc".to_string()));
        assert_eq!(parse_target("prod", "ws-"), Target::Name("prod".to_string()));
    }

    #[test]
    fn test_direct_id_by_prefix() {
        assert_eq!(ResourceRef::workspace("ws-123").direct_id(), Some("ws-123"));
        assert_eq!(ResourceRef::workspace("prod").direct_id(), None);
        assert_eq!(ResourceRef::variable("ws-1", "var-9").direct_id(), Some("var-9"));
        assert_eq!(ResourceRef::oauth_client("oc-1").direct_id(), Some("oc-1"));
        assert_eq!(ResourceRef::module("vpc", "aws").direct_id(), None);
    }

    #[test]
    fn test_label_and_kind() {
        let module = ResourceRef::module("vpc", "aws");
        assert_eq!(module.kind(), "module");
        assert_eq!(module.label(), "vpc/aws");
        assert_eq!(ResourceRef::variable("ws-1", "region").label(), "ws-1/region");
    }

    #[tokio::test]
    async fn test_resolve_workspace_by_name() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/organizations/my-org/workspaces/prod"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"id": "ws-prod1", "type": "workspaces", "attributes": {"name": "prod"}}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let id = client.resolve_id(&ResourceRef::workspace("prod")).await.unwrap();
        assert_eq!(id.as_deref(), Some("ws-prod1"));
    }

    #[tokio::test]
    async fn test_resolve_id_skips_lookup_for_ids() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let id = client.resolve_id(&ResourceRef::workspace("ws-known")).await.unwrap();
        assert_eq!(id.as_deref(), Some("ws-known"));
    }

    #[tokio::test]
    async fn test_require_id_unresolved_is_resolution_error() {
        let mock_server = MockServer::start().await;
        let client = TfeClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/api/v2/organizations/my-org/workspaces/ghost"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = client.require_id(&ResourceRef::workspace("ghost")).await.unwrap_err();
        match err {
            TfeError::Resolution { kind, name } => {
                assert_eq!(kind, "workspace");
                assert_eq!(name, "ghost");
            }
            other => panic!("Expected resolution error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_without_credentials_sends_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = TfeClient::with_base_url(Session::empty(), &mock_server.uri());
        let err = client.resolve_id(&ResourceRef::workspace("prod")).await.unwrap_err();
        assert!(matches!(err, TfeError::Config(_)));
    }
}
