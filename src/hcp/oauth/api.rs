//! OAuth client and token API operations

use log::debug;
use reqwest::Method;
use serde_json::json;

use crate::config::api;
use crate::error::Result;
use crate::hcp::models::document;
use crate::hcp::pagination::PageScheme;
use crate::hcp::resolver::{parse_target, ResourceRef, Target};
use crate::hcp::traits::{ApiListResponse, TfeResource};
use crate::hcp::TfeClient;

use super::models::{OAuthClient, OAuthClientSettings, OAuthToken};

fn org_clients_path(org: &str) -> String {
    format!(
        "/{}/{}/{}",
        api::ORGANIZATIONS,
        urlencoding::encode(org),
        api::OAUTH_CLIENTS
    )
}

impl TfeClient {
    /// List OAuth clients of the session organization
    pub async fn list_oauth_clients(&self) -> Result<Vec<OAuthClient>> {
        self.session().require_credentials()?;
        let org = self.org()?;
        let url = self.api_url(&org_clients_path(org))?;
        let context = format!("OAuth clients for organization '{}'", org);
        Ok(self
            .list_all::<OAuthClient, ApiListResponse<OAuthClient>>(url, PageScheme::Number, context)
            .await)
    }

    /// Get a single OAuth client by ID
    pub async fn get_oauth_client_by_id(&self, client_id: &str) -> Result<Option<OAuthClient>> {
        let url = self.api_url(&format!("/{}/{}", api::OAUTH_CLIENTS, client_id))?;
        self.fetch_resource(&url, &format!("OAuth client '{}'", client_id))
            .await
    }

    /// Find an OAuth client by name; stops paging at the first match
    pub async fn find_oauth_client(&self, name: &str) -> Result<Option<OAuthClient>> {
        let org = self.org()?;
        let url = self.api_url(&org_clients_path(org))?;
        self.find_first::<OAuthClient, ApiListResponse<OAuthClient>, _>(
            url,
            PageScheme::Number,
            |oc| oc.matches(name),
        )
        .await
    }

    /// Get an OAuth client by `oc-` id or by name
    pub async fn get_oauth_client(&self, target: &str) -> Result<Option<OAuthClient>> {
        self.session().require_credentials()?;
        match parse_target(target, "oc-") {
            Target::Id(id) => self.get_oauth_client_by_id(&id).await,
            Target::Name(name) => self.find_oauth_client(&name).await,
        }
    }

    /// Create an OAuth client (VCS connection) in the session organization
    pub async fn create_oauth_client(
        &self,
        service_provider: &str,
        settings: &OAuthClientSettings,
    ) -> Result<OAuthClient> {
        self.session().require_credentials()?;
        let org = self.org()?;
        self.confirm(&format!(
            "Create {} OAuth client in '{}'",
            service_provider, org
        ))?;

        let mut attributes = serde_json::to_value(settings)?;
        attributes["service-provider"] = json!(service_provider);
        let body = document("oauth-clients", attributes, None);
        let url = self.api_url(&org_clients_path(org))?;

        debug!("Creating {} OAuth client in '{}'", service_provider, org);
        self.write_resource(Method::POST, &url, &body, "OAuth client")
            .await
    }

    /// Update an OAuth client given by name or id
    pub async fn update_oauth_client(
        &self,
        client: &str,
        settings: &OAuthClientSettings,
    ) -> Result<OAuthClient> {
        let id = self.require_id(&ResourceRef::oauth_client(client)).await?;
        self.confirm(&format!("Update OAuth client '{}'", client))?;

        let body = document("oauth-clients", serde_json::to_value(settings)?, None);
        let url = self.api_url(&format!("/{}/{}", api::OAUTH_CLIENTS, id))?;
        self.write_resource(Method::PATCH, &url, &body, &format!("OAuth client '{}'", client))
            .await
    }

    /// Delete an OAuth client given by name or id
    pub async fn delete_oauth_client(&self, client: &str) -> Result<()> {
        let id = self.require_id(&ResourceRef::oauth_client(client)).await?;
        self.confirm(&format!("Delete OAuth client '{}'", client))?;

        let url = self.api_url(&format!("/{}/{}", api::OAUTH_CLIENTS, id))?;
        debug!("Deleting OAuth client {}", id);
        self.send_action(Method::DELETE, &url, None).await
    }

    /// List tokens of an OAuth client given by name or id
    pub async fn list_oauth_tokens(&self, client: &str) -> Result<Vec<OAuthToken>> {
        let client_id = self.require_id(&ResourceRef::oauth_client(client)).await?;
        let url = self.api_url(&format!(
            "/{}/{}/{}",
            api::OAUTH_CLIENTS,
            client_id,
            api::OAUTH_TOKENS
        ))?;
        let context = format!("OAuth tokens of client '{}'", client);
        Ok(self
            .list_all::<OAuthToken, ApiListResponse<OAuthToken>>(url, PageScheme::Number, context)
            .await)
    }

    /// Get an OAuth token by ID
    pub async fn get_oauth_token(&self, token_id: &str) -> Result<Option<OAuthToken>> {
        self.session().require_credentials()?;
        let url = self.api_url(&format!("/{}/{}", api::OAUTH_TOKENS, token_id))?;
        self.fetch_resource(&url, &format!("OAuth token '{}'", token_id))
            .await
    }

    /// Set the private SSH key of an OAuth token
    pub async fn update_oauth_token(&self, token_id: &str, ssh_key: &str) -> Result<OAuthToken> {
        self.session().require_credentials()?;
        self.confirm(&format!("Update SSH key of OAuth token '{}'", token_id))?;

        let mut body = document("oauth-tokens", json!({ "ssh-key": ssh_key }), None);
        body["data"]["id"] = json!(token_id);
        let url = self.api_url(&format!("/{}/{}", api::OAUTH_TOKENS, token_id))?;
        self.write_resource(
            Method::PATCH,
            &url,
            &body,
            &format!("OAuth token '{}'", token_id),
        )
        .await
    }

    /// Delete an OAuth token by ID
    pub async fn delete_oauth_token(&self, token_id: &str) -> Result<()> {
        self.session().require_credentials()?;
        self.confirm(&format!("Delete OAuth token '{}'", token_id))?;

        let url = self.api_url(&format!("/{}/{}", api::OAUTH_TOKENS, token_id))?;
        debug!("Deleting OAuth token {}", token_id);
        self.send_action(Method::DELETE, &url, None).await
    }
}
