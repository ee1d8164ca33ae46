//! OAuth client and token output rows

use serde::Serialize;

use super::{cell, yes_no, Tabular};
use crate::hcp::{OAuthClient, OAuthToken, TfeResource};

/// Flattened OAuth client data for output
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OAuthClientRow {
    pub id: String,
    pub name: String,
    pub service_provider: String,
    pub http_url: String,
    pub api_url: String,
    pub token_ids: Vec<String>,
    pub created_at: String,
}

impl From<&OAuthClient> for OAuthClientRow {
    fn from(oc: &OAuthClient) -> Self {
        Self {
            id: oc.id.clone(),
            name: oc.name().to_string(),
            service_provider: oc.service_provider().to_string(),
            http_url: oc.http_url().to_string(),
            api_url: cell(oc.attributes.api_url.as_deref()),
            token_ids: oc
                .oauth_token_ids()
                .into_iter()
                .map(String::from)
                .collect(),
            created_at: oc.created_at().to_string(),
        }
    }
}

impl Tabular for OAuthClientRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "ID",
            "Name",
            "Provider",
            "HTTP URL",
            "API URL",
            "Tokens",
            "Created At",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.service_provider.clone(),
            self.http_url.clone(),
            self.api_url.clone(),
            self.token_ids.join(", "),
            self.created_at.clone(),
        ]
    }
}

/// Flattened OAuth token data for output
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OAuthTokenRow {
    pub id: String,
    pub oauth_client_id: String,
    pub service_provider_user: String,
    pub has_ssh_key: bool,
    pub created_at: String,
}

impl From<&OAuthToken> for OAuthTokenRow {
    fn from(token: &OAuthToken) -> Self {
        Self {
            id: token.id.clone(),
            oauth_client_id: cell(token.oauth_client_id()),
            service_provider_user: token.service_provider_user().to_string(),
            has_ssh_key: token.has_ssh_key(),
            created_at: token.created_at().to_string(),
        }
    }
}

impl Tabular for OAuthTokenRow {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Client ID", "User", "SSH Key", "Created At"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.oauth_client_id.clone(),
            self.service_provider_user.clone(),
            yes_no(self.has_ssh_key),
            self.created_at.clone(),
        ]
    }
}
