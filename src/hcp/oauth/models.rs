//! OAuth client and token data models

use serde::{Deserialize, Serialize};

use crate::hcp::models::{related_id, RelationshipData, RelationshipId};
use crate::hcp::traits::TfeResource;

/// OAuth Client data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct OAuthClient {
    pub id: String,
    pub attributes: OAuthClientAttributes,
    pub relationships: Option<OAuthClientRelationships>,
}

/// OAuth Client attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct OAuthClientAttributes {
    #[serde(rename = "created-at")]
    pub created_at: Option<String>,
    #[serde(rename = "service-provider")]
    pub service_provider: Option<String>,
    #[serde(rename = "service-provider-display-name")]
    pub service_provider_display_name: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "http-url")]
    pub http_url: Option<String>,
    #[serde(rename = "api-url")]
    pub api_url: Option<String>,
    #[serde(rename = "callback-url")]
    pub callback_url: Option<String>,
}

/// OAuth Client relationships from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct OAuthClientRelationships {
    pub organization: Option<RelationshipData>,
    #[serde(rename = "oauth-tokens")]
    pub oauth_tokens: Option<OAuthTokensRelationship>,
}

/// OAuth Tokens relationship (contains array of tokens)
#[derive(Deserialize, Debug, Clone)]
pub struct OAuthTokensRelationship {
    pub data: Option<Vec<RelationshipId>>,
}

impl TfeResource for OAuthClient {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        self.attributes
            .name
            .as_deref()
            .or(self.attributes.service_provider_display_name.as_deref())
            .unwrap_or(&self.id)
    }
}

impl OAuthClient {
    /// Get service provider (github, gitlab_hosted, etc.)
    pub fn service_provider(&self) -> &str {
        self.attributes
            .service_provider
            .as_deref()
            .unwrap_or("unknown")
    }

    /// Get HTTP URL of the VCS provider
    pub fn http_url(&self) -> &str {
        self.attributes.http_url.as_deref().unwrap_or("")
    }

    pub fn created_at(&self) -> &str {
        self.attributes.created_at.as_deref().unwrap_or("")
    }

    /// Get OAuth token IDs
    pub fn oauth_token_ids(&self) -> Vec<&str> {
        self.relationships
            .as_ref()
            .and_then(|r| r.oauth_tokens.as_ref())
            .and_then(|ot| ot.data.as_ref())
            .map(|tokens| tokens.iter().map(|t| t.id.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Writable OAuth client attributes; unset fields are not sent
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct OAuthClientSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_token_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
}

/// OAuth Token data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct OAuthToken {
    pub id: String,
    pub attributes: Option<OAuthTokenAttributes>,
    pub relationships: Option<OAuthTokenRelationships>,
}

/// OAuth Token attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct OAuthTokenAttributes {
    #[serde(rename = "created-at")]
    pub created_at: Option<String>,
    #[serde(rename = "service-provider-user")]
    pub service_provider_user: Option<String>,
    #[serde(rename = "has-ssh-key")]
    pub has_ssh_key: Option<bool>,
}

/// OAuth Token relationships from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct OAuthTokenRelationships {
    #[serde(rename = "oauth-client")]
    pub oauth_client: Option<RelationshipData>,
}

impl TfeResource for OAuthToken {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.id
    }
}

impl OAuthToken {
    /// Get service provider user
    pub fn service_provider_user(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.service_provider_user.as_deref())
            .unwrap_or("")
    }

    pub fn created_at(&self) -> &str {
        self.attributes
            .as_ref()
            .and_then(|a| a.created_at.as_deref())
            .unwrap_or("")
    }

    pub fn has_ssh_key(&self) -> bool {
        self.attributes
            .as_ref()
            .and_then(|a| a.has_ssh_key)
            .unwrap_or(false)
    }

    pub fn oauth_client_id(&self) -> Option<&str> {
        related_id(
            self.relationships
                .as_ref()
                .and_then(|r| r.oauth_client.as_ref()),
        )
    }
}
