//! OAuth client and token command arguments

use clap::{Args, Subcommand};

use crate::hcp::OAuthClientSettings;

/// OAuth subcommands
#[derive(Subcommand, Debug)]
pub enum OAuthAction {
    /// Manage OAuth clients (VCS connections)
    #[command(visible_alias = "clients", visible_alias = "oc")]
    Client {
        #[command(subcommand)]
        action: OAuthClientAction,
    },

    /// Manage OAuth tokens of a client
    #[command(visible_alias = "tokens", visible_alias = "ot")]
    Token {
        #[command(subcommand)]
        action: OAuthTokenAction,
    },
}

/// OAuth client subcommands
#[derive(Subcommand, Debug)]
pub enum OAuthClientAction {
    /// List OAuth clients of the organization
    #[command(visible_alias = "ls")]
    List,

    /// Show one OAuth client
    Get {
        /// Client name or ID (oc-xxx)
        client: String,
    },

    /// Create an OAuth client
    Create {
        /// VCS provider (github, github_enterprise, gitlab_hosted, bitbucket_hosted, ado_services, ...)
        #[arg(long)]
        service_provider: String,

        #[command(flatten)]
        fields: OAuthClientFields,
    },

    /// Update an OAuth client
    Update {
        /// Client name or ID (oc-xxx)
        client: String,

        #[command(flatten)]
        fields: OAuthClientFields,
    },

    /// Delete OAuth clients
    #[command(visible_alias = "rm")]
    Delete {
        /// Client names or IDs
        #[arg(required = true)]
        clients: Vec<String>,
    },
}

/// Writable OAuth client fields
#[derive(Args, Debug, Default)]
pub struct OAuthClientFields {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// VCS provider web URL
    #[arg(long)]
    pub http_url: Option<String>,

    /// VCS provider API URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Personal access token or OAuth application token
    #[arg(long)]
    pub oauth_token_string: Option<String>,

    /// Private SSH key for cloning submodules
    #[arg(long)]
    pub private_key: Option<String>,
}

impl OAuthClientFields {
    pub fn to_settings(&self) -> OAuthClientSettings {
        OAuthClientSettings {
            name: self.name.clone(),
            http_url: self.http_url.clone(),
            api_url: self.api_url.clone(),
            oauth_token_string: self.oauth_token_string.clone(),
            private_key: self.private_key.clone(),
        }
    }
}

/// OAuth token subcommands
#[derive(Subcommand, Debug)]
pub enum OAuthTokenAction {
    /// List tokens of an OAuth client
    #[command(visible_alias = "ls")]
    List {
        /// Client name or ID (oc-xxx)
        #[arg(long)]
        client: String,
    },

    /// Show one OAuth token
    Get {
        /// Token ID (ot-xxx)
        token_id: String,
    },

    /// Set the SSH key of an OAuth token
    Update {
        /// Token ID (ot-xxx)
        token_id: String,

        /// Private SSH key
        #[arg(long)]
        ssh_key: String,
    },

    /// Delete OAuth tokens
    #[command(visible_alias = "rm")]
    Delete {
        /// Token IDs (ot-xxx)
        #[arg(required = true)]
        token_ids: Vec<String>,
    },
}
