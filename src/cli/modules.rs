//! Registry module command arguments

use clap::{Args, Subcommand};

use crate::hcp::ModuleSource;

/// Registry module subcommands
#[derive(Subcommand, Debug)]
pub enum ModuleAction {
    /// List private modules of the organization
    #[command(visible_alias = "ls")]
    List,

    /// Show one module
    Get(ModuleKey),

    /// Publish a module
    Create(ModuleCreateArgs),

    /// Change how a VCS-backed module publishes versions
    Update {
        #[command(flatten)]
        key: ModuleKey,

        /// Publish from this branch (branch-based publishing)
        #[arg(long, conflicts_with = "tags")]
        branch: Option<String>,

        /// Publish from tags (tag-based publishing)
        #[arg(long, default_value_t = false)]
        tags: bool,
    },

    /// Delete a module, or one of its versions
    #[command(visible_alias = "rm")]
    Delete {
        #[command(flatten)]
        key: ModuleKey,

        /// Delete only this version
        #[arg(long)]
        version: Option<String>,
    },
}

/// Module identity within the organization
#[derive(Args, Debug, Clone)]
pub struct ModuleKey {
    /// Module name
    pub name: String,

    /// Provider (aws, azurerm, ...)
    pub provider: String,
}

/// Arguments for 'module create'
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        tfectl module create --vcs-repo acme/terraform-aws-vpc --oauth-token-id ot-123\n  \
        tfectl module create --name vpc --provider aws   # version uploads via the API")]
pub struct ModuleCreateArgs {
    /// VCS repository identifier (org/terraform-<provider>-<name>)
    #[arg(long, requires = "oauth_token_id")]
    pub vcs_repo: Option<String>,

    /// OAuth token used to reach the repository (ot-xxx)
    #[arg(long)]
    pub oauth_token_id: Option<String>,

    /// Publish from this branch instead of tags
    #[arg(long, requires = "vcs_repo")]
    pub branch: Option<String>,

    /// Name of a module without VCS connection
    #[arg(long, conflicts_with = "vcs_repo", requires = "provider")]
    pub name: Option<String>,

    /// Provider of a module without VCS connection
    #[arg(long, conflicts_with = "vcs_repo", requires = "name")]
    pub provider: Option<String>,
}

impl ModuleCreateArgs {
    /// Pick the module source from the given flags
    pub fn to_source(&self) -> Option<ModuleSource> {
        match (&self.vcs_repo, &self.oauth_token_id, &self.name, &self.provider) {
            (Some(identifier), Some(oauth_token_id), _, _) => Some(ModuleSource::Vcs {
                identifier: identifier.clone(),
                oauth_token_id: oauth_token_id.clone(),
                branch: self.branch.clone(),
            }),
            (None, _, Some(name), Some(provider)) => Some(ModuleSource::Standalone {
                name: name.clone(),
                provider: provider.clone(),
            }),
            _ => None,
        }
    }
}
