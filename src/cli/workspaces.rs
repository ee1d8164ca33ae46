//! Workspace command arguments

use clap::{Args, Subcommand};

use crate::hcp::WorkspaceSettings;

/// Workspace subcommands
#[derive(Subcommand, Debug)]
pub enum WsAction {
    /// List workspaces of the organization
    #[command(visible_alias = "ls")]
    List {
        /// Server-side name search (fuzzy)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one workspace
    Get {
        /// Workspace name or ID (ws-xxx)
        workspace: String,
    },

    /// Create a workspace
    Create {
        /// Workspace name
        name: String,

        #[command(flatten)]
        settings: WsSettingsArgs,
    },

    /// Update workspace settings
    Update {
        /// Workspace name or ID (ws-xxx)
        workspace: String,

        /// Rename the workspace
        #[arg(long = "rename")]
        new_name: Option<String>,

        #[command(flatten)]
        settings: WsSettingsArgs,
    },

    /// Delete workspaces
    #[command(visible_alias = "rm")]
    Delete {
        /// Workspace names or IDs
        #[arg(required = true)]
        workspaces: Vec<String>,
    },

    /// Lock workspaces
    Lock {
        /// Workspace names or IDs
        #[arg(required = true)]
        workspaces: Vec<String>,

        /// Reason shown to other users
        #[arg(long)]
        reason: Option<String>,
    },

    /// Unlock workspaces
    #[command(after_help = "EXAMPLES:\n  \
        tfectl ws unlock prod\n  \
        tfectl ws unlock prod --force   # release a lock held by someone else")]
    Unlock {
        /// Workspace names or IDs
        #[arg(required = true)]
        workspaces: Vec<String>,

        /// Force-unlock a lock held by another user or run
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

/// Writable workspace settings
#[derive(Args, Debug, Default)]
pub struct WsSettingsArgs {
    /// Description
    #[arg(long)]
    pub description: Option<String>,

    /// Execution mode (remote, local, agent)
    #[arg(long)]
    pub execution_mode: Option<String>,

    /// Apply successful plans automatically
    #[arg(long)]
    pub auto_apply: Option<bool>,

    /// Terraform version
    #[arg(long)]
    pub terraform_version: Option<String>,

    /// Working directory inside the repository
    #[arg(long)]
    pub working_directory: Option<String>,
}

impl WsSettingsArgs {
    /// Convert into API settings, with an optional new name
    pub fn to_settings(&self, name: Option<&str>) -> WorkspaceSettings {
        WorkspaceSettings {
            name: name.map(|n| n.to_string()),
            description: self.description.clone(),
            execution_mode: self.execution_mode.clone(),
            auto_apply: self.auto_apply,
            terraform_version: self.terraform_version.clone(),
            working_directory: self.working_directory.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command, WsAction};
    use clap::Parser;

    #[test]
    fn test_lock_many_with_reason() {
        let cli = Cli::try_parse_from(["tfectl", "ws", "lock", "a", "b", "--reason", "deploy"])
            .unwrap();
        let Command::Ws {
            action: WsAction::Lock { workspaces, reason },
        } = cli.command
        else {
            panic!("expected ws lock");
        };
        assert_eq!(workspaces, vec!["a", "b"]);
        assert_eq!(reason.as_deref(), Some("deploy"));
    }

    #[test]
    fn test_delete_requires_a_workspace() {
        assert!(Cli::try_parse_from(["tfectl", "ws", "delete"]).is_err());
    }

    #[test]
    fn test_update_settings() {
        let cli = Cli::try_parse_from([
            "tfectl",
            "ws",
            "update",
            "prod",
            "--auto-apply",
            "true",
            "--rename",
            "production",
        ])
        .unwrap();
        let Command::Ws {
            action:
                WsAction::Update {
                    workspace,
                    new_name,
                    settings,
                },
        } = cli.command
        else {
            panic!("expected ws update");
        };
        assert_eq!(workspace, "prod");
        let settings = settings.to_settings(new_name.as_deref());
        assert_eq!(settings.name.as_deref(), Some("production"));
        assert_eq!(settings.auto_apply, Some(true));
        assert_eq!(settings.execution_mode, None);
    }
}
