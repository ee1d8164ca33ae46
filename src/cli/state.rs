//! State version command arguments

use clap::Subcommand;
use std::path::PathBuf;

/// State version subcommands
#[derive(Subcommand, Debug)]
pub enum StateAction {
    /// List state versions of a workspace (newest first)
    #[command(visible_alias = "ls")]
    List {
        /// Workspace name
        #[arg(long = "ws")]
        workspace: String,
    },

    /// Show one state version
    Get {
        /// State version ID (sv-xxx)
        state_version_id: String,
    },

    /// Show the current state version of a workspace
    Current {
        /// Workspace name or ID
        #[arg(long = "ws")]
        workspace: String,
    },

    /// Upload a local state file as a new state version
    #[command(after_help = "The workspace must be locked by you first:\n  \
        tfectl ws lock prod && tfectl state create --ws prod terraform.tfstate && tfectl ws unlock prod")]
    Create {
        /// Workspace name or ID
        #[arg(long = "ws")]
        workspace: String,

        /// Path to the state file
        file: PathBuf,

        /// Run that produced this state (run-xxx)
        #[arg(long)]
        run_id: Option<String>,
    },

    /// Download the current state of a workspace
    Download {
        /// Workspace name or ID
        #[arg(long = "ws")]
        workspace: String,

        /// Write to this file instead of stdout
        #[arg(long = "out")]
        out: Option<PathBuf>,
    },
}
