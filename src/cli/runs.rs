//! Run command arguments

use clap::{Args, Subcommand};

use crate::hcp::{NewRun, RunTarget};

/// Run subcommands
#[derive(Subcommand, Debug)]
pub enum RunAction {
    /// List runs of a workspace (newest first)
    #[command(visible_alias = "ls")]
    List {
        /// Workspace name or ID
        #[arg(long = "ws")]
        workspace: String,
    },

    /// Show one run
    Get {
        /// Run ID (run-xxx)
        run_id: String,
    },

    /// Show the latest run of a workspace
    Latest {
        /// Workspace name or ID
        #[arg(long = "ws")]
        workspace: String,
    },

    /// Queue a new run
    Create(RunCreateArgs),

    /// Apply runs waiting for confirmation
    Apply(RunActionArgs),

    /// Discard runs waiting for confirmation
    Discard(RunActionArgs),

    /// Cancel planning or applying runs
    Cancel(RunActionArgs),

    /// Force-cancel runs after a cancel did not stop them
    ForceCancel(RunActionArgs),

    /// Start pending runs ahead of the queue, discarding earlier ones
    ForceExecute(RunActionArgs),
}

/// Arguments for 'run create'
#[derive(Args, Debug)]
pub struct RunCreateArgs {
    /// Workspace name or ID
    #[arg(long = "ws")]
    pub workspace: String,

    /// Run message
    #[arg(short, long)]
    pub message: Option<String>,

    /// Plan a destroy
    #[arg(long, default_value_t = false)]
    pub destroy: bool,

    /// Speculative plan that cannot be applied
    #[arg(long, default_value_t = false)]
    pub plan_only: bool,

    /// Apply automatically if the plan succeeds
    #[arg(long)]
    pub auto_apply: Option<bool>,
}

impl RunCreateArgs {
    pub fn to_run(&self) -> NewRun {
        NewRun {
            message: self.message.clone(),
            is_destroy: self.destroy,
            plan_only: self.plan_only,
            auto_apply: self.auto_apply,
        }
    }
}

/// Target selection for run actions
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        tfectl run apply run-abc123 run-def456\n  \
        tfectl run discard --ws prod   # latest run of workspace 'prod'")]
pub struct RunActionArgs {
    /// Run IDs (run-xxx)
    #[arg(required_unless_present = "workspaces", conflicts_with = "workspaces")]
    pub run_ids: Vec<String>,

    /// Act on the latest run of these workspaces instead
    #[arg(long = "ws")]
    pub workspaces: Vec<String>,

    /// Comment recorded with the action
    #[arg(short, long)]
    pub comment: Option<String>,
}

impl RunActionArgs {
    /// Targets in command-line order
    pub fn targets(&self) -> Vec<RunTarget> {
        if self.workspaces.is_empty() {
            self.run_ids.iter().map(|id| RunTarget::Id(id.clone())).collect()
        } else {
            self.workspaces
                .iter()
                .map(|ws| RunTarget::LatestOf(ws.clone()))
                .collect()
        }
    }
}
