//! CLI argument parsing

mod common;
mod credentials;
mod modules;
mod oauth;
mod runs;
mod state;
mod variables;
mod workspaces;

use clap::{Parser, Subcommand};

use crate::config::{api, defaults, servers};

pub use common::OutputFormat;
pub use credentials::{CredentialsAction, SetCredentialsArgs};
pub use modules::{ModuleAction, ModuleCreateArgs, ModuleKey};
pub use oauth::{OAuthAction, OAuthClientAction, OAuthClientFields, OAuthTokenAction};
pub use runs::{RunAction, RunActionArgs, RunCreateArgs};
pub use state::StateAction;
pub use variables::{VarAction, VarCreateArgs, VarUpdateArgs, VariableCategoryArg};
pub use workspaces::{WsAction, WsSettingsArgs};

/// Terraform Cloud/Enterprise command-line client
#[derive(Parser, Debug)]
#[command(name = "tfectl")]
#[command(version)]
#[command(
    about = "Manage Terraform Cloud/Enterprise workspaces, variables, runs, state, modules and VCS connections"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Server host (overrides the stored session)
    #[arg(long, global = true, env = "TFECTL_SERVER", value_parser = servers::parse_known)]
    pub server: Option<String>,

    /// API token (overrides the stored token)
    #[arg(long, global = true, env = "TFECTL_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Organization name (overrides the stored organization)
    #[arg(long, global = true, env = "TFECTL_ORG")]
    pub org: Option<String>,

    /// Fetch the token for --server from the command in TFECTL_VAULT_COMMAND
    #[arg(long, global = true, default_value_t = false)]
    pub vault: bool,

    /// Items requested per page when listing
    #[arg(
        long,
        global = true,
        default_value_t = api::DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=api::MAX_PAGE_SIZE as i64)
    )]
    pub page_size: u32,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Omit table and CSV headers
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,

    /// Batch mode: no prompts, no spinners; mutations need --yes
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Confirm every mutation without prompting
    #[arg(short = 'y', long, global = true, default_value_t = false)]
    pub yes: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, env = "TFECTL_LOG", default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage workspaces
    #[command(visible_alias = "workspace", visible_alias = "workspaces")]
    Ws {
        #[command(subcommand)]
        action: WsAction,
    },

    /// Manage workspace variables
    #[command(visible_alias = "variable", visible_alias = "variables")]
    Var {
        #[command(subcommand)]
        action: VarAction,
    },

    /// Manage runs
    #[command(visible_alias = "runs")]
    Run {
        #[command(subcommand)]
        action: RunAction,
    },

    /// Manage state versions
    #[command(visible_alias = "state-version", visible_alias = "sv")]
    State {
        #[command(subcommand)]
        action: StateAction,
    },

    /// Manage private registry modules
    #[command(visible_alias = "modules")]
    Module {
        #[command(subcommand)]
        action: ModuleAction,
    },

    /// Manage VCS OAuth clients and tokens
    Oauth {
        #[command(subcommand)]
        action: OAuthAction,
    },

    /// Manage stored server credentials
    #[command(visible_alias = "creds")]
    Credentials {
        #[command(subcommand)]
        action: CredentialsAction,
    },

    /// Show the session this invocation would use
    Session,
}
