//! TFE API client module
//!
//! The client, the generic list/resolve machinery, and one submodule per
//! resource type.

mod client;
pub mod helpers;
pub mod models;
pub mod modules;
pub mod oauth;
pub mod pagination;
pub mod resolver;
pub mod runs;
pub mod state;
pub mod traits;
pub mod variables;
pub mod workspaces;

pub use client::TfeClient;
pub use helpers::{log_completion, run_batch, BatchOutcome};
pub use modules::{
    run_module_command, ModuleSource, ModuleSummary, PublishingMode, RegistryModule,
};
pub use oauth::{run_oauth_command, OAuthClient, OAuthClientSettings, OAuthToken};
pub use pagination::PageScheme;
pub use resolver::{ResourceRef, Target};
pub use runs::{run_run_command, NewRun, Run, RunActionKind, RunTarget};
pub use state::{run_state_command, StateUpload, StateVersion};
pub use traits::{ApiListResponse, PaginatedResponse, TfeResource};
pub use variables::{
    run_var_command, NewVariable, Variable, VariableCategory, VariableUpdate,
};
pub use workspaces::{run_ws_command, LockAction, Workspace, WorkspaceSettings};
