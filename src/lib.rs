//! tfectl - Manage Terraform Cloud/Enterprise from the command line
//!
//! A library and CLI wrapping the TFE HTTP API: workspaces, workspace
//! variables, runs, state versions, private registry modules and VCS
//! OAuth connections.
//!
//! # Features
//!
//! - Per-server credential profiles, with tokens protected at rest where the
//!   platform supports it
//! - Lazy pagination over every collection endpoint
//! - Name-to-id resolution before every mutation
//! - Multiple output formats (table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # Store a token for a server
//! tfectl credentials set app.terraform.io --token "$TOKEN" --org my-org
//!
//! # List workspaces
//! tfectl ws list --search prod
//!
//! # Set a variable
//! tfectl var create --ws prod region eu-west-1
//!
//! # Apply the latest run of a workspace
//! tfectl run apply --ws prod -y
//! ```

pub mod cli;
pub mod config;
pub mod credentials;
pub mod error;
pub mod hcp;
pub mod output;
pub mod secret;
pub mod session;
pub mod ui;

#[cfg(test)]
mod test_log;

pub use cli::{Cli, Command, OutputFormat};
pub use credentials::{CredentialStore, ServerProfile};
pub use error::{Result, TfeError};
pub use hcp::{
    PageScheme, ResourceRef, RunTarget, TfeClient, TfeResource, Variable, Workspace,
};
pub use secret::{default_protector, SecretProtector, StoredToken};
pub use session::{ExternalVault, Session};
pub use ui::ConfirmPolicy;
