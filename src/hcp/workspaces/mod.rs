//! Workspace module

mod api;
mod commands;
mod models;

pub use commands::run_ws_command;
pub use models::{LockAction, Workspace, WorkspaceAttributes, WorkspaceSettings};
