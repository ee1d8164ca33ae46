//! Runs module

mod api;
mod commands;
mod models;

pub use commands::run_run_command;
pub use models::{NewRun, Run, RunActionKind, RunAttributes, RunTarget};
