//! Workspace variable module

mod api;
mod commands;
mod models;

pub use commands::run_var_command;
pub use models::{NewVariable, Variable, VariableAttributes, VariableCategory, VariableUpdate};
