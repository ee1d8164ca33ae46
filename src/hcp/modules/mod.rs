//! Private module registry

mod api;
mod commands;
mod models;

pub use commands::run_module_command;
pub use models::{ModuleSource, ModuleSummary, PublishingMode, RegistryModule, VcsRepo};
