//! State versions module

mod api;
mod commands;
mod models;

pub use commands::run_state_command;
pub use models::{StateUpload, StateVersion, StateVersionAttributes};
