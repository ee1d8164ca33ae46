//! Credential store
//!
//! Persists one profile (server, protected token, default org) per server
//! in a single JSON file.

mod commands;
mod models;
mod store;

pub use commands::run_credentials_command;
pub use models::{CredentialFile, ServerProfile};
pub use store::CredentialStore;
