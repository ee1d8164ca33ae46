//! OAuth clients (VCS connections) and their tokens

mod api;
mod commands;
mod models;

pub use commands::run_oauth_command;
pub use models::{OAuthClient, OAuthClientAttributes, OAuthClientSettings, OAuthToken};
