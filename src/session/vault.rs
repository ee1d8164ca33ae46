//! External secret-retrieval command

use log::debug;
use serde::Deserialize;
use std::process::Command;

use crate::config::vault as vault_config;
use crate::error::{Result, TfeError};

/// Expected stdout of the vault command
#[derive(Deserialize, Debug)]
struct VaultResponse {
    token: String,
}

/// A command that prints `{"token": "..."}` for the server passed as its last argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalVault {
    program: String,
    args: Vec<String>,
}

impl ExternalVault {
    /// Create a vault from a program and its leading arguments
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parse a whitespace-separated command line
    pub fn parse(command_line: &str) -> Result<Self> {
        let mut parts = command_line.split_whitespace().map(|s| s.to_string());
        let program = parts
            .next()
            .ok_or_else(|| TfeError::Config("Vault command is empty".to_string()))?;
        Ok(Self::new(program, parts.collect()))
    }

    /// Read the vault command from `TFECTL_VAULT_COMMAND`
    pub fn from_env() -> Result<Self> {
        let line = std::env::var(vault_config::ENV_VAR).map_err(|_| {
            TfeError::Config(format!(
                "--vault requires {} to name the secret command",
                vault_config::ENV_VAR
            ))
        })?;
        Self::parse(&line)
    }

    /// Fetch the token for `server`
    pub fn fetch_token(&self, server: &str) -> Result<String> {
        debug!("Fetching token for '{}' from vault command '{}'", server, self.program);

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(server)
            .output()
            .map_err(|e| TfeError::Vault(format!("Failed to run '{}': {}", self.program, e)))?;

        if !output.status.success() {
            return Err(TfeError::Vault(format!(
                "'{}' exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let response: VaultResponse = serde_json::from_slice(&output.stdout).map_err(|e| {
            TfeError::Vault(format!(
                "'{}' did not print a JSON object with a token: {}",
                self.program, e
            ))
        })?;
        Ok(response.token)
    }
}
