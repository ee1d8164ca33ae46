/// Configuration constants for TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Base path for the private module registry (v1 protocol)
    pub const REGISTRY_PATH: &str = "/api/registry/v1";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Workspace variables sub-endpoint
    pub const VARS: &str = "vars";

    /// Runs endpoint
    pub const RUNS: &str = "runs";

    /// State versions endpoint
    pub const STATE_VERSIONS: &str = "state-versions";

    /// Registry modules endpoint (v2)
    pub const REGISTRY_MODULES: &str = "registry-modules";

    /// OAuth clients endpoint
    pub const OAUTH_CLIENTS: &str = "oauth-clients";

    /// OAuth tokens endpoint
    pub const OAUTH_TOKENS: &str = "oauth-tokens";

    /// JSON:API media type sent with every request
    pub const CONTENT_TYPE: &str = "application/vnd.api+json";

    /// Default page size for API requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;

    /// Largest page size the API accepts
    pub const MAX_PAGE_SIZE: u32 = 100;
}

/// Configuration constants for the credential store
pub mod store {
    /// Directory (relative to HOME) holding the credential file
    pub const DIR_NAME: &str = ".tfectl";

    /// Credential file name
    pub const FILE_NAME: &str = "credentials.json";

    /// Environment variable overriding the credential directory
    pub const DIR_ENV_VAR: &str = "TFECTL_CONFIG_DIR";
}

/// Known Terraform Cloud/Enterprise hosts accepted by `--server`
pub mod servers {
    /// Hosts always accepted
    pub const KNOWN: &[&str] = &["app.terraform.io", "app.eu.terraform.io"];

    /// Environment variable with extra comma-separated hosts (private TFE installs)
    pub const ENV_VAR: &str = "TFECTL_SERVERS";

    /// All accepted hosts: built-in list plus the environment extension
    pub fn known() -> Vec<String> {
        let mut hosts: Vec<String> = KNOWN.iter().map(|h| h.to_string()).collect();
        if let Ok(extra) = std::env::var(ENV_VAR) {
            hosts.extend(
                extra
                    .split(',')
                    .map(|h| h.trim().to_string())
                    .filter(|h| !h.is_empty()),
            );
        }
        hosts
    }

    /// Validate a server against the known list (used as a clap value parser)
    pub fn parse_known(server: &str) -> Result<String, String> {
        let hosts = known();
        if hosts.iter().any(|h| h == server) {
            Ok(server.to_string())
        } else {
            Err(format!(
                "unknown server '{}'. Known servers: {} (extend with {})",
                server,
                hosts.join(", "),
                ENV_VAR
            ))
        }
    }
}

/// External secret-retrieval command
pub mod vault {
    /// Environment variable holding the command line (program and args)
    pub const ENV_VAR: &str = "TFECTL_VAULT_COMMAND";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
