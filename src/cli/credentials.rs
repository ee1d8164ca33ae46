//! Credential store command arguments

use clap::{Args, Subcommand};

use crate::config::servers;

/// Credential subcommands
#[derive(Subcommand, Debug)]
pub enum CredentialsAction {
    /// Store (or replace) the token for a server
    Set(SetCredentialsArgs),

    /// Show stored profiles
    #[command(visible_alias = "ls")]
    Get {
        /// Only this server
        server: Option<String>,

        /// Print decrypted tokens instead of masked ones
        #[arg(long, default_value_t = false)]
        show_token: bool,
    },

    /// Remove the profile of a server
    #[command(visible_alias = "rm")]
    Remove {
        /// Server host
        server: String,
    },

    /// Delete every stored profile
    Clear,
}

/// Arguments for 'credentials set'
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        tfectl credentials set app.terraform.io --token <TOKEN> --org my-org\n  \
        tfectl credentials set app.terraform.io --token <NEW>   # replace token, keep org")]
pub struct SetCredentialsArgs {
    /// Server host
    #[arg(value_parser = servers::parse_known)]
    pub server: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;

    #[test]
    fn test_set_uses_global_token_and_org() {
        let cli = Cli::try_parse_from([
            "tfectl",
            "credentials",
            "set",
            "app.terraform.io",
            "--token",
            "abc",
            "--org",
            "o1",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Credentials {
                action: CredentialsAction::Set(_)
            }
        ));
        assert_eq!(cli.token.as_deref(), Some("abc"));
        assert_eq!(cli.org.as_deref(), Some("o1"));
    }

    #[test]
    fn test_set_rejects_unknown_server() {
        assert!(Cli::try_parse_from(["tfectl", "credentials", "set", "nope.example"]).is_err());
    }
}
