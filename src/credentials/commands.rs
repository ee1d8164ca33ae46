//! Credential store command handlers

use log::warn;

use crate::cli::{Cli, CredentialsAction};
use crate::error::{Result, TfeError};
use crate::output::{output_one, output_rows, ProfileRow};
use crate::session::mask_token;
use crate::ui::ConfirmPolicy;

use super::models::ServerProfile;
use super::store::CredentialStore;

/// Dispatch credential subcommands; no API client is involved
pub fn run_credentials_command(
    store: &CredentialStore,
    cli: &Cli,
    action: &CredentialsAction,
) -> Result<()> {
    match action {
        CredentialsAction::Set(args) => run_set(store, cli, &args.server),
        CredentialsAction::Get { server, show_token } => {
            run_get(store, cli, server.as_deref(), *show_token)
        }
        CredentialsAction::Remove { server } => {
            if store.remove(server)? {
                eprintln!("Removed credentials for '{}'", server);
            } else {
                warn!("No stored credentials for '{}'", server);
            }
            Ok(())
        }
        CredentialsAction::Clear => {
            let action = format!("Delete all stored credentials in {}", store.path().display());
            if !ConfirmPolicy::from_flags(cli.yes, cli.batch).allows(&action)? {
                return Err(TfeError::Aborted(action));
            }
            store.clear()?;
            eprintln!("Cleared {}", store.path().display());
            Ok(())
        }
    }
}

fn run_set(store: &CredentialStore, cli: &Cli, server: &str) -> Result<()> {
    let token = cli
        .token
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| TfeError::Config("--token (or TFECTL_TOKEN) is required".to_string()))?;

    let profiles = store.upsert(server, token, cli.org.as_deref());

    // upsert reports its own failures and hands back the previous list
    let saved = profiles
        .iter()
        .find(|p| p.server == server)
        .and_then(|p| store.reveal(p).ok())
        .is_some_and(|stored| stored == token);
    if !saved {
        return Err(TfeError::Persistence(format!(
            "Credentials for '{}' were not saved to {}",
            server,
            store.path().display()
        )));
    }

    eprintln!(
        "Stored credentials for '{}' in {} ({})",
        server,
        store.path().display(),
        store.protection()
    );
    Ok(())
}

fn run_get(store: &CredentialStore, cli: &Cli, server: Option<&str>, show_token: bool) -> Result<()> {
    let profiles: Vec<ServerProfile> = store
        .load()
        .into_iter()
        .filter(|p| server.is_none_or(|s| p.server == s))
        .collect();

    if let Some(s) = server {
        if profiles.is_empty() {
            return Err(TfeError::Config(format!("No stored credentials for '{}'", s)));
        }
    }

    let rows: Vec<ProfileRow> = profiles
        .iter()
        .map(|p| profile_row(store, p, show_token))
        .collect();

    match (server, rows.as_slice()) {
        (Some(_), [row]) => output_one(row.clone(), cli.output, cli.no_header),
        _ => output_rows(&rows, cli.output, cli.no_header),
    }
    Ok(())
}

fn profile_row(store: &CredentialStore, profile: &ServerProfile, show_token: bool) -> ProfileRow {
    let token = match store.reveal(profile) {
        Ok(token) if show_token => token,
        Ok(token) => mask_token(Some(&token)),
        Err(e) => {
            warn!("Stored token for '{}' is unusable: {}", profile.server, e);
            "<unreadable>".to_string()
        }
    };
    ProfileRow::new(
        &profile.server,
        profile.org.as_deref(),
        token,
        profile.token.is_protected(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::PassthroughProtector;
    use clap::Parser;
    use tempfile::TempDir;

    fn temp_store(dir: &TempDir) -> CredentialStore {
        CredentialStore::with_protector(
            dir.path().join("credentials.json"),
            Box::new(PassthroughProtector),
        )
    }

    fn run(store: &CredentialStore, args: &[&str]) -> Result<()> {
        let cli = Cli::try_parse_from(args).unwrap();
        match &cli.command {
            crate::cli::Command::Credentials { action } => {
                run_credentials_command(store, &cli, action)
            }
            other => panic!("expected credentials command, got {:?}", other),
        }
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        run(
            &store,
            &["tfectl", "credentials", "set", "app.terraform.io", "--token", "tok-1234", "--org", "acme"],
        )
        .unwrap();

        let profile = store.find("app.terraform.io").unwrap();
        assert_eq!(store.reveal(&profile).unwrap(), "tok-1234");
        assert_eq!(profile.org.as_deref(), Some("acme"));

        run(&store, &["tfectl", "credentials", "get", "app.terraform.io"]).unwrap();
    }

    #[test]
    fn test_set_without_token_fails() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        let cli = Cli::try_parse_from(["tfectl", "credentials", "set", "app.terraform.io"]).unwrap();
        let crate::cli::Command::Credentials { action } = &cli.command else {
            panic!("expected credentials command");
        };
        if cli.token.is_some() {
            // TFECTL_TOKEN is set in the environment running the tests
            return;
        }
        let err = run_credentials_command(&store, &cli, action).unwrap_err();
        assert!(matches!(err, TfeError::Config(_)));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_get_unknown_server_fails() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        let err = run(&store, &["tfectl", "credentials", "get", "app.terraform.io"]).unwrap_err();
        assert!(matches!(err, TfeError::Config(_)));
    }

    #[test]
    fn test_remove_and_clear() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        store.upsert("app.terraform.io", "a", None);
        store.upsert("app.eu.terraform.io", "b", None);

        run(&store, &["tfectl", "credentials", "remove", "app.terraform.io"]).unwrap();
        assert_eq!(store.load().len(), 1);

        let err = run(&store, &["tfectl", "--batch", "credentials", "clear"]).unwrap_err();
        assert!(matches!(err, TfeError::Aborted(_)));
        assert_eq!(store.load().len(), 1);

        run(&store, &["tfectl", "-y", "credentials", "clear"]).unwrap();
        assert!(store.load().is_empty());
    }
}
