//! tfectl - Main entry point

use clap::Parser;
use log::{debug, info};

use tfectl::cli::{Cli, Command};
use tfectl::credentials::{run_credentials_command, CredentialStore};
use tfectl::error::{Result, TfeError};
use tfectl::hcp::{
    run_module_command, run_oauth_command, run_run_command, run_state_command, run_var_command,
    run_ws_command, TfeClient,
};
use tfectl::output::{output_one, SessionRow};
use tfectl::session::{ExternalVault, Session};
use tfectl::ui::ConfirmPolicy;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfectl v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli).await {
        if !e.already_reported() {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let store = CredentialStore::new();
    debug!("Credential file: {}", store.path().display());

    if let Command::Credentials { action } = &cli.command {
        return run_credentials_command(&store, cli, action);
    }

    let session = build_session(cli, &store)?;
    debug!("Session: {:?}", session);

    if let Command::Session = &cli.command {
        output_one(SessionRow::from(&session), cli.output, cli.no_header);
        return Ok(());
    }

    let mut client = TfeClient::new(session);
    client.set_page_size(cli.page_size);
    client.set_confirm_policy(ConfirmPolicy::from_flags(cli.yes, cli.batch));

    match &cli.command {
        Command::Ws { action } => run_ws_command(&client, cli, action).await,
        Command::Var { action } => run_var_command(&client, cli, action).await,
        Command::Run { action } => run_run_command(&client, cli, action).await,
        Command::State { action } => run_state_command(&client, cli, action).await,
        Command::Module { action } => run_module_command(&client, cli, action).await,
        Command::Oauth { action } => run_oauth_command(&client, cli, action).await,
        Command::Credentials { .. } | Command::Session => Ok(()),
    }
}

/// Stored session, replaced by `--server` (optionally via the vault) and
/// then overridden field by field from the command line
fn build_session(cli: &Cli, store: &CredentialStore) -> Result<Session> {
    let base = match cli.server.as_deref() {
        Some(server) => {
            let vault = if cli.vault {
                Some(ExternalVault::from_env()?)
            } else {
                None
            };
            Session::connect(store, server, cli.org.as_deref(), vault.as_ref())?
        }
        None if cli.vault => {
            return Err(TfeError::Config("--vault requires --server".to_string()));
        }
        None => Session::from_store(store),
    };

    Ok(base.with_overrides(
        cli.server.as_deref(),
        cli.token.as_deref(),
        cli.org.as_deref(),
    ))
}
