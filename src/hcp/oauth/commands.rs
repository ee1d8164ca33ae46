//! OAuth client and token command handlers

use crate::cli::{Cli, OAuthAction, OAuthClientAction, OAuthTokenAction};
use crate::error::{Result, TfeError};
use crate::hcp::helpers::{finish_batch, not_found, run_batch};
use crate::hcp::TfeClient;
use crate::output::{output_one, output_rows, OAuthClientRow, OAuthTokenRow};
use crate::ui::{create_spinner, finish_spinner};

/// Run an OAuth subcommand
pub async fn run_oauth_command(client: &TfeClient, cli: &Cli, action: &OAuthAction) -> Result<()> {
    match action {
        OAuthAction::Client { action } => run_client_command(client, cli, action).await,
        OAuthAction::Token { action } => run_token_command(client, cli, action).await,
    }
}

async fn run_client_command(
    client: &TfeClient,
    cli: &Cli,
    action: &OAuthClientAction,
) -> Result<()> {
    match action {
        OAuthClientAction::List => {
            let spinner = create_spinner("Fetching OAuth clients...", cli.batch);
            let result = client.list_oauth_clients().await;
            finish_spinner(spinner);

            let rows: Vec<OAuthClientRow> = result?.iter().map(OAuthClientRow::from).collect();
            output_rows(&rows, cli.output, cli.no_header);
            Ok(())
        }
        OAuthClientAction::Get { client: target } => {
            let oc = client
                .get_oauth_client(target)
                .await?
                .ok_or_else(|| not_found(&format!("OAuth client '{}'", target)))?;
            output_one(OAuthClientRow::from(&oc), cli.output, cli.no_header);
            Ok(())
        }
        OAuthClientAction::Create {
            service_provider,
            fields,
        } => {
            let oc = client
                .create_oauth_client(service_provider, &fields.to_settings())
                .await?;
            output_one(OAuthClientRow::from(&oc), cli.output, cli.no_header);
            Ok(())
        }
        OAuthClientAction::Update {
            client: target,
            fields,
        } => {
            let oc = client
                .update_oauth_client(target, &fields.to_settings())
                .await?;
            output_one(OAuthClientRow::from(&oc), cli.output, cli.no_header);
            Ok(())
        }
        OAuthClientAction::Delete { clients } => {
            let outcome = run_batch(clients, "delete OAuth client", |oc| async move {
                client.delete_oauth_client(&oc).await?;
                eprintln!("Deleted OAuth client '{}'", oc);
                Ok::<_, TfeError>(())
            })
            .await;
            finish_batch(outcome.failed, clients.len())
        }
    }
}

async fn run_token_command(client: &TfeClient, cli: &Cli, action: &OAuthTokenAction) -> Result<()> {
    match action {
        OAuthTokenAction::List { client: oc } => {
            let rows: Vec<OAuthTokenRow> = client
                .list_oauth_tokens(oc)
                .await?
                .iter()
                .map(OAuthTokenRow::from)
                .collect();
            output_rows(&rows, cli.output, cli.no_header);
            Ok(())
        }
        OAuthTokenAction::Get { token_id } => {
            let token = client
                .get_oauth_token(token_id)
                .await?
                .ok_or_else(|| not_found(&format!("OAuth token '{}'", token_id)))?;
            output_one(OAuthTokenRow::from(&token), cli.output, cli.no_header);
            Ok(())
        }
        OAuthTokenAction::Update { token_id, ssh_key } => {
            let token = client.update_oauth_token(token_id, ssh_key).await?;
            output_one(OAuthTokenRow::from(&token), cli.output, cli.no_header);
            Ok(())
        }
        OAuthTokenAction::Delete { token_ids } => {
            let outcome = run_batch(token_ids, "delete OAuth token", |id| async move {
                client.delete_oauth_token(&id).await?;
                eprintln!("Deleted OAuth token '{}'", id);
                Ok::<_, TfeError>(())
            })
            .await;
            finish_batch(outcome.failed, token_ids.len())
        }
    }
}
