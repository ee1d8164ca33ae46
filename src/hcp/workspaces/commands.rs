//! Workspace command handlers

use log::debug;

use crate::cli::{Cli, WsAction};
use crate::error::{Result, TfeError};
use crate::hcp::helpers::{finish_batch, not_found, run_batch};
use crate::hcp::TfeClient;
use crate::output::{output_one, output_rows, WorkspaceRow};
use crate::ui::{create_spinner, finish_spinner};

use super::models::LockAction;

/// Run a workspace subcommand
pub async fn run_ws_command(client: &TfeClient, cli: &Cli, action: &WsAction) -> Result<()> {
    match action {
        WsAction::List { search } => {
            let spinner = create_spinner("Fetching workspaces...", cli.batch);
            let result = client.list_workspaces(search.as_deref()).await;
            finish_spinner(spinner);

            let workspaces = result?;
            debug!("Found {} workspaces", workspaces.len());
            let rows: Vec<WorkspaceRow> = workspaces.iter().map(WorkspaceRow::from).collect();
            output_rows(&rows, cli.output, cli.no_header);
            Ok(())
        }
        WsAction::Get { workspace } => {
            let ws = client
                .get_workspace(workspace)
                .await?
                .ok_or_else(|| not_found(&format!("Workspace '{}'", workspace)))?;
            output_one(WorkspaceRow::from(&ws), cli.output, cli.no_header);
            Ok(())
        }
        WsAction::Create { name, settings } => {
            let ws = client
                .create_workspace(name, &settings.to_settings(None))
                .await?;
            output_one(WorkspaceRow::from(&ws), cli.output, cli.no_header);
            Ok(())
        }
        WsAction::Update {
            workspace,
            new_name,
            settings,
        } => {
            let ws = client
                .update_workspace(workspace, &settings.to_settings(new_name.as_deref()))
                .await?;
            output_one(WorkspaceRow::from(&ws), cli.output, cli.no_header);
            Ok(())
        }
        WsAction::Delete { workspaces } => {
            let outcome = run_batch(workspaces, "delete workspace", |ws| async move {
                client.delete_workspace(&ws).await?;
                eprintln!("Deleted workspace '{}'", ws);
                Ok::<_, TfeError>(())
            })
            .await;
            finish_batch(outcome.failed, workspaces.len())
        }
        WsAction::Lock { workspaces, reason } => {
            let lock = LockAction::Lock {
                reason: reason.clone(),
            };
            apply_lock(client, cli, workspaces, &lock).await
        }
        WsAction::Unlock { workspaces, force } => {
            let lock = if *force {
                LockAction::ForceUnlock
            } else {
                LockAction::Unlock
            };
            apply_lock(client, cli, workspaces, &lock).await
        }
    }
}

async fn apply_lock(
    client: &TfeClient,
    cli: &Cli,
    workspaces: &[String],
    lock: &LockAction,
) -> Result<()> {
    let action = format!("{} workspace", lock.verb().to_lowercase());
    let outcome = run_batch(workspaces, &action, |ws| async move {
        client.set_workspace_lock(&ws, lock).await
    })
    .await;

    let rows: Vec<WorkspaceRow> = outcome.succeeded.iter().map(WorkspaceRow::from).collect();
    if !rows.is_empty() {
        output_rows(&rows, cli.output, cli.no_header);
    }
    finish_batch(outcome.failed, workspaces.len())
}
