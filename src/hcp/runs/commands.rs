//! Run command handlers

use log::debug;

use crate::cli::{Cli, RunAction, RunActionArgs};
use crate::error::{Result, TfeError};
use crate::hcp::helpers::{finish_batch, not_found, run_batch};
use crate::hcp::TfeClient;
use crate::output::{output_one, output_rows, RunRow};
use crate::ui::{create_spinner, finish_spinner};

use super::models::{RunActionKind, RunTarget};

/// Run a run subcommand
pub async fn run_run_command(client: &TfeClient, cli: &Cli, action: &RunAction) -> Result<()> {
    match action {
        RunAction::List { workspace } => {
            let spinner = create_spinner(&format!("Fetching runs of '{}'...", workspace), cli.batch);
            let result = client.list_runs(workspace).await;
            finish_spinner(spinner);

            let runs = result?;
            debug!("Found {} runs", runs.len());
            let rows: Vec<RunRow> = runs.iter().map(RunRow::from).collect();
            output_rows(&rows, cli.output, cli.no_header);
            Ok(())
        }
        RunAction::Get { run_id } => {
            let run = client
                .get_run(run_id)
                .await?
                .ok_or_else(|| not_found(&format!("Run '{}'", run_id)))?;
            output_one(RunRow::from(&run), cli.output, cli.no_header);
            Ok(())
        }
        RunAction::Latest { workspace } => {
            let run = client
                .latest_run_for(workspace)
                .await?
                .ok_or_else(|| not_found(&format!("Run of workspace '{}'", workspace)))?;
            output_one(RunRow::from(&run), cli.output, cli.no_header);
            Ok(())
        }
        RunAction::Create(args) => {
            let run = client.create_run(&args.workspace, &args.to_run()).await?;
            output_one(RunRow::from(&run), cli.output, cli.no_header);
            Ok(())
        }
        RunAction::Apply(args) => act_on_runs(client, args, RunActionKind::Apply).await,
        RunAction::Discard(args) => act_on_runs(client, args, RunActionKind::Discard).await,
        RunAction::Cancel(args) => act_on_runs(client, args, RunActionKind::Cancel).await,
        RunAction::ForceCancel(args) => act_on_runs(client, args, RunActionKind::ForceCancel).await,
        RunAction::ForceExecute(args) => {
            act_on_runs(client, args, RunActionKind::ForceExecute).await
        }
    }
}

async fn act_on_runs(client: &TfeClient, args: &RunActionArgs, kind: RunActionKind) -> Result<()> {
    let targets = args.targets();
    let comment = args.comment.as_deref();
    let action = format!("{} run", kind.verb().to_lowercase());

    let outcome = run_batch(&targets, &action, |target: RunTarget| async move {
        let run_id = client.run_action(&target, kind, comment).await?;
        eprintln!("{} requested for run {}", kind.verb(), run_id);
        Ok::<_, TfeError>(())
    })
    .await;
    finish_batch(outcome.failed, targets.len())
}
