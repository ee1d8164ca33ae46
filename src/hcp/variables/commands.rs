//! Workspace variable command handlers

use crate::cli::{Cli, VarAction};
use crate::error::{Result, TfeError};
use crate::hcp::helpers::{finish_batch, not_found, run_batch};
use crate::hcp::TfeClient;
use crate::output::{output_one, output_rows, VariableRow};
use crate::ui::{create_spinner, finish_spinner};

/// Run a variable subcommand
pub async fn run_var_command(client: &TfeClient, cli: &Cli, action: &VarAction) -> Result<()> {
    match action {
        VarAction::List { workspace } => {
            let spinner = create_spinner(
                &format!("Fetching variables of '{}'...", workspace),
                cli.batch,
            );
            let result = client.list_variables(workspace).await;
            finish_spinner(spinner);

            let rows: Vec<VariableRow> = result?.iter().map(VariableRow::from).collect();
            output_rows(&rows, cli.output, cli.no_header);
            Ok(())
        }
        VarAction::Get { workspace, key } => {
            let var = client
                .get_variable(workspace, key)
                .await?
                .ok_or_else(|| not_found(&format!("Variable '{}' in '{}'", key, workspace)))?;
            output_one(VariableRow::from(&var), cli.output, cli.no_header);
            Ok(())
        }
        VarAction::Create(args) => {
            let var = client
                .create_variable(&args.workspace, &args.to_variable())
                .await?;
            output_one(VariableRow::from(&var), cli.output, cli.no_header);
            Ok(())
        }
        VarAction::Update(args) => {
            let var = client
                .update_variable(&args.workspace, &args.key, &args.to_update())
                .await?;
            output_one(VariableRow::from(&var), cli.output, cli.no_header);
            Ok(())
        }
        VarAction::Delete { workspace, keys } => {
            let outcome = run_batch(keys, "delete variable", |key| async move {
                client.delete_variable(workspace, &key).await?;
                eprintln!("Deleted variable '{}' from '{}'", key, workspace);
                Ok::<_, TfeError>(())
            })
            .await;
            finish_batch(outcome.failed, keys.len())
        }
    }
}
