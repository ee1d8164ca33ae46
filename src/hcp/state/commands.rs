//! State version command handlers

use log::debug;

use crate::cli::{Cli, StateAction};
use crate::error::Result;
use crate::hcp::helpers::not_found;
use crate::hcp::TfeClient;
use crate::output::{output_one, output_rows, StateVersionRow};
use crate::ui::{create_spinner, finish_spinner};

/// Run a state version subcommand
pub async fn run_state_command(client: &TfeClient, cli: &Cli, action: &StateAction) -> Result<()> {
    match action {
        StateAction::List { workspace } => {
            let spinner = create_spinner(
                &format!("Fetching state versions of '{}'...", workspace),
                cli.batch,
            );
            let result = client.list_state_versions(workspace).await;
            finish_spinner(spinner);

            let versions = result?;
            debug!("Found {} state versions", versions.len());
            let rows: Vec<StateVersionRow> = versions.iter().map(StateVersionRow::from).collect();
            output_rows(&rows, cli.output, cli.no_header);
            Ok(())
        }
        StateAction::Get { state_version_id } => {
            let sv = client
                .get_state_version(state_version_id)
                .await?
                .ok_or_else(|| not_found(&format!("State version '{}'", state_version_id)))?;
            output_one(StateVersionRow::from(&sv), cli.output, cli.no_header);
            Ok(())
        }
        StateAction::Current { workspace } => {
            let sv = client
                .current_state_version(workspace)
                .await?
                .ok_or_else(|| not_found(&format!("State of workspace '{}'", workspace)))?;
            output_one(StateVersionRow::from(&sv), cli.output, cli.no_header);
            Ok(())
        }
        StateAction::Create {
            workspace,
            file,
            run_id,
        } => {
            let sv = client
                .create_state_version(workspace, file, run_id.as_deref())
                .await?;
            output_one(StateVersionRow::from(&sv), cli.output, cli.no_header);
            Ok(())
        }
        StateAction::Download { workspace, out } => {
            let spinner = create_spinner(&format!("Downloading state of '{}'...", workspace), cli.batch);
            let result = client.download_current_state(workspace).await;
            finish_spinner(spinner);

            let text = serde_json::to_string_pretty(&result?)?;
            match out {
                Some(path) => {
                    std::fs::write(path, format!("{}\n", text))?;
                    eprintln!("State written to {}", path.display());
                }
                None => println!("{}", text),
            }
            Ok(())
        }
    }
}
