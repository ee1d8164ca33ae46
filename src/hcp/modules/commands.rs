//! Registry module command handlers

use crate::cli::{Cli, ModuleAction};
use crate::error::{Result, TfeError};
use crate::hcp::helpers::not_found;
use crate::hcp::TfeClient;
use crate::output::{output_one, output_rows, ModuleRow};
use crate::ui::{create_spinner, finish_spinner};

use super::models::PublishingMode;

/// Run a registry module subcommand
pub async fn run_module_command(client: &TfeClient, cli: &Cli, action: &ModuleAction) -> Result<()> {
    match action {
        ModuleAction::List => {
            let spinner = create_spinner("Fetching registry modules...", cli.batch);
            let result = client.list_registry_modules().await;
            finish_spinner(spinner);

            let rows: Vec<ModuleRow> = result?.iter().map(ModuleRow::from).collect();
            output_rows(&rows, cli.output, cli.no_header);
            Ok(())
        }
        ModuleAction::Get(key) => {
            let module = client
                .get_registry_module(&key.name, &key.provider)
                .await?
                .ok_or_else(|| not_found(&format!("Module '{}/{}'", key.name, key.provider)))?;
            output_one(ModuleRow::from(&module), cli.output, cli.no_header);
            Ok(())
        }
        ModuleAction::Create(args) => {
            let source = args.to_source().ok_or_else(|| {
                TfeError::Config(
                    "Specify --vcs-repo with --oauth-token-id, or --name with --provider"
                        .to_string(),
                )
            })?;
            let module = client.create_registry_module(&source).await?;
            output_one(ModuleRow::from(&module), cli.output, cli.no_header);
            Ok(())
        }
        ModuleAction::Update { key, branch, tags } => {
            let mode = match (branch, tags) {
                (Some(branch), _) => PublishingMode::Branch(branch.clone()),
                (None, true) => PublishingMode::Tags,
                (None, false) => {
                    return Err(TfeError::Config(
                        "Specify --branch <name> or --tags".to_string(),
                    ))
                }
            };
            let module = client
                .update_registry_module(&key.name, &key.provider, &mode)
                .await?;
            output_one(ModuleRow::from(&module), cli.output, cli.no_header);
            Ok(())
        }
        ModuleAction::Delete { key, version } => {
            client
                .delete_registry_module(&key.name, &key.provider, version.as_deref())
                .await?;
            match version {
                Some(v) => eprintln!("Deleted version {} of '{}/{}'", v, key.name, key.provider),
                None => eprintln!("Deleted module '{}/{}'", key.name, key.provider),
            }
            Ok(())
        }
    }
}
