//! Output formatting module
//!
//! Every resource maps its typed model into a flat row type implementing
//! [`Tabular`]; the same rows render as table, CSV, JSON or YAML.

mod common;
mod credentials;
mod modules;
mod oauth;
mod runs;
mod state;
mod variables;
mod workspaces;

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{Result, TfeError};
use common::csv_column;

pub use common::escape_csv;
pub(crate) use common::{cell, yes_no};
pub use credentials::{ProfileRow, SessionRow};
pub use modules::ModuleRow;
pub use oauth::{OAuthClientRow, OAuthTokenRow};
pub use runs::RunRow;
pub use state::StateVersionRow;
pub use variables::VariableRow;
pub use workspaces::WorkspaceRow;

/// A flat record with a fixed column layout
pub trait Tabular: Serialize {
    /// Column headers for table and CSV output
    fn headers() -> Vec<&'static str>;

    /// Cell values, in header order
    fn cells(&self) -> Vec<String>;
}

/// Render rows in the requested format
pub fn render<T: Tabular>(rows: &[T], format: OutputFormat, no_header: bool) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows, no_header)),
        OutputFormat::Csv => Ok(render_csv(rows, no_header)),
        OutputFormat::Json => serde_json::to_string_pretty(rows).map_err(TfeError::from),
        OutputFormat::Yaml => {
            serde_yml::to_string(rows).map_err(|e| TfeError::Json(e.to_string()))
        }
    }
}

/// Print rows in the requested format
///
/// An empty table prints a note on stderr instead; machine-readable formats
/// still print their empty document.
pub fn output_rows<T: Tabular>(rows: &[T], format: OutputFormat, no_header: bool) {
    if rows.is_empty() && !format.is_machine_readable() {
        eprintln!("No results found");
        return;
    }
    match render(rows, format, no_header) {
        Ok(text) => println!("{}", text.trim_end()),
        Err(e) => eprintln!("Error serializing output: {}", e),
    }
}

/// Print a single record in the requested format
pub fn output_one<T: Tabular>(row: T, format: OutputFormat, no_header: bool) {
    output_rows(&[row], format, no_header)
}

fn render_table<T: Tabular>(rows: &[T], no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(T::headers());
    }
    for row in rows {
        table.add_row(row.cells());
    }
    table.to_string()
}

fn render_csv<T: Tabular>(rows: &[T], no_header: bool) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    if !no_header {
        lines.push(
            T::headers()
                .iter()
                .map(|h| csv_column(h))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    for row in rows {
        lines.push(
            row.cells()
                .iter()
                .map(|c| escape_csv(c))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}
