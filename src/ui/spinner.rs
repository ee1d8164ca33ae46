//! Progress spinner for long listings

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(100);

/// Start a spinner on stderr.
///
/// No spinner in batch mode or when stderr is not a terminal, so piped
/// output stays clean.
pub fn create_spinner(message: &str, batch: bool) -> Option<ProgressBar> {
    if batch || !std::io::stderr().is_terminal() {
        return None;
    }
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .map(|s| s.tick_chars("|/-\\ "))
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let spinner = ProgressBar::new_spinner()
        .with_style(style)
        .with_message(message.to_string());
    spinner.enable_steady_tick(TICK);
    Some(spinner)
}

/// Clear the spinner line before results are printed
pub fn finish_spinner(spinner: Option<ProgressBar>) {
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
}
