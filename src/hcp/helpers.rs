//! Helpers for commands that act on several items in one invocation
//!
//! Items are processed one after another. A failing item is reported and
//! the rest still run.

use log::warn;
use std::fmt::Display;
use std::future::Future;

use crate::error::{Result, TfeError};

/// Outcome of a batch: successful results and the number of failed items
#[derive(Debug)]
pub struct BatchOutcome<T> {
    pub succeeded: Vec<T>,
    pub failed: usize,
}

impl<T> BatchOutcome<T> {
    /// True when at least one item failed
    pub fn had_errors(&self) -> bool {
        self.failed > 0
    }
}

/// Run `op` for each item in order, collecting successes.
///
/// Each failure is warned once. Resolution failures were already reported
/// by the resolver and are only counted.
pub async fn run_batch<I, T, F, Fut>(items: &[I], action: &str, mut op: F) -> BatchOutcome<T>
where
    I: Clone + Display,
    F: FnMut(I) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut succeeded = Vec::new();
    let mut failed = 0;

    for item in items {
        match op(item.clone()).await {
            Ok(value) => succeeded.push(value),
            Err(e) => {
                failed += 1;
                if !e.already_reported() {
                    warn!("Failed to {} '{}': {}", action, item, e);
                }
            }
        }
    }

    BatchOutcome { succeeded, failed }
}

/// Error for a single-resource lookup that found nothing
pub fn not_found(label: &str) -> TfeError {
    TfeError::Api {
        status: 404,
        message: format!("{} not found", label),
    }
}

/// Log the outcome of a batch and turn failures into an error
pub fn finish_batch(failed: usize, total: usize) -> Result<()> {
    log_completion(failed > 0);
    TfeError::from_batch(failed, total)
}

/// Log completion status to info log
pub fn log_completion(had_errors: bool) {
    if had_errors {
        log::info!("Completed with some errors");
    } else {
        log::info!("Completed successfully");
    }
}
