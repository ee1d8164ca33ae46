//! Terminal interaction: the mutation confirmation gate and listing spinners

mod confirm;
mod spinner;

pub use confirm::ConfirmPolicy;
pub use spinner::{create_spinner, finish_spinner};
