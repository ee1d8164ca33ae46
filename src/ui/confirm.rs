//! User confirmation prompts for mutating operations

use dialoguer::Confirm;

use crate::error::{Result, TfeError};

/// How mutating operations are confirmed before the request is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmPolicy {
    /// Ask on the terminal (default)
    #[default]
    Prompt,
    /// Caller already authorized every mutation (`--yes`)
    PreAuthorized,
    /// Refuse every mutation (batch mode without `--yes`)
    Decline,
}

impl ConfirmPolicy {
    /// Pick the policy from CLI flags
    pub fn from_flags(yes: bool, batch: bool) -> Self {
        match (yes, batch) {
            (true, _) => ConfirmPolicy::PreAuthorized,
            (false, true) => ConfirmPolicy::Decline,
            (false, false) => ConfirmPolicy::Prompt,
        }
    }

    /// Decide whether `action` may proceed
    pub fn allows(&self, action: &str) -> Result<bool> {
        match self {
            ConfirmPolicy::PreAuthorized => Ok(true),
            ConfirmPolicy::Decline => {
                eprintln!(
                    "Refusing to {} in batch mode. Pass --yes to confirm.",
                    lowercase_first(action)
                );
                Ok(false)
            }
            ConfirmPolicy::Prompt => Confirm::new()
                .with_prompt(format!("{}?", action))
                .default(false)
                .interact()
                .map_err(|e| TfeError::Aborted(format!("{}: {}", action, e))),
        }
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(
            ConfirmPolicy::from_flags(true, false),
            ConfirmPolicy::PreAuthorized
        );
        assert_eq!(
            ConfirmPolicy::from_flags(true, true),
            ConfirmPolicy::PreAuthorized
        );
        assert_eq!(ConfirmPolicy::from_flags(false, true), ConfirmPolicy::Decline);
        assert_eq!(ConfirmPolicy::from_flags(false, false), ConfirmPolicy::Prompt);
    }

    #[test]
    fn test_pre_authorized_allows() {
        assert!(ConfirmPolicy::PreAuthorized.allows("Delete workspace 'x'").unwrap());
    }

    #[test]
    fn test_decline_refuses() {
        assert!(!ConfirmPolicy::Decline.allows("Delete workspace 'x'").unwrap());
    }

    #[test]
    fn test_lowercase_first() {
        assert_eq!(lowercase_first("Delete workspace"), "delete workspace");
        assert_eq!(lowercase_first(""), "");
    }
}
