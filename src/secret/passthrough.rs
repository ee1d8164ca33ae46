//! Plaintext protector for platforms without a secret-protection primitive

use crate::error::{Result, TfeError};

use super::{SecretProtector, StoredToken};

/// Stores tokens as plaintext. Never fails on write.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughProtector;

impl SecretProtector for PassthroughProtector {
    fn name(&self) -> &'static str {
        "plaintext"
    }

    fn protect(&self, plaintext: &str) -> Result<StoredToken> {
        Ok(StoredToken::Plain(plaintext.to_string()))
    }

    fn unprotect(&self, stored: &StoredToken) -> Result<String> {
        match stored {
            StoredToken::Plain(token) => Ok(token.clone()),
            StoredToken::Protected { .. } => Err(TfeError::Secret(
                "token was protected on another platform and cannot be read here; \
                 set the credentials again"
                    .to_string(),
            )),
        }
    }
}
