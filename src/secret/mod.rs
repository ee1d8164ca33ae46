//! Token protection at rest
//!
//! Tokens written to the credential file go through a [`SecretProtector`].
//! Where the platform offers a user-bound secret-protection primitive the
//! token is stored as an opaque blob; elsewhere it is stored as plaintext.

#[cfg(windows)]
mod dpapi;
mod passthrough;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[cfg(windows)]
pub use dpapi::DpapiProtector;
pub use passthrough::PassthroughProtector;

/// On-disk form of a token
///
/// `Protected` serializes as `{"protected": "<base64>"}`, `Plain` as a bare
/// string, so the reader can tell which form a file holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredToken {
    /// Base64 of a blob produced by the platform primitive
    Protected { protected: String },
    /// Plaintext token (degraded mode or empty token)
    Plain(String),
}

impl StoredToken {
    /// True if the token is held in protected form
    pub fn is_protected(&self) -> bool {
        matches!(self, StoredToken::Protected { .. })
    }
}

impl Default for StoredToken {
    fn default() -> Self {
        StoredToken::Plain(String::new())
    }
}

/// Capability to protect and unprotect a token
pub trait SecretProtector: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Turn a plaintext token into its stored form
    fn protect(&self, plaintext: &str) -> Result<StoredToken>;

    /// Recover the plaintext token from either stored form
    fn unprotect(&self, stored: &StoredToken) -> Result<String>;
}

/// Pick the protector for this platform
pub fn default_protector() -> Box<dyn SecretProtector> {
    #[cfg(windows)]
    {
        Box::new(DpapiProtector)
    }

    #[cfg(not(windows))]
    {
        Box::new(PassthroughProtector)
    }
}
