use std::fmt;

/// Custom error type for TFE operations
#[derive(Debug)]
pub enum TfeError {
    /// HTTP request failed before a response arrived
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Missing server, token or organization; no request was attempted
    Config(String),
    /// A resource name did not resolve to a server-assigned id
    Resolution { kind: String, name: String },
    /// Credential file could not be read or written
    Persistence(String),
    /// Token could not be protected or unprotected
    Secret(String),
    /// External secret-retrieval command failed
    Vault(String),
    /// JSON parsing error
    Json(String),
    /// User declined (or batch mode refused) a confirmation prompt
    Aborted(String),
    /// Some items of a multi-item command failed (each already reported)
    Batch { failed: usize, total: usize },
}

impl fmt::Display for TfeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfeError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TfeError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            TfeError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TfeError::Resolution { kind, name } => {
                write!(f, "Could not resolve {} '{}' to an id", kind, name)
            }
            TfeError::Persistence(msg) => write!(f, "Credential store error: {}", msg),
            TfeError::Secret(msg) => write!(f, "Secret error: {}", msg),
            TfeError::Vault(msg) => write!(f, "Vault error: {}", msg),
            TfeError::Json(msg) => write!(f, "JSON error: {}", msg),
            TfeError::Aborted(msg) => write!(f, "Aborted: {}", msg),
            TfeError::Batch { failed, total } => {
                write!(f, "{} of {} items failed", failed, total)
            }
        }
    }
}

impl std::error::Error for TfeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl TfeError {
    /// Build a resolution error for a resource kind and name
    pub fn unresolved(kind: &str, name: &str) -> Self {
        TfeError::Resolution {
            kind: kind.to_string(),
            name: name.to_string(),
        }
    }

    /// `Ok` when no batch item failed, otherwise a batch error
    pub fn from_batch(failed: usize, total: usize) -> Result<()> {
        if failed == 0 {
            Ok(())
        } else {
            Err(TfeError::Batch { failed, total })
        }
    }

    /// True when the failure was already logged where it happened
    /// (an unresolved name)
    pub fn already_reported(&self) -> bool {
        matches!(self, TfeError::Resolution { .. })
    }
}

impl From<reqwest::Error> for TfeError {
    fn from(err: reqwest::Error) -> Self {
        TfeError::Http(err)
    }
}

impl From<serde_json::Error> for TfeError {
    fn from(err: serde_json::Error) -> Self {
        TfeError::Json(err.to_string())
    }
}

impl From<std::io::Error> for TfeError {
    fn from(err: std::io::Error) -> Self {
        TfeError::Persistence(err.to_string())
    }
}

/// Result type alias for TFE operations
pub type Result<T> = std::result::Result<T, TfeError>;
