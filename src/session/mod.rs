//! Connection session: the server, token and organization used by API calls
//!
//! A session lives in memory only. It is seeded from the first stored
//! profile, replaced by [`Session::connect`], and adjusted per invocation by
//! [`Session::with_overrides`].

mod vault;

use log::{debug, warn};
use std::fmt;

use crate::credentials::CredentialStore;
use crate::error::{Result, TfeError};

pub use vault::ExternalVault;

/// Current connection parameters. The token is always plaintext here.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    server: Option<String>,
    token: Option<String>,
    org: Option<String>,
}

impl Session {
    /// Create a session from explicit values
    pub fn new(server: &str, token: &str, org: Option<&str>) -> Self {
        Self {
            server: Some(server.to_string()),
            token: Some(token.to_string()),
            org: org.map(|o| o.to_string()),
        }
    }

    /// A session with nothing set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seed from the first profile in the store, or empty if there is none
    pub fn from_store(store: &CredentialStore) -> Self {
        let Some(profile) = store.load().into_iter().next() else {
            debug!("No stored profiles, starting with an empty session");
            return Self::empty();
        };

        match store.reveal(&profile) {
            Ok(token) => {
                debug!("Seeded session from stored profile '{}'", profile.server);
                Self {
                    server: Some(profile.server),
                    token: Some(token),
                    org: profile.org,
                }
            }
            Err(e) => {
                warn!("Stored token for '{}' is unusable: {}", profile.server, e);
                Self {
                    server: Some(profile.server),
                    token: None,
                    org: profile.org,
                }
            }
        }
    }

    /// Replace the session with the credentials for `server`.
    ///
    /// With a vault the token comes from the external command and `org` is
    /// required. Otherwise the stored profile for `server` is used; when none
    /// matches the session is empty and a warning is logged. An explicit
    /// `org` wins over the stored one.
    pub fn connect(
        store: &CredentialStore,
        server: &str,
        org: Option<&str>,
        vault: Option<&ExternalVault>,
    ) -> Result<Self> {
        if let Some(vault) = vault {
            let org = org.ok_or_else(|| {
                TfeError::Config(format!(
                    "An organization is required when fetching the token for '{}' from a vault",
                    server
                ))
            })?;
            let token = vault.fetch_token(server)?;
            return Ok(Self::new(server, &token, Some(org)));
        }

        let Some(profile) = store.find(server) else {
            warn!(
                "No stored credentials for server '{}' in {}",
                server,
                store.path().display()
            );
            return Ok(Self::empty());
        };

        let token = store.reveal(&profile)?;
        debug!("Connected session to '{}'", server);
        Ok(Self {
            server: Some(profile.server),
            token: Some(token),
            org: org.map(|o| o.to_string()).or(profile.org),
        })
    }

    /// Apply per-invocation values; `None` keeps the current field
    pub fn with_overrides(
        mut self,
        server: Option<&str>,
        token: Option<&str>,
        org: Option<&str>,
    ) -> Self {
        if let Some(server) = server {
            self.server = Some(server.to_string());
        }
        if let Some(token) = token {
            self.token = Some(token.to_string());
        }
        if let Some(org) = org {
            self.org = Some(org.to_string());
        }
        self
    }

    pub fn server(&self) -> Option<&str> {
        self.server.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn org(&self) -> Option<&str> {
        self.org.as_deref()
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.server.is_none() && self.token.is_none() && self.org.is_none()
    }

    /// Server and token, or a configuration error naming what is missing
    pub fn require_credentials(&self) -> Result<(&str, &str)> {
        let server = self.server().ok_or_else(|| {
            TfeError::Config(
                "No server configured. Use 'tfectl credentials set' or pass --server".to_string(),
            )
        })?;
        let token = self.token().filter(|t| !t.is_empty()).ok_or_else(|| {
            TfeError::Config(format!(
                "No API token for server '{}'. Use 'tfectl credentials set' or pass --token",
                server
            ))
        })?;
        Ok((server, token))
    }

    /// Organization, or a configuration error
    pub fn require_org(&self) -> Result<&str> {
        self.org().ok_or_else(|| {
            TfeError::Config("No organization configured. Pass --org".to_string())
        })
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("server", &self.server)
            .field("token", &mask_token(self.token.as_deref()))
            .field("org", &self.org)
            .finish()
    }
}

/// Mask a token for display: the last 4 characters, or "<not set>"
pub fn mask_token(token: Option<&str>) -> String {
    match token {
        Some(t) if t.chars().count() >= 4 => {
            let tail: String = t.chars().skip(t.chars().count() - 4).collect();
            format!("****{}", tail)
        }
        Some(_) => "****".to_string(),
        None => "<not set>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> CredentialStore {
        CredentialStore::with_path(dir.path().join("credentials.json"))
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token(Some("abcdefghijklmnop")), "****mnop");
        assert_eq!(mask_token(Some("ab")), "****");
        assert_eq!(mask_token(None), "<not set>");
    }

    #[test]
    fn test_debug_masks_token() {
        let session = Session::new("s1", "super-secret", Some("o1"));
        let debug = format!("{:?}", session);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("****cret"));
    }

    #[test]
    fn test_from_store_empty() {
        let dir = TempDir::new().unwrap();
        let session = Session::from_store(&test_store(&dir));
        assert!(session.is_empty());
    }

    #[test]
    fn test_from_store_uses_first_profile() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.upsert("first", "t1", Some("o1"));
        store.upsert("second", "t2", Some("o2"));

        let session = Session::from_store(&store);
        assert_eq!(session.server(), Some("first"));
        assert_eq!(session.token(), Some("t1"));
        assert_eq!(session.org(), Some("o1"));
    }

    #[test]
    fn test_connect_selects_matching_profile() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.upsert("first", "t1", Some("o1"));
        store.upsert("second", "t2", Some("o2"));

        let session = Session::connect(&store, "second", None, None).unwrap();
        assert_eq!(session.server(), Some("second"));
        assert_eq!(session.token(), Some("t2"));
        assert_eq!(session.org(), Some("o2"));
    }

    #[test]
    fn test_connect_explicit_org_wins() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.upsert("s1", "t1", Some("o1"));

        let session = Session::connect(&store, "s1", Some("other"), None).unwrap();
        assert_eq!(session.org(), Some("other"));
    }

    #[test]
    fn test_connect_unknown_server_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.upsert("s1", "t1", Some("o1"));

        let session = Session::connect(&store, "nope", None, None).unwrap();
        assert!(session.is_empty());
    }

    #[test]
    fn test_connect_vault_requires_org() {
        let dir = TempDir::new().unwrap();
        let vault = ExternalVault::new("true", vec![]);
        let err = Session::connect(&test_store(&dir), "s1", None, Some(&vault)).unwrap_err();
        assert!(matches!(err, TfeError::Config(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_connect_vault_uses_command_token() {
        let dir = TempDir::new().unwrap();
        let vault = ExternalVault::new(
            "sh",
            vec!["-c".to_string(), r#"echo '{"token":"from-vault"}'"#.to_string()],
        );
        let session = Session::connect(&test_store(&dir), "s1", Some("o1"), Some(&vault)).unwrap();
        assert_eq!(session.token(), Some("from-vault"));
        assert_eq!(session.org(), Some("o1"));
    }

    #[test]
    fn test_with_overrides() {
        let session = Session::new("s1", "t1", Some("o1")).with_overrides(
            None,
            Some("t2"),
            Some("o2"),
        );
        assert_eq!(session.server(), Some("s1"));
        assert_eq!(session.token(), Some("t2"));
        assert_eq!(session.org(), Some("o2"));
    }

    #[test]
    fn test_require_credentials() {
        assert!(Session::empty().require_credentials().is_err());

        let no_token = Session::empty().with_overrides(Some("s1"), None, None);
        let err = no_token.require_credentials().unwrap_err();
        assert!(err.to_string().contains("s1"));

        let full = Session::new("s1", "t1", None);
        assert_eq!(full.require_credentials().unwrap(), ("s1", "t1"));
        assert!(full.require_org().is_err());
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.upsert("s1", "abc", Some("o1"));

        let profile = store.find("s1").unwrap();
        assert_eq!(profile.server, "s1");
        assert_eq!(profile.org.as_deref(), Some("o1"));
        assert_eq!(store.reveal(&profile).unwrap(), "abc");
    }
}
