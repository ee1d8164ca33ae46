//! Credential file data models

use serde::{Deserialize, Serialize};

use crate::secret::StoredToken;

/// Top-level credential file: an ordered list of server profiles
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct CredentialFile {
    #[serde(default)]
    pub profiles: Vec<ServerProfile>,
}

/// Stored connection parameters for one server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerProfile {
    /// TFE/HCP host, the identity key of the profile
    pub server: String,
    /// API token in its stored (possibly protected) form
    #[serde(default)]
    pub token: StoredToken,
    /// Default organization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
}

impl CredentialFile {
    /// Position of the profile for `server`, if any
    pub fn position(&self, server: &str) -> Option<usize> {
        self.profiles.iter().position(|p| p.server == server)
    }

    /// Insert or update a profile, keeping one entry per server.
    ///
    /// An existing profile only has its token replaced.
    pub fn upsert(&mut self, profile: ServerProfile) {
        match self.position(&profile.server) {
            Some(idx) => self.profiles[idx].token = profile.token,
            None => self.profiles.push(profile),
        }
    }

    /// Remove the profile for `server`; returns whether one existed
    pub fn remove(&mut self, server: &str) -> bool {
        let before = self.profiles.len();
        self.profiles.retain(|p| p.server != server);
        self.profiles.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(server: &str, token: &str, org: Option<&str>) -> ServerProfile {
        ServerProfile {
            server: server.to_string(),
            token: StoredToken::Plain(token.to_string()),
            org: org.map(|o| o.to_string()),
        }
    }

    #[test]
    fn test_credential_file_default() {
        let file = CredentialFile::default();
        assert!(file.profiles.is_empty());
    }

    #[test]
    fn test_upsert_into_empty() {
        let mut file = CredentialFile::default();
        file.upsert(profile("a", "t1", Some("o1")));
        assert_eq!(file.profiles.len(), 1);
    }

    #[test]
    fn test_upsert_replaces_only_token() {
        let mut file = CredentialFile::default();
        file.upsert(profile("a", "t1", Some("o1")));
        file.upsert(profile("a", "t2", Some("other-org")));

        assert_eq!(file.profiles.len(), 1);
        assert_eq!(file.profiles[0].token, StoredToken::Plain("t2".to_string()));
        assert_eq!(file.profiles[0].org.as_deref(), Some("o1"));
    }

    #[test]
    fn test_upsert_appends_new_server_in_order() {
        let mut file = CredentialFile::default();
        file.upsert(profile("zebra", "t1", None));
        file.upsert(profile("alpha", "t2", None));

        let servers: Vec<&str> = file.profiles.iter().map(|p| p.server.as_str()).collect();
        assert_eq!(servers, vec!["zebra", "alpha"]);
    }

    #[test]
    fn test_remove() {
        let mut file = CredentialFile::default();
        file.upsert(profile("a", "t1", None));
        assert!(file.remove("a"));
        assert!(!file.remove("a"));
        assert!(file.profiles.is_empty());
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut file = CredentialFile::default();
        file.upsert(profile("app.terraform.io", "plain-token", Some("my-org")));
        file.upsert(ServerProfile {
            server: "tfe.corp.com".to_string(),
            token: StoredToken::Protected {
                protected: "AQIDBA==".to_string(),
            },
            org: None,
        });

        let json = serde_json::to_string_pretty(&file).unwrap();
        let parsed: CredentialFile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, file);
    }

    #[test]
    fn test_skip_serializing_missing_org() {
        let mut file = CredentialFile::default();
        file.upsert(profile("a", "t", None));
        let json = serde_json::to_string(&file).unwrap();
        assert!(!json.contains("org"));
    }

    #[test]
    fn test_deserialize_empty_json() {
        let file: CredentialFile = serde_json::from_str("{}").unwrap();
        assert!(file.profiles.is_empty());
    }
}
