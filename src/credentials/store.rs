//! Credential file I/O

use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::store as store_config;
use crate::error::{Result, TfeError};
use crate::secret::{default_protector, SecretProtector};

use super::models::{CredentialFile, ServerProfile};

/// Reads and writes the credential file, passing tokens through a protector
pub struct CredentialStore {
    path: PathBuf,
    protector: Box<dyn SecretProtector>,
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore {
    /// Create a store at the default path with the platform protector
    pub fn new() -> Self {
        Self::with_path(Self::default_path())
    }

    /// Create a store with a custom path and the platform protector
    pub fn with_path(path: PathBuf) -> Self {
        Self::with_protector(path, default_protector())
    }

    /// Create a store with a custom path and protector
    pub fn with_protector(path: PathBuf, protector: Box<dyn SecretProtector>) -> Self {
        Self { path, protector }
    }

    /// Default path: `$TFECTL_CONFIG_DIR/credentials.json` or `~/.tfectl/credentials.json`
    pub fn default_path() -> PathBuf {
        let dir = match std::env::var(store_config::DIR_ENV_VAR) {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(store_config::DIR_NAME),
        };
        dir.join(store_config::FILE_NAME)
    }

    /// Path of the credential file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the protector in use
    pub fn protection(&self) -> &'static str {
        self.protector.name()
    }

    /// Read the credential file. A missing file is an empty store.
    pub fn read(&self) -> Result<CredentialFile> {
        if !self.path.exists() {
            return Ok(CredentialFile::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            TfeError::Persistence(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            TfeError::Persistence(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    /// Write the whole credential file.
    /// Uses atomic write (tmp file + rename) and creates parent dir if needed.
    pub fn write(&self, file: &CredentialFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TfeError::Persistence(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(file).map_err(|e| {
            TfeError::Persistence(format!("Failed to serialize credentials: {}", e))
        })?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).map_err(|e| {
            TfeError::Persistence(format!("Failed to write {}: {}", tmp_path.display(), e))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, permissions).map_err(|e| {
                TfeError::Persistence(format!(
                    "Failed to set permissions on {}: {}",
                    tmp_path.display(),
                    e
                ))
            })?;
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            TfeError::Persistence(format!(
                "Failed to rename {} to {}: {}",
                tmp_path.display(),
                self.path.display(),
                e
            ))
        })?;

        debug!(
            "Wrote {} profile(s) to {}",
            file.profiles.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Load all profiles in stored order.
    ///
    /// Never fails: an unreadable or corrupt file yields an empty list and a warning.
    pub fn load(&self) -> Vec<ServerProfile> {
        match self.read() {
            Ok(file) => file.profiles,
            Err(e) => {
                warn!("Ignoring credential file: {}", e);
                Vec::new()
            }
        }
    }

    /// Find the profile for `server`
    pub fn find(&self, server: &str) -> Option<ServerProfile> {
        self.load().into_iter().find(|p| p.server == server)
    }

    /// Store a token for `server`.
    ///
    /// A new server is appended with `org`; a known server only has its token
    /// rotated. Returns the resulting profiles, or the unchanged ones (with a
    /// warning) when the token could not be protected or the file written.
    pub fn upsert(&self, server: &str, token: &str, org: Option<&str>) -> Vec<ServerProfile> {
        let current = match self.read() {
            Ok(file) => file,
            Err(e) => {
                warn!("Starting a new credential file: {}", e);
                CredentialFile::default()
            }
        };

        let stored = match self.protector.protect(token) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Credentials for '{}' not saved: {}", server, e);
                return current.profiles;
            }
        };

        if let (Some(existing), Some(requested)) =
            (current.profiles.iter().find(|p| p.server == server), org)
        {
            if existing.org.as_deref() != Some(requested) {
                warn!(
                    "Kept stored organization {} for '{}'; '{}' was ignored (only the token is rotated)",
                    existing.org.as_deref().unwrap_or("<none>"),
                    server,
                    requested
                );
            }
        }

        let mut updated = current.clone();
        updated.upsert(ServerProfile {
            server: server.to_string(),
            token: stored,
            org: org.map(|o| o.to_string()),
        });

        match self.write(&updated) {
            Ok(()) => updated.profiles,
            Err(e) => {
                warn!("Credentials for '{}' not saved: {}", server, e);
                current.profiles
            }
        }
    }

    /// Remove the profile for `server`; returns whether one existed
    pub fn remove(&self, server: &str) -> Result<bool> {
        let mut file = self.read()?;
        let removed = file.remove(server);
        if removed {
            self.write(&file)?;
        }
        Ok(removed)
    }

    /// Delete the credential file
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                TfeError::Persistence(format!("Failed to delete {}: {}", self.path.display(), e))
            })?;
        }
        Ok(())
    }

    /// Recover the plaintext token of a profile
    pub fn reveal(&self, profile: &ServerProfile) -> Result<String> {
        self.protector.unprotect(&profile.token)
    }
}
