//! Flat-file credential storage

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::StoreError;

/// The persisted mapping from lowercase username to PHC-format password hash.
pub type CredentialMap = BTreeMap<String, String>;

/// Credential store backed by a single JSON file.
///
/// Usernames are case-folded to lowercase before every lookup or insertion,
/// so `Alice` and `alice` name the same record. The file is read in full per
/// operation and rewritten in full on every mutation; no lock is taken, so
/// concurrent writers can lose an update (last writer wins).
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    /// Create a store bound to the given JSON file path.
    ///
    /// The file does not need to exist yet; an absent file reads as an empty
    /// store and is created on the first successful signup.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing credential file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full credential map from disk.
    ///
    /// An absent, unreadable, or non-JSON file degrades to an empty map
    /// rather than an error, so a corrupt file behaves as "no users".
    pub fn load(&self) -> CredentialMap {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Credential file {} not found, starting empty", self.path.display());
                return CredentialMap::new();
            }
            Err(e) => {
                warn!("Failed to read credential file {}: {}", self.path.display(), e);
                return CredentialMap::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(map) => map,
            Err(e) => {
                warn!(
                    "Credential file {} is not valid JSON ({}), treating as empty",
                    self.path.display(),
                    e
                );
                CredentialMap::new()
            }
        }
    }

    /// Write the full credential map back to disk, pretty-printed.
    ///
    /// The write goes through a temp file in the same directory followed by a
    /// rename, so a crash mid-write leaves the previous file intact. This
    /// does not protect against concurrent writers.
    pub fn save(&self, users: &CredentialMap) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(users)?;

        let parent = self.path.parent().unwrap_or(Path::new("."));
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;

        {
            let mut file = temp_file.as_file();
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }

        temp_file
            .persist(&self.path)
            .map_err(|e| StoreError::Io(e.error))?;

        debug!("Saved {} credential(s) to {}", users.len(), self.path.display());
        Ok(())
    }

    /// Insert a new user, persisting the updated map.
    ///
    /// Fails with [`StoreError::DuplicateUser`] when the case-folded username
    /// already exists; the file is left untouched in that case.
    pub fn insert(&self, username: &str, password_hash: &str) -> Result<(), StoreError> {
        let key = fold_username(username);
        let mut users = self.load();

        if users.contains_key(&key) {
            return Err(StoreError::DuplicateUser(key));
        }

        users.insert(key, password_hash.to_string());
        self.save(&users)
    }

    /// Look up the stored password hash for a username, if any.
    pub fn get(&self, username: &str) -> Option<String> {
        self.load().get(&fold_username(username)).cloned()
    }

    /// Whether a user with this (case-folded) name exists.
    pub fn contains(&self, username: &str) -> bool {
        self.load().contains_key(&fold_username(username))
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.load().len()
    }

    /// Whether the store holds no users.
    pub fn is_empty(&self) -> bool {
        self.load().is_empty()
    }
}

/// Case-fold a username to its storage key.
fn fold_username(username: &str) -> String {
    username.to_lowercase()
}
