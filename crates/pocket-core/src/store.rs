use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::auth::{AuthorizationResult, Authorizer};
use crate::error::{PocketError, Result};

/// Cached [`AuthorizationResult`] for a single account, kept as a small JSON file.
///
/// No expiry is tracked. A cached token is trusted until the service rejects it.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<AuthorizationResult> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(PocketError::NotFound(self.path.clone()))
            }
            Err(err) => return Err(self.corrupt(err.to_string())),
        };
        serde_json::from_str(&contents).map_err(|err| self.corrupt(err.to_string()))
    }

    pub fn save(&self, record: &AuthorizationResult) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.persistence(source))?;
        }
        let contents = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, contents).map_err(|source| self.persistence(source))?;
        debug!(path = %self.path.display(), "saved authorization");
        Ok(())
    }

    /// Removes the record. Clearing an empty store is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "cleared authorization");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.persistence(source)),
        }
    }

    /// Returns the cached record, or runs `authorizer` and caches its result.
    ///
    /// A failed save is logged and otherwise ignored: the fresh token is still
    /// good for this process.
    pub async fn ensure(&self, authorizer: &dyn Authorizer) -> Result<AuthorizationResult> {
        match self.load() {
            Ok(record) => {
                debug!(username = %record.username, "using cached authorization");
                return Ok(record);
            }
            Err(err) if err.triggers_reauthorization() => {
                warn!(error = %err, "authorization required");
            }
            Err(err) => return Err(err),
        }

        let record = authorizer.authorize().await?;
        if let Err(err) = self.save(&record) {
            warn!(error = %err, "authorization obtained but not cached");
        }
        Ok(record)
    }

    fn corrupt(&self, detail: String) -> PocketError {
        PocketError::CorruptRecord {
            path: self.path.clone(),
            detail,
        }
    }

    fn persistence(&self, source: std::io::Error) -> PocketError {
        PocketError::Persistence {
            path: self.path.clone(),
            source,
        }
    }
}
