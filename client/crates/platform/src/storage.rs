//! Persisted local key-value store
//!
//! The console's stand-in for browser localStorage: one file per key
//! under the configured state directory. Three keys are in use:
//! `token`, `userData` (serialized session bundle) and `darkMode`.
//!
//! Values are opaque strings; whether they parse is the caller's concern.

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use kernel::error::app_error::{AppError, AppResult};

/// Well-known storage keys
pub mod keys {
    /// Bearer token for the REST backend
    pub const TOKEN: &str = "token";
    /// Serialized user/application/roles/menu bundle
    pub const USER_DATA: &str = "userData";
    /// Theme preference, boolean-as-string
    pub const DARK_MODE: &str = "darkMode";
}

/// File-backed string store
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open (and create if missing) a store rooted at `dir`
    pub fn open(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(AppError::from)?;
        Ok(Self { dir })
    }

    /// Read a key; a missing key is `Ok(None)`
    pub fn get(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::from(e)),
        }
    }

    /// Write a key
    pub fn set(&self, key: &str, value: &str) -> AppResult<()> {
        fs::write(self.path_for(key)?, value).map_err(AppError::from)
    }

    /// Remove a key; removing a missing key is not an error
    pub fn remove(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::from(e)),
        }
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        // Keys are fixed identifiers; anything path-like is a programming
        // error upstream, rejected rather than sanitized.
        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::bad_request(format!("Invalid storage key: {key:?}")));
        }
        Ok(self.dir.join(key))
    }

    /// Directory backing this store
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
