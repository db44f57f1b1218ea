//! Durable local credential cache.
//!
//! The desktop analogue of the browser's key cache: a small JSON map on
//! disk, read once at startup and written through on every update. State is
//! explicit — callers hold a [`Keystore`] value, there is no ambient global.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clarify_core::{ClarifyError, Result};

/// File-backed map of named secrets.
#[derive(Debug)]
pub struct Keystore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl Keystore {
    /// Platform-local path of the default store:
    /// `<data dir>/clarify/credentials.json`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("clarify")
            .join("credentials.json")
    }

    /// Open the store at its default location.
    pub fn open_default() -> Result<Self> {
        Self::load(Self::default_path())
    }

    /// Read the store from `path`. A missing file is an empty store; an
    /// unreadable or unparsable file is an error (the cache is never
    /// silently dropped).
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                ClarifyError::Keystore(format!("unparsable store at {}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(ClarifyError::Keystore(format!(
                    "cannot read {}: {e}",
                    path.display()
                )));
            },
        };
        Ok(Self { path, entries })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Store a secret and write through to disk.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        self.entries.insert(name.to_owned(), value.to_owned());
        self.persist()
    }

    /// Remove a secret, writing through. Returns whether it existed.
    pub fn forget(&mut self, name: &str) -> Result<bool> {
        let existed = self.entries.remove(name).is_some();
        if existed {
            self.persist()?;
        }
        Ok(existed)
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ClarifyError::Keystore(format!("cannot create {}: {e}", parent.display()))
            })?;
        }

        let raw = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| ClarifyError::Keystore(format!("cannot encode store: {e}")))?;

        // Write-rename so a crash mid-write never truncates the store.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)
            .map_err(|e| ClarifyError::Keystore(format!("cannot write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            ClarifyError::Keystore(format!("cannot replace {}: {e}", self.path.display()))
        })?;

        tracing::debug!(path = %self.path.display(), "keystore written");
        Ok(())
    }
}
