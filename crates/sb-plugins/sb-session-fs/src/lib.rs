//! # sb-session-fs
//!
//! File-backed implementation of `SessionStore`: one file per key under
//! a state directory. The desktop counterpart of the browser's
//! localStorage entries — visitor id, liked ids, draft.

use async_trait::async_trait;
use sb_core::error::{BoardError, Result};
use sb_core::traits::SessionStore;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

pub struct FsSessionStore {
    /// State directory (e.g., "./data/session"); created on first write.
    root: PathBuf,
}

impl FsSessionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

#[async_trait]
impl SessionStore for FsSessionStore {
    /// A missing file is "value absent", not an error.
    async fn load(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.entry_path(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(BoardError::Session(err.to_string())),
        }
    }

    async fn store(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| BoardError::Session(e.to_string()))?;
        fs::write(self.entry_path(key), value)
            .await
            .map_err(|e| BoardError::Session(e.to_string()))
    }

    /// Removing an absent entry succeeds.
    async fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.entry_path(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(BoardError::Session(err.to_string())),
        }
    }
}
