//! Session-scoped key/value stores

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// String key/value storage that lives as long as the browsing session
pub trait SessionStore {
    /// Read a value, `None` if the key was never set
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete a value
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Store that lives as long as the process
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<FxHashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, FxHashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Unavailable("session store lock poisoned".into()))
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// On-disk layout of a session file
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    entries: BTreeMap<String, String>,
}

/// Store persisted as a JSON file
///
/// Survives process restarts, so a session outlives any one run until
/// [`FileSessionStore::end_session`] deletes the file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Open (or lazily create) the session at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// End the session, discarding everything stored in it
    pub fn end_session(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn read(&self) -> StoreResult<SessionFile> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No session file at {}", self.path.display());
                Ok(SessionFile::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, file: &SessionFile) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(file)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.read()?.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut file = self.read()?;
        file.entries.insert(key.to_string(), value.to_string());
        self.write(&file)
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let mut file = self.read()?;
        if file.entries.remove(key).is_some() {
            self.write(&file)?;
        }
        Ok(())
    }
}
