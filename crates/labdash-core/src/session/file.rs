//! File-backed session store
//!
//! Each session is one JSON object at `<dir>/<session-id>.json`. Reusing the
//! same session ID after a restart picks the values back up; a new ID starts
//! from an empty session.

use super::store::{SessionId, SessionStore};
use crate::error::{DashError, Result};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Session store persisting to a JSON file per session
pub struct FileSessionStore {
    /// Directory holding all session files
    dir: PathBuf,

    /// Session this store reads and writes
    session: SessionId,

    /// Path to this session's file
    path: PathBuf,

    /// Serializes read-modify-write cycles on the file
    lock: Mutex<()>,
}

impl FileSessionStore {
    /// Open the store for `session` under `dir`
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>, session: SessionId) -> Result<Self> {
        validate_session_id(&session)?;
        let dir = dir.into();
        let path = dir.join(format!("{}.json", session.as_str()));

        Ok(Self {
            dir,
            session,
            path,
            lock: Mutex::new(()),
        })
    }

    /// Session this store belongs to
    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// Path to the session file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// End the session by deleting its file
    pub fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DashError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to remove session file: {}", e),
            ))),
        }
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            DashError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read session file: {}", e),
            ))
        })?;

        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(&content)
            .map_err(|e| DashError::storage(format!("Failed to parse session file: {}", e)))?;

        // Values written by hand or by older tools may not be strings
        Ok(raw
            .into_iter()
            .map(|(key, value)| match value {
                serde_json::Value::String(s) => (key, s),
                other => (key, other.to_string()),
            })
            .collect())
    }

    /// Entries to start a write from; an unparsable file is replaced
    fn read_entries_for_write(&self) -> Result<BTreeMap<String, String>> {
        match self.read_entries() {
            Err(DashError::Storage(reason)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %reason,
                    "session file unreadable, starting a fresh one"
                );
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| {
                DashError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create session directory: {}", e),
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(entries)?;

        // Write atomically using temp file
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &content).map_err(|e| {
            DashError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write session file: {}", e),
            ))
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            DashError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to save session file: {}", e),
            ))
        })
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock();
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock();
        let mut entries = self.read_entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock();
        let mut entries = self.read_entries_for_write()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

/// Session IDs become file names, so only a safe alphabet is accepted
fn validate_session_id(session: &SessionId) -> Result<()> {
    let id = session.as_str();
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(DashError::storage(format!("Invalid session id: {:?}", id)))
    }
}
