//! Session-persisted selection

use super::Selection;
use crate::session::{SessionStore, SessionValue, StorageKey};
use std::sync::Arc;

/// Single source of truth for the active selection
///
/// Reads the persisted value once at construction and writes on every
/// [`set`](Self::set). Writes are best effort: a failure is logged and kept
/// for inspection but never rolls back the in-memory selection.
#[derive(Debug)]
pub struct SelectionStore {
    value: SessionValue,
    current: Selection,
    last_write_error: Option<String>,
}

impl SelectionStore {
    /// Wrap an existing session value
    ///
    /// The loaded selection is written straight back, so the stored record
    /// exists from the first read on. The write-back uses the tagged
    /// encoding: unparsable text and negatives other than `-2` (e.g. `"-3"`)
    /// are stored as `"-1"`, where a plain integer write-back would have kept
    /// them verbatim. `load_raw` reports the normalised value afterwards.
    pub fn new(value: SessionValue) -> Self {
        let mut store = Self {
            current: Selection::default(),
            value,
            last_write_error: None,
        };
        store.current = store.load();
        store.persist();
        store
    }

    /// Store under the dashboard view key with the `-1` default
    pub fn with_store(store: Arc<dyn SessionStore>) -> Self {
        Self::new(SessionValue::new(
            store,
            StorageKey::DashboardView,
            super::WELCOME_RAW.to_string(),
        ))
    }

    /// Read the persisted selection, never fails
    pub fn load(&self) -> Selection {
        Selection::from_raw(self.load_raw())
    }

    /// Read the persisted integer as stored
    pub fn load_raw(&self) -> i64 {
        Selection::decode_raw(Some(self.value.get().as_str()))
    }

    /// In-memory selection
    pub fn current(&self) -> Selection {
        self.current
    }

    /// Change the selection and persist it
    ///
    /// Always writes, even when `selection` equals the current value.
    pub fn set(&mut self, selection: Selection) {
        let previous = self.current;
        self.current = selection;
        tracing::debug!(from = %previous, to = %selection, "selection changed");
        self.persist();
    }

    /// [`set`](Self::set) from the legacy integer encoding
    pub fn set_raw(&mut self, raw: i64) {
        self.set(Selection::from_raw(raw));
    }

    /// Most recent persistence failure, cleared by the next good write
    pub fn last_write_error(&self) -> Option<&str> {
        self.last_write_error.as_deref()
    }

    fn persist(&mut self) {
        match self.value.set(&self.current.encode()) {
            Ok(()) => self.last_write_error = None,
            Err(e) => {
                tracing::warn!(
                    key = %self.value.key(),
                    selection = %self.current,
                    error = %e,
                    "failed to persist selection"
                );
                self.last_write_error = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DashError, Result};
    use crate::session::{FileSessionStore, MemorySessionStore};
    use parking_lot::Mutex;
    use tempfile::TempDir;

    /// Records every write and can be told to fail them
    #[derive(Default)]
    struct RecordingStore {
        writes: Mutex<Vec<String>>,
        initial: Option<String>,
        fail_writes: bool,
    }

    impl SessionStore for RecordingStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(self.writes.lock().last().cloned().or(self.initial.clone()))
        }

        fn set(&self, _key: &str, value: &str) -> Result<()> {
            if self.fail_writes {
                return Err(DashError::storage("quota exceeded"));
            }
            self.writes.lock().push(value.to_string());
            Ok(())
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Ok(())
        }
    }

    fn stored(store: &MemorySessionStore) -> Option<String> {
        store.get(StorageKey::DashboardView.as_str()).unwrap()
    }

    #[test]
    fn test_fresh_session_defaults_to_welcome() {
        let backing = Arc::new(MemorySessionStore::new());
        let store = SelectionStore::with_store(backing.clone());

        assert_eq!(store.current(), Selection::Welcome);
        assert_eq!(stored(&backing).as_deref(), Some("-1"));
    }

    #[test]
    fn test_restores_persisted_value() {
        let backing = Arc::new(MemorySessionStore::new());
        backing.set("dashboard_view", "1").unwrap();

        let store = SelectionStore::with_store(backing);
        assert_eq!(store.current(), Selection::Workspace(1));
        assert_eq!(store.load_raw(), 1);
    }

    #[test]
    fn test_garbage_defaults_to_welcome() {
        let backing = Arc::new(MemorySessionStore::new());
        backing.set("dashboard_view", "not-a-number").unwrap();

        let store = SelectionStore::with_store(backing.clone());
        assert_eq!(store.current(), Selection::Welcome);
        assert_eq!(stored(&backing).as_deref(), Some("-1"));
    }

    #[test]
    fn test_set_persists() {
        let backing = Arc::new(MemorySessionStore::new());
        let mut store = SelectionStore::with_store(backing.clone());

        store.set(Selection::AddWorkspace);
        assert_eq!(store.current(), Selection::AddWorkspace);
        assert_eq!(stored(&backing).as_deref(), Some("-2"));

        store.set_raw(4);
        assert_eq!(store.current(), Selection::Workspace(4));
        assert_eq!(stored(&backing).as_deref(), Some("4"));
    }

    #[test]
    fn test_second_instance_sees_first_instance_writes() {
        let backing = Arc::new(MemorySessionStore::new());
        let mut first = SelectionStore::with_store(backing.clone());
        first.set(Selection::Workspace(2));

        let second = SelectionStore::with_store(backing);
        assert_eq!(second.current(), Selection::Workspace(2));
    }

    #[test]
    fn test_redundant_sets_still_write() {
        let backing = Arc::new(RecordingStore::default());
        let mut store = SelectionStore::with_store(backing.clone());

        store.set(Selection::Workspace(0));
        store.set(Selection::Workspace(0));
        store.set(Selection::Workspace(0));

        assert_eq!(*backing.writes.lock(), vec!["-1", "0", "0", "0"]);
    }

    #[test]
    fn test_writes_follow_transition_order() {
        let backing = Arc::new(RecordingStore::default());
        let mut store = SelectionStore::with_store(backing.clone());

        for raw in [2, -2, -1, 0] {
            store.set_raw(raw);
        }

        assert_eq!(*backing.writes.lock(), vec!["-1", "2", "-2", "-1", "0"]);
    }

    #[test]
    fn test_other_negative_is_normalised_on_construction() {
        let backing = Arc::new(MemorySessionStore::new());
        backing.set("dashboard_view", "-3").unwrap();

        let store = SelectionStore::with_store(backing.clone());
        assert_eq!(store.current(), Selection::Welcome);
        assert_eq!(stored(&backing).as_deref(), Some("-1"));
        assert_eq!(store.load_raw(), -1);
    }

    #[test]
    fn test_recovers_from_mistyped_session_file() {
        let temp_dir = TempDir::new().unwrap();
        let backing = Arc::new(FileSessionStore::new(temp_dir.path(), "s1".into()).unwrap());
        std::fs::write(backing.path(), r#"{"dashboard_view": [1]}"#).unwrap();

        let mut store = SelectionStore::with_store(backing.clone());
        store.set(Selection::AddWorkspace);
        assert_eq!(store.last_write_error(), None);

        let reopened = SelectionStore::with_store(Arc::new(
            FileSessionStore::new(temp_dir.path(), "s1".into()).unwrap(),
        ));
        assert_eq!(reopened.current(), Selection::AddWorkspace);
    }

    #[test]
    fn test_recovers_from_truncated_session_file() {
        let temp_dir = TempDir::new().unwrap();
        let backing = Arc::new(FileSessionStore::new(temp_dir.path(), "s1".into()).unwrap());
        std::fs::write(backing.path(), "{\"dashboard_vi").unwrap();

        let mut store = SelectionStore::with_store(backing);
        assert_eq!(store.current(), Selection::Welcome);
        store.set(Selection::Workspace(2));

        let reopened = SelectionStore::with_store(Arc::new(
            FileSessionStore::new(temp_dir.path(), "s1".into()).unwrap(),
        ));
        assert_eq!(reopened.current(), Selection::Workspace(2));
    }

    #[test]
    fn test_failed_write_keeps_selection() {
        let backing = Arc::new(RecordingStore {
            initial: Some("1".to_string()),
            fail_writes: true,
            ..Default::default()
        });
        let mut store = SelectionStore::with_store(backing);
        assert_eq!(store.current(), Selection::Workspace(1));
        assert!(store.last_write_error().is_some());

        store.set(Selection::AddWorkspace);
        assert_eq!(store.current(), Selection::AddWorkspace);
        assert_eq!(
            store.last_write_error(),
            Some("Storage error: quota exceeded")
        );
    }
}
