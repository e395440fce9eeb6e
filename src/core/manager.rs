//! List manager: owns the item list and keeps rows and store in step with it.

use std::io;

use thiserror::Error;

use crate::core::snapshot::{self, SnapshotStatus, TASKS_KEY};
use crate::core::{Item, ItemInput, KeyValueStore, RemoveRequest, RowHandle, Surface};

/// Notification shown when an add is attempted with blank text.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a task!";

/// Errors from list operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ListError {
    /// Add attempted with blank or whitespace-only text.
    #[error("please enter a task")]
    EmptyInput,
    /// Writing the snapshot to the store failed.
    #[error("failed to save tasks: {0}")]
    Persist(#[from] io::Error),
}

/// Result of a remove request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// An item with the row's text was removed and the list persisted.
    Removed,
    /// No item matched; only the row was detached.
    Stale,
}

/// Owns the item list and mirrors it into a [`Surface`] and a [`KeyValueStore`].
#[derive(Debug)]
pub struct ListManager<S: KeyValueStore> {
    store: S,
    key: String,
    items: Vec<Item>,
    initialized: bool,
}

impl<S: KeyValueStore> ListManager<S> {
    /// Create a manager persisting under the default key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, TASKS_KEY)
    }

    /// Create a manager persisting under a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            items: Vec::new(),
            initialized: false,
        }
    }

    /// Load the persisted snapshot and present every recovered item.
    ///
    /// Missing or corrupt snapshots recover to an empty list. Never writes
    /// to the store. Only the first call reads the store, and once the list
    /// has been changed through [`add_item`](Self::add_item) or
    /// [`remove_item`](Self::remove_item) the in-memory list is authoritative
    /// and this does nothing.
    pub fn initialize(&mut self, surface: &mut impl Surface) {
        if self.initialized {
            tracing::debug!("list already initialized, skipping reload");
            return;
        }
        self.initialized = true;

        let stored = match self.store.get(&self.key) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read stored tasks");
                None
            }
        };

        let recovered = snapshot::decode(stored.as_deref());
        match recovered.status {
            SnapshotStatus::Absent => tracing::debug!(key = %self.key, "no stored tasks"),
            SnapshotStatus::Corrupt => {
                tracing::warn!(key = %self.key, "stored tasks are not a list of strings, starting empty")
            }
            SnapshotStatus::Loaded => {
                if recovered.dropped > 0 {
                    tracing::debug!(dropped = recovered.dropped, "skipped blank stored tasks");
                }
                tracing::info!(count = recovered.items.len(), "loaded tasks");
            }
        }

        for item in &recovered.items {
            self.present(surface, item);
        }
        self.items = recovered.items;
    }

    /// Add an item from the input field or from explicit text.
    ///
    /// Blank text raises an alert and returns [`ListError::EmptyInput`]
    /// without touching rows, list or store.
    pub fn add_item(
        &mut self,
        surface: &mut impl Surface,
        input: ItemInput,
    ) -> Result<Item, ListError> {
        self.initialized = true;
        let from_field = input.is_from_field();
        let parsed = match &input {
            ItemInput::FromField => Item::parse(surface.input_value()),
            ItemInput::Explicit(text) => Item::parse(text),
        };

        let Some(item) = parsed else {
            surface.alert(EMPTY_INPUT_MESSAGE);
            return Err(ListError::EmptyInput);
        };

        self.present(surface, &item);
        self.items.push(item.clone());
        let saved = self.persist();

        if from_field {
            surface.clear_input();
        }

        saved?;
        tracing::debug!(count = self.items.len(), "added task");
        Ok(item)
    }

    /// Handle a row's Remove control.
    ///
    /// The row is always detached. The first item equal to the request's
    /// text is removed and the list persisted; with no match nothing is written.
    pub fn remove_item(
        &mut self,
        surface: &mut impl Surface,
        request: &RemoveRequest,
    ) -> Result<RemoveOutcome, ListError> {
        self.initialized = true;
        if !surface.remove_row(request.handle) {
            tracing::debug!(handle = request.handle.get(), "row already detached");
        }

        let Some(idx) = self
            .items
            .iter()
            .position(|item| item.as_str() == request.text)
        else {
            tracing::debug!(text = %request.text, "stale removal, list unchanged");
            return Ok(RemoveOutcome::Stale);
        };

        self.items.remove(idx);
        self.persist()?;
        tracing::debug!(count = self.items.len(), "removed task");
        Ok(RemoveOutcome::Removed)
    }

    /// Append a removable row for `item` to the end of the projection.
    pub fn present(&self, surface: &mut impl Surface, item: &Item) -> RowHandle {
        surface.append_row(item.as_str())
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Store key the list is persisted under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write the full list to the store.
    fn persist(&mut self) -> io::Result<()> {
        let _timer = crate::metrics::Timer::start_counted("persist", self.items.len());
        let encoded = snapshot::encode(&self.items);
        if let Err(e) = self.store.set(&self.key, &encoded) {
            tracing::error!(key = %self.key, error = %e, "failed to persist tasks");
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MemoryStore, VisualList};

    fn texts(manager: &ListManager<MemoryStore>) -> Vec<&str> {
        manager.items().iter().map(Item::as_str).collect()
    }

    fn stored(manager: &ListManager<MemoryStore>) -> Option<String> {
        manager.store().get(TASKS_KEY).unwrap()
    }

    #[test]
    fn initialize_fresh_store() {
        let mut surface = VisualList::new();
        let mut manager = ListManager::new(MemoryStore::new());
        manager.initialize(&mut surface);

        assert!(manager.is_empty());
        assert!(surface.is_empty());
        assert_eq!(manager.store().writes(), 0);
    }

    #[test]
    fn initialize_reads_once() {
        let mut surface = VisualList::new();
        let mut manager = ListManager::new(MemoryStore::with_entry(TASKS_KEY, r#"["X"]"#));
        manager.initialize(&mut surface);
        manager.initialize(&mut surface);

        assert_eq!(surface.texts(), vec!["X"]);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn initialize_after_add_keeps_rows_in_step() {
        let mut surface = VisualList::new();
        let mut manager = ListManager::new(MemoryStore::new());
        manager.add_item(&mut surface, ItemInput::explicit("A")).unwrap();
        manager.initialize(&mut surface);

        assert_eq!(surface.texts(), vec!["A"]);
        assert_eq!(texts(&manager), vec!["A"]);
    }

    #[test]
    fn initialize_after_remove_is_noop() {
        let mut surface = VisualList::new();
        let mut manager = ListManager::new(MemoryStore::with_entry(TASKS_KEY, r#"["X"]"#));
        let req = RemoveRequest {
            handle: surface.append_row("X"),
            text: "X".to_string(),
        };
        // Nothing loaded yet, so the removal finds no item.
        assert_eq!(
            manager.remove_item(&mut surface, &req).unwrap(),
            RemoveOutcome::Stale
        );
        manager.initialize(&mut surface);

        assert!(surface.is_empty());
        assert!(manager.is_empty());
    }

    struct UnreadableStore {
        writes: usize,
    }

    impl KeyValueStore for UnreadableStore {
        fn get(&self, _key: &str) -> io::Result<Option<String>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }

        fn set(&mut self, _key: &str, _value: &str) -> io::Result<()> {
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn initialize_unreadable_store_recovers_silently() {
        let mut surface = VisualList::new();
        let mut manager = ListManager::new(UnreadableStore { writes: 0 });
        manager.initialize(&mut surface);

        assert!(manager.is_empty());
        assert!(surface.is_empty());
        assert_eq!(surface.pending_alert(), None);
        assert_eq!(manager.store().writes, 0);
    }

    #[test]
    fn initialize_corrupt_recovers_silently() {
        let mut surface = VisualList::new();
        let mut manager = ListManager::new(MemoryStore::with_entry(TASKS_KEY, "{oops"));
        manager.initialize(&mut surface);

        assert!(manager.is_empty());
        assert_eq!(surface.pending_alert(), None);
        assert_eq!(manager.store().writes(), 0);
    }

    #[test]
    fn add_explicit_leaves_field() {
        let mut surface = VisualList::new();
        surface.set_input("draft");
        let mut manager = ListManager::new(MemoryStore::new());

        let item = manager
            .add_item(&mut surface, ItemInput::explicit("  Buy milk "))
            .unwrap();

        assert_eq!(item.as_str(), "Buy milk");
        assert_eq!(surface.input(), "draft");
        assert_eq!(stored(&manager).as_deref(), Some(r#"["Buy milk"]"#));
    }

    #[test]
    fn add_from_field_clears_field() {
        let mut surface = VisualList::new();
        surface.set_input(" Z ");
        let mut manager = ListManager::new(MemoryStore::new());

        manager.add_item(&mut surface, ItemInput::FromField).unwrap();

        assert_eq!(surface.input(), "");
        assert_eq!(texts(&manager), vec!["Z"]);
    }

    #[test]
    fn add_blank_alerts() {
        let mut surface = VisualList::new();
        surface.set_input("   ");
        let mut manager = ListManager::new(MemoryStore::new());

        let err = manager.add_item(&mut surface, ItemInput::FromField).unwrap_err();

        assert!(matches!(err, ListError::EmptyInput));
        assert_eq!(surface.take_alert().as_deref(), Some(EMPTY_INPUT_MESSAGE));
        assert_eq!(surface.input(), "   ");
        assert!(surface.is_empty());
        assert_eq!(manager.store().writes(), 0);
    }

    #[test]
    fn remove_first_duplicate() {
        let mut surface = VisualList::new();
        let mut manager = ListManager::new(MemoryStore::new());
        for text in ["a", "b", "a"] {
            manager.add_item(&mut surface, ItemInput::explicit(text)).unwrap();
        }

        let req = surface.row(2).unwrap().remove_request();
        let outcome = manager.remove_item(&mut surface, &req).unwrap();

        assert_eq!(outcome, RemoveOutcome::Removed);
        assert_eq!(surface.texts(), vec!["a", "b"]);
        assert_eq!(texts(&manager), vec!["b", "a"]);
        assert_eq!(stored(&manager).as_deref(), Some(r#"["b","a"]"#));
    }

    #[test]
    fn remove_stale_does_not_write() {
        let mut surface = VisualList::new();
        let mut manager = ListManager::new(MemoryStore::new());
        manager.add_item(&mut surface, ItemInput::explicit("a")).unwrap();
        let writes = manager.store().writes();

        let req = RemoveRequest {
            handle: surface.row(0).unwrap().handle,
            text: "gone".to_string(),
        };
        let outcome = manager.remove_item(&mut surface, &req).unwrap();

        assert_eq!(outcome, RemoveOutcome::Stale);
        assert!(surface.is_empty());
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.store().writes(), writes);
    }

    #[test]
    fn custom_key() {
        let mut surface = VisualList::new();
        let mut manager = ListManager::with_key(MemoryStore::new(), "groceries");
        manager.add_item(&mut surface, ItemInput::explicit("eggs")).unwrap();

        assert_eq!(manager.key(), "groceries");
        assert_eq!(
            manager.store().get("groceries").unwrap().as_deref(),
            Some(r#"["eggs"]"#)
        );
        assert_eq!(stored(&manager), None);
    }
}
