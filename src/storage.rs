//! Persistent Storage
//!
//! A single key-value slot in browser local storage holds the whole list.
//! Access goes through an injected trait so tests can run against an
//! in-memory backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use crate::models::Item;

/// Storage slot for the serialized list
pub const STORAGE_KEY: &str = "rememberList";

/// Result type for storage access
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors surfaced by a storage backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage object is available in this environment
    Unavailable,
    /// The backend rejected the call
    Backend(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "no storage available"),
            StorageError::Backend(msg) => write!(f, "storage backend error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Abstract key-value slot access
///
/// Implementations can use browser local storage, an in-memory map, etc.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Browser `localStorage` backend
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn slot(&self) -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStorage for BrowserStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.slot()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.slot()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{:?}", e)))
    }
}

/// In-memory backend for tests
#[derive(Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load the persisted list
///
/// A missing slot, an unreadable store, and unparseable data all degrade to
/// the empty list so startup never fails.
pub fn load_items(storage: &dyn KeyValueStorage) -> Vec<Item> {
    let raw = match storage.read(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn(&format!("[STORAGE] Read failed: {}", e));
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn(&format!("[STORAGE] Discarding malformed data: {}", e));
            Vec::new()
        }
    }
}

/// Overwrite the persisted slot with the current sequence
pub fn save_items(storage: &dyn KeyValueStorage, items: &[Item]) {
    let serialized = match serde_json::to_string(items) {
        Ok(s) => s,
        Err(e) => {
            warn(&format!("[STORAGE] Serialization failed: {}", e));
            return;
        }
    };
    if let Err(e) = storage.write(STORAGE_KEY, &serialized) {
        warn(&format!("[STORAGE] Write failed: {}", e));
    }
}

#[cfg(target_arch = "wasm32")]
fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn warn(msg: &str) {
    eprintln!("{}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{append_item, mark_acquired, move_item, remove_item};

    #[test]
    fn test_round_trip_preserves_sequence() {
        let storage = MemoryStorage::new();
        let mut items = Vec::new();
        append_item(&mut items, "Milk").unwrap();
        append_item(&mut items, "Bread").unwrap();
        mark_acquired(&mut items, 0).unwrap();

        save_items(&storage, &items);
        assert_eq!(load_items(&storage), items);
    }

    #[test]
    fn test_missing_slot_loads_empty() {
        let storage = MemoryStorage::new();
        assert!(load_items(&storage).is_empty());
    }

    #[test]
    fn test_malformed_data_loads_empty() {
        let storage = MemoryStorage::new();
        storage.write(STORAGE_KEY, "not json").unwrap();
        assert!(load_items(&storage).is_empty());

        storage
            .write(STORAGE_KEY, r#"{"name":"not an array"}"#)
            .unwrap();
        assert!(load_items(&storage).is_empty());
    }

    #[test]
    fn test_save_overwrites_whole_slot() {
        let storage = MemoryStorage::new();
        save_items(&storage, &[Item::new("Milk")]);
        save_items(&storage, &[Item::new("Bread")]);

        let items = load_items(&storage);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Bread");
    }

    #[test]
    fn test_round_trip_after_operation_sequence() {
        let storage = MemoryStorage::new();
        let mut items = Vec::new();
        append_item(&mut items, "Milk").unwrap();
        append_item(&mut items, "Bread").unwrap();
        append_item(&mut items, "Eggs").unwrap();
        mark_acquired(&mut items, 2).unwrap();
        move_item(&mut items, 2, 0).unwrap();
        remove_item(&mut items, 1).unwrap();

        save_items(&storage, &items);
        assert_eq!(load_items(&storage), items);
    }
}
