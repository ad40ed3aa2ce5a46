//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The durable list
//! and the transient input text live here; drag state stays in the DnD
//! signals so it is never persisted.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list::{self, ListResult};
use crate::models::Item;
use crate::storage::{self, KeyValueStorage};

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The list, in display order
    pub items: Vec<Item>,
    /// Text in the new-item input, cleared on successful add
    pub pending_input: String,
    /// True once the persisted list has been loaded
    pub initialized: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Operations
// ========================

/// Hydrate the store from persistent storage
///
/// Runs at most once: a second call on an initialized store changes nothing.
/// Saving is gated on the flag this sets, so a save can never overwrite the
/// slot with a not-yet-loaded list.
pub fn store_initialize(store: &AppStore, backend: &dyn KeyValueStorage) {
    if store.initialized().get_untracked() {
        return;
    }
    let loaded = storage::load_items(backend);
    store.items().set(loaded);
    store.initialized().set(true);
}

/// Append a new item and clear the pending input
pub fn store_add_item(store: &AppStore, text: &str) -> ListResult<()> {
    let mut items = store.items().get_untracked();
    list::append_item(&mut items, text)?;
    store.items().set(items);
    store.pending_input().set(String::new());
    Ok(())
}

/// Mark the item at `index` as acquired
pub fn store_mark_acquired(store: &AppStore, index: usize) -> ListResult<()> {
    let mut items = store.items().get_untracked();
    list::mark_acquired(&mut items, index)?;
    store.items().set(items);
    Ok(())
}

/// Remove the item at `index`
pub fn store_remove_item(store: &AppStore, index: usize) -> ListResult<()> {
    let mut items = store.items().get_untracked();
    list::remove_item(&mut items, index)?;
    store.items().set(items);
    Ok(())
}

/// Move the item at `from` so it ends up at position `to`
pub fn store_move_item(store: &AppStore, from: usize, to: usize) -> ListResult<()> {
    let mut items = store.items().get_untracked();
    list::move_item(&mut items, from, to)?;
    store.items().set(items);
    Ok(())
}
