//! To-Buy List App
//!
//! Root component: owns the store, wires persistence, renders the layout.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ItemListView, NewItemForm};
use crate::storage::{self, BrowserStorage};
use crate::store::{store_initialize, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());

    // Provide context to all children
    provide_context(store);

    // Load the persisted list on mount
    Effect::new(move |_| {
        store_initialize(&store, &BrowserStorage);
        web_sys::console::log_1(
            &format!("[STORE] Loaded {} items", store.items().get_untracked().len()).into(),
        );
    });

    // Save whenever the list changes, once loading is done
    Effect::new(move |_| {
        let items = store.items().get();
        if !store.initialized().get() {
            return;
        }
        storage::save_items(&BrowserStorage, &items);
    });

    let count_line = move || {
        let items = store.items().get();
        let acquired = items.iter().filter(|i| i.acquired).count();
        format!("{} items, {} acquired", items.len(), acquired)
    };

    view! {
        <main class="app-layout">
            <h1>"To-Buy List"</h1>

            <NewItemForm />

            <ItemListView />

            <p class="item-count">{count_line}</p>
        </main>
    }
}
