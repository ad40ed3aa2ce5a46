//! New Item Form Component
//!
//! Text input plus Add button for appending items to the end of the list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::list::ListError;
use crate::store::{store_add_item, use_app_store, AppStateStoreFields};

/// Form for adding a new item
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = store.pending_input().get_untracked();
        match store_add_item(&store, &text) {
            Ok(()) => {}
            Err(ListError::EmptyName) => {
                // Blocking notice, matching the empty-input validation policy
                if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message("Please enter an item!");
                }
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("[STORE] Add rejected: {}", e).into());
            }
        }
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Enter item"
                prop:value=move || store.pending_input().get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    store.pending_input().set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
