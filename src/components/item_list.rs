//! Item List View Component
//!
//! Displays the list rows with drag-and-drop reordering.

use leptos::prelude::*;

use leptos_dragdrop::create_dnd_signals;

use crate::components::ItemRow;
use crate::store::{store_move_item, use_app_store, AppStateStoreFields};

/// Ordered list of items with DnD reordering
#[component]
pub fn ItemListView() -> impl IntoView {
    let store = use_app_store();

    // Create DnD signals
    let dnd = create_dnd_signals();

    let on_move = Callback::new(move |(from, to): (usize, usize)| {
        web_sys::console::log_1(&format!("[DND] Drop: from={}, to={}", from, to).into());
        if let Err(e) = store_move_item(&store, from, to) {
            web_sys::console::warn_1(&format!("[DND] Move rejected: {}", e).into());
        }
    });

    let rows = move || {
        store
            .items()
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <ul class="item-list">
            <For
                each=rows
                key=|(index, item)| (*index, item.name.clone(), item.acquired)
                children=move |(index, item)| {
                    view! { <ItemRow index=index item=item dnd=dnd on_move=on_move /> }
                }
            />
        </ul>
    }
}
