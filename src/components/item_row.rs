//! Item Row Component
//!
//! A single draggable row with acquire and remove actions.

use leptos::prelude::*;

use leptos_dragdrop::{
    make_on_dragend, make_on_dragover, make_on_dragstart, make_on_drop, DndSignals,
};

use crate::models::Item;
use crate::store::{store_mark_acquired, store_remove_item, use_app_store};

/// One row of the list
#[component]
pub fn ItemRow(
    index: usize,
    item: Item,
    dnd: DndSignals,
    #[prop(into)] on_move: Callback<(usize, usize)>,
) -> impl IntoView {
    let store = use_app_store();

    let acquired = item.acquired;
    let label = format!("{}. {}", index + 1, item.name);

    // DnD handlers
    let on_dragstart = make_on_dragstart(dnd, index);
    let on_dragover = make_on_dragover();
    let on_drop = make_on_drop(dnd, index, move |from, to| on_move.run((from, to)));
    let on_dragend = make_on_dragend(dnd);

    // Visual state
    let is_dragging = move || dnd.dragging_read.get() == Some(index);
    let just_dropped = move || dnd.last_dropped_read.get() == Some(index);

    let row_class = move || {
        let mut c = String::from("item-row");
        if acquired {
            c.push_str(" acquired");
        }
        if is_dragging() || just_dropped() {
            c.push_str(" highlighted");
        }
        c
    };

    view! {
        <li
            class=row_class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragover=on_dragover
            on:drop=on_drop
            on:dragend=on_dragend
        >
            <span class="item-text">{label}</span>
            <div class="item-actions">
                {(!acquired).then(|| view! {
                    <button
                        class="acquire-btn"
                        on:click=move |_| {
                            if let Err(e) = store_mark_acquired(&store, index) {
                                web_sys::console::warn_1(&format!("[STORE] Mark rejected: {}", e).into());
                            }
                        }
                    >
                        "Bought"
                    </button>
                })}
                <button
                    class="remove-btn"
                    on:click=move |_| {
                        if let Err(e) = store_remove_item(&store, index) {
                            web_sys::console::warn_1(&format!("[STORE] Remove rejected: {}", e).into());
                        }
                    }
                >
                    "Remove"
                </button>
            </div>
        </li>
    }
}
