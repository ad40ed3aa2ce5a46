//! Leptos DragDrop Utilities
//!
//! Index-based drag-and-drop for Leptos list views using native HTML5 drag
//! events. The caller wires the returned handlers to `dragstart`, `dragover`,
//! `drop`, and `dragend` on each row and supplies the move callback.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

/// How long a drop highlight lingers before it clears, in milliseconds
const DROP_HIGHLIGHT_MS: i32 = 800;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Position currently being dragged
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    /// Position that most recently received a drop (highlight only)
    pub last_dropped_read: ReadSignal<Option<usize>>,
    pub last_dropped_write: WriteSignal<Option<usize>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (last_dropped_read, last_dropped_write) = signal(None::<usize>);
    DndSignals {
        dragging_read,
        dragging_write,
        last_dropped_read,
        last_dropped_write,
    }
}

/// Create dragstart handler for the row at `index`
///
/// Starting a new drag also clears any lingering drop highlight.
pub fn make_on_dragstart(dnd: DndSignals, index: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        dnd.last_dropped_write.set(None);
        dnd.dragging_write.set(Some(index));
    }
}

/// Create dragover handler
///
/// Suppresses the default "drop rejected" handling so the drop event fires.
pub fn make_on_dragover() -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
    }
}

/// Create drop handler for the row at `index`
///
/// A drop with no drag in progress is ignored. Otherwise the move is
/// reported as `(dragged, index)`, the dragged position is cleared, and
/// `index` is recorded for highlighting.
pub fn make_on_drop<F>(
    dnd: DndSignals,
    index: usize,
    on_move: F,
) -> impl Fn(DragEvent) + Copy + 'static
where
    F: Fn(usize, usize) + Copy + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let Some(from) = dnd.dragging_read.get_untracked() else {
            return;
        };
        on_move(from, index);
        end_drag(&dnd, index);
    }
}

/// Create dragend handler
///
/// Fires after a drop and on cancelled drags; clears a still-pending drag so
/// an aborted gesture cannot affect a later drop.
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.dragging_write.set(None);
        }
    }
}

/// End drag operation
///
/// Records the drop position, then schedules the highlight to clear unless a
/// newer drop has replaced it by then.
pub fn end_drag(dnd: &DndSignals, dropped: usize) {
    dnd.dragging_write.set(None);
    dnd.last_dropped_write.set(Some(dropped));

    if let Some(win) = web_sys::window() {
        let read = dnd.last_dropped_read;
        let write = dnd.last_dropped_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            if read.get_untracked() == Some(dropped) {
                write.set(None);
            }
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            DROP_HIGHLIGHT_MS,
        );
        cb.forget();
    }
}
