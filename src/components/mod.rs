//! UI Components
//!
//! Reusable Leptos components.

mod item_list;
mod item_row;
mod new_item_form;

pub use item_list::ItemListView;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
