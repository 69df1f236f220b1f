//! UI Components
//!
//! Leptos components of the inventory view.

mod inventory_view;
mod inventory_table;
mod inventory_row;
mod new_item_form;
mod remove_button;

pub use inventory_view::InventoryView;
pub use inventory_table::InventoryTable;
pub use inventory_row::InventoryRow;
pub use new_item_form::NewItemForm;
pub use remove_button::RemoveButton;
