//! Application State Store
//!
//! Wraps the inventory in a Leptos reactive_stores Store so the view
//! re-renders whenever one of the four operations changes it.

use inventory_core::{Adjustment, Inventory, InventoryResult, Item, NewItem};
use leptos::prelude::*;
use reactive_stores::Store;

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct InventoryState {
    /// Ordered items, display order
    pub inventory: Inventory,
}

impl InventoryState {
    pub fn new(inventory: Inventory) -> Self {
        Self { inventory }
    }
}

/// Type alias for the store
pub type InventoryStore = Store<InventoryState>;

// ========================
// Store Helper Functions
// ========================

/// Number of items (tracked)
pub fn store_len(store: &InventoryStore) -> usize {
    store.inventory().read().len()
}

/// Number of items, without subscribing
pub fn store_len_untracked(store: &InventoryStore) -> usize {
    store.inventory().read_untracked().len()
}

/// Item at `index` (tracked)
pub fn store_item(store: &InventoryStore, index: usize) -> Option<Item> {
    store.inventory().read().get(index).cloned()
}

/// Run `f` against the whole inventory (tracked)
pub fn store_with_inventory<T>(store: &InventoryStore, f: impl FnOnce(&Inventory) -> T) -> T {
    f(&store.inventory().read())
}

/// Append a validated item, returning its index
pub fn store_add_item(store: &InventoryStore, new_item: NewItem) -> usize {
    let name = new_item.name.clone();
    let index = store.inventory().write().insert(new_item);
    log::debug!("[STORE] Added {:?} at {}", name, index);
    index
}

/// Remove the item at `index`, returning it
pub fn store_remove_item(store: &InventoryStore, index: usize) -> InventoryResult<Item> {
    let removed = store.inventory().write().remove_item(index)?;
    log::debug!("[STORE] Removed {:?} from {}", removed.name, index);
    Ok(removed)
}

/// Change the count of the item at `index`, returning the new count
pub fn store_adjust_item(store: &InventoryStore, index: usize, adjustment: Adjustment) -> InventoryResult<u32> {
    let count = store.inventory().write().adjust(index, adjustment)?;
    log::debug!("[STORE] {:?} on {} -> {}", adjustment, index, count);
    Ok(count)
}
