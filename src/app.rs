//! Inventory App
//!
//! Root component: loads the saved inventory, keeps it saved, renders the view.

use inventory_core::Inventory;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::InventoryView;
use crate::persist;
use crate::store::{store_with_inventory, InventoryState};

#[component]
pub fn App() -> impl IntoView {
    let inventory = match persist::load_inventory() {
        Ok(loaded) => {
            log::info!("[APP] Loaded {} items", loaded.len());
            loaded
        }
        Err(err) => {
            log::warn!("[APP] Starting with an empty inventory: {}", err);
            Inventory::default()
        }
    };
    let store = Store::new(InventoryState::new(inventory));

    // Save after every change; the first run only subscribes
    Effect::new(move |previous: Option<()>| {
        store_with_inventory(&store, |inventory| {
            if !persist::should_save(previous) {
                return;
            }
            if let Err(err) = persist::save_inventory(inventory) {
                log::warn!("[PERSIST] Save failed: {}", err);
            }
        });
    });

    view! {
        <main class="inventory-app">
            <InventoryView store=store />
        </main>
    }
}
