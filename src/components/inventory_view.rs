//! Inventory View Component
//!
//! The whole inventory section: item table plus the add-item form.
//! Owns the transient UI state (form drafts, focus cursor).

use inventory_core::AddForm;
use leptos::prelude::*;
use leptos_rownav::{bind_focus_requests, create_row_nav_signals, request_first_row};

use crate::components::{InventoryTable, NewItemForm};
use crate::config::ROW_ID_PREFIX;
use crate::store::{store_len, store_len_untracked, InventoryStore};

#[component]
pub fn InventoryView(store: InventoryStore) -> impl IntoView {
    let initial_len = store_len_untracked(&store);
    let form = RwSignal::new(AddForm::initial(initial_len));

    let nav = create_row_nav_signals();
    bind_focus_requests(nav, ROW_ID_PREFIX);

    // Start on the first row
    if initial_len > 0 {
        request_first_row(&nav);
    }

    view! {
        <section class="inventory">
            <Show when=move || { store_len(&store) > 0 }>
                <InventoryTable store=store nav=nav />
            </Show>
            <NewItemForm store=store nav=nav form=form />
        </section>
    }
}
