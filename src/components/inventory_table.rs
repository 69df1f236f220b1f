//! Inventory Table Component
//!
//! Displays the items as a table, one focusable row per item.

use leptos::prelude::*;
use leptos_rownav::RowNavSignals;

use crate::components::InventoryRow;
use crate::config::labels;
use crate::store::{store_len, InventoryStore};

#[component]
pub fn InventoryTable(
    store: InventoryStore,
    nav: RowNavSignals,
) -> impl IntoView {
    // Rows are keyed by position; each row reads its item reactively,
    // so a count change updates cells without replacing the focused <tr>
    let row_indices = move || (0..store_len(&store)).collect::<Vec<_>>();

    view! {
        <table class="inventory-items">
            <thead>
                <tr>
                    <th>{labels::NAME_HEADER}</th>
                    <th>{labels::COLLECTED_HEADER}</th>
                    <th>{labels::REMAINING_HEADER}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=row_indices
                    key=|index| *index
                    children=move |index| view! {
                        <InventoryRow store=store nav=nav index=index />
                    }
                />
            </tbody>
        </table>
    }
}
