//! Inventory Row Component
//!
//! One focusable table row. Handles the arrow and quantity keys for its item.

use inventory_core::{Adjustment, Item};
use leptos::prelude::*;
use leptos_rownav::*;

use crate::components::RemoveButton;
use crate::config::ROW_ID_PREFIX;
use crate::store::{store_adjust_item, store_item, store_len_untracked, store_remove_item, InventoryStore};

/// `(stacks) count/target (target stacks)`
fn collected_cell(item: &Item) -> (String, String, String) {
    (
        format!("({}) ", item.stacks()),
        format!("{}/{}", item.count, item.target_count),
        format!(" ({})", item.target_stacks()),
    )
}

/// `remaining (remaining stacks)`
fn remaining_cell(item: &Item) -> (String, String) {
    (item.remaining().to_string(), format!(" ({})", item.remaining_stacks()))
}

/// A single item row in the table
#[component]
pub fn InventoryRow(
    store: InventoryStore,
    nav: RowNavSignals,
    index: usize,
) -> impl IntoView {
    let item = Memo::new(move |_| store_item(&store, index));

    let on_keydown = make_on_row_keydown(
        nav,
        index,
        move || store_len_untracked(&store),
        move |ev: &web_sys::KeyboardEvent| {
            let ctrl_or_meta = ev.ctrl_key() || ev.meta_key();
            let Some(adjustment) = Adjustment::from_shortcut(&ev.key(), ctrl_or_meta) else { return };
            ev.prevent_default();
            if let Err(err) = store_adjust_item(&store, index, adjustment) {
                log::warn!("[ROW] Ignored {:?} on row {}: {}", adjustment, index, err);
            }
        },
    );
    let on_focus = make_on_row_focus(nav, index);
    let on_blur = make_on_row_blur(nav, index);

    let on_remove = move |_: ()| {
        match store_remove_item(&store, index) {
            Ok(_) => {
                if let Some(target) = focus_after_remove(index, store_len_untracked(&store)) {
                    request_focus(&nav, target);
                }
            }
            Err(err) => log::warn!("[ROW] Ignored remove on row {}: {}", index, err),
        }
    };

    let is_focused = move || nav.focused_read.get() == Some(index);

    view! {
        <tr
            id=row_element_id(ROW_ID_PREFIX, index)
            tabindex="0"
            class=move || if is_focused() { "inventory-item focused" } else { "inventory-item" }
            on:keydown=on_keydown
            on:focus=on_focus
            on:blur=on_blur
        >
            <td>{move || item.get().map(|i| i.name).unwrap_or_default()}</td>
            <td>
                {move || item.get().map(|i| {
                    let (stacks, counts, target_stacks) = collected_cell(&i);
                    view! { {stacks}<strong>{counts}</strong>{target_stacks} }
                })}
            </td>
            <td>
                {move || item.get().map(|i| {
                    let (remaining, remaining_stacks) = remaining_cell(&i);
                    view! { <strong>{remaining}</strong>{remaining_stacks} }
                })}
            </td>
            <td>
                <RemoveButton on_remove=on_remove />
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collected_cell() {
        let item = Item { name: "Wood".into(), count: 32, target_count: 128 };
        let (stacks, counts, target_stacks) = collected_cell(&item);
        assert_eq!(stacks, "(0.5) ");
        assert_eq!(counts, "32/128");
        assert_eq!(target_stacks, " (2)");
    }

    #[test]
    fn test_remaining_cell_over_target() {
        let item = Item { name: "Wood".into(), count: 73, target_count: 64 };
        assert_eq!(remaining_cell(&item), ("-9".to_string(), " (-0.14)".to_string()));
    }
}
