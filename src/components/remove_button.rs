//! Remove Button Component
//!
//! Per-row remove action. Kept out of the keyboard order of the table.

use leptos::prelude::*;

use crate::config::labels;

/// Remove button for one row
///
/// # Arguments
/// * `on_remove` - Callback to execute when the button is clicked
#[component]
pub fn RemoveButton(
    #[prop(into)] on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="remove-btn"
            tabindex="-1"
            on:click=move |ev| {
                ev.stop_propagation();
                on_remove.run(());
            }
        >
            {labels::REMOVE}
        </button>
    }
}
