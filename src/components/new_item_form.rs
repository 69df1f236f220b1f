//! New Item Form Component
//!
//! Toggleable form for appending an item: name plus target count.
//! When hidden only the "add" button is shown.

use inventory_core::AddForm;
use leptos::prelude::*;
use leptos_rownav::{request_first_row, RowNavSignals};

use crate::config::{error_message, labels};
use crate::store::{store_add_item, InventoryStore};

/// Add-item form, or the button that opens it
#[component]
pub fn NewItemForm(
    store: InventoryStore,
    nav: RowNavSignals,
    form: RwSignal<AddForm>,
) -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(result) = form.try_update(AddForm::submit) else { return };
        match result {
            Ok(new_item) => {
                log::info!("[FORM] Adding {:?} (target {})", new_item.name, new_item.target_count);
                store_add_item(&store, new_item);
                request_first_row(&nav);
            }
            Err(err) => log::warn!("[FORM] Rejected new item: {}", err),
        }
    };

    let on_cancel = move |_: web_sys::MouseEvent| {
        form.update(AddForm::cancel);
        request_first_row(&nav);
    };

    let error_text = move || form.with(|f| f.error().map(error_message));

    view! {
        <Show
            when=move || form.with(AddForm::is_visible)
            fallback=move || view! {
                <button
                    type="button"
                    class="button"
                    aria-label=labels::ADD
                    on:click=move |_| form.update(AddForm::open)
                >
                    {labels::ADD}
                </button>
            }
        >
            <form class="new-item-form" on:submit=on_submit>
                <div class="add-form">
                    <label for="new-item-name" class="label">{labels::NAME_FIELD}</label>
                    <input
                        type="text"
                        id="new-item-name"
                        class="textfield"
                        prop:value=move || form.with(|f| f.name().to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.set_name(value));
                        }
                    />
                    <label for="new-item-target-number" class="label">{labels::TARGET_FIELD}</label>
                    <input
                        type="number"
                        id="new-item-target-number"
                        class="textfield"
                        min="0"
                        prop:value=move || form.with(|f| f.target_count().to_string())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.set_target_count(value));
                        }
                    />
                    <button type="button" class="button" on:click=on_cancel>{labels::CANCEL}</button>
                    <button type="submit" class="button">{labels::SAVE}</button>
                </div>
                {move || error_text().map(|msg| view! { <p class="form-error">{msg}</p> })}
            </form>
        </Show>
    }
}
