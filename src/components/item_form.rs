//! Item Form Components
//!
//! Name / price / supplier inputs, shared by the new-item form and the
//! inline editor on each item card.

use leptos::prelude::*;

use crate::models::ItemDraft;
use crate::validation::ItemForm;

/// Inputs bound to an `ItemForm` signal
#[component]
pub fn ItemFormFields(form: RwSignal<ItemForm>, id_prefix: String) -> impl IntoView {
    let name_id = format!("{}-name", id_prefix);
    let price_id = format!("{}-price", id_prefix);
    let supplier_id = format!("{}-supplier", id_prefix);

    // Only complain once the user has typed something
    let hint = move || {
        form.with(|f| {
            if f.name.is_empty() && f.price.is_empty() {
                None
            } else {
                f.validate().err().map(|e| e.to_string())
            }
        })
    };

    view! {
        <label for=name_id.clone()>"Name:"</label>
        <input
            type="text"
            id=name_id
            required
            prop:value=move || form.with(|f| f.name.clone())
            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
        />
        <label for=price_id.clone()>"Price:"</label>
        <input
            type="text"
            inputmode="decimal"
            id=price_id
            placeholder="0.00"
            required
            prop:value=move || form.with(|f| f.price.clone())
            on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
        />
        <label for=supplier_id.clone()>"Where to buy:"</label>
        <input
            type="text"
            id=supplier_id
            prop:value=move || form.with(|f| f.supplier.clone())
            on:input=move |ev| form.update(|f| f.supplier = event_target_value(&ev))
        />
        {move || hint().map(|msg| view! { <p class="ItemForm-hint">{msg}</p> })}
    }
}

/// Form for adding an item to the open wishlist
#[component]
pub fn NewItemForm(
    #[prop(into)] create: Callback<ItemDraft>,
    #[prop(into)] cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(ItemForm::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Ok(draft) = form.with(ItemForm::validate) {
            create.run(draft);
            form.set(ItemForm::default());
        }
    };

    view! {
        <form class="NewItemForm" on:submit=on_submit>
            <h2>"New Item"</h2>
            <ItemFormFields form=form id_prefix="new-item".to_string() />
            <div class="NewItemForm-buttons">
                <button type="submit" disabled=move || !form.with(ItemForm::is_valid)>"Create"</button>
                <button type="button" on:click=move |_| cancel.run(())>"Cancel"</button>
            </div>
        </form>
    }
}
