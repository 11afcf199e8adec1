//! Item Card Component
//!
//! One wish inside a wishlist, with inline edit and delete.

use leptos::prelude::*;

use crate::components::{removal_prompt, ConfirmButton, ItemFormFields};
use crate::models::{Item, ItemDraft};
use crate::validation::ItemForm;

/// A single item card
#[component]
pub fn ItemCard(
    item: Item,
    #[prop(into)] update: Callback<(String, ItemDraft)>,
    #[prop(into)] remove: Callback<String>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let form = RwSignal::new(ItemForm::from_draft(&ItemDraft::from(&item)));

    let id = item.id.clone();
    let save_id = id.clone();
    let field_prefix = format!("item-{}", id);

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Ok(draft) = form.with(ItemForm::validate) {
            update.run((save_id.clone(), draft));
            set_editing.set(false);
        }
    };

    let reset_form = ItemForm::from_draft(&ItemDraft::from(&item));
    let on_cancel = move |_: web_sys::MouseEvent| {
        form.set(reset_form.clone());
        set_editing.set(false);
    };

    let bought = item.is_bought();
    let price = item.price_label();
    let supplier = item.supplier.clone();
    let name = item.name.clone();

    view! {
        <div class={if bought { "Item bought" } else { "Item" }}>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <div class="Item-details">
                        <h3 class="Item-name">{name.clone()}</h3>
                        <p class="Item-price">{price.clone()}</p>
                        {(!supplier.is_empty()).then(|| view! { <p class="Item-supplier">{supplier.clone()}</p> })}
                        {bought.then(|| view! { <p class="Item-bought">"Someone got this one"</p> })}
                    </div>
                    <div class="Item-actions">
                        <button type="button" class="Item-edit" on:click=move |_| set_editing.set(true)>"Edit"</button>
                        <ConfirmButton
                            label="Remove"
                            prompt=removal_prompt(&name)
                            class="Item-delete"
                            on_confirm={
                                let id = id.clone();
                                move |_: ()| remove.run(id.clone())
                            }
                        />
                    </div>
                }
            >
                <form class="Item-edit-form" on:submit=on_save.clone()>
                    <ItemFormFields form=form id_prefix=field_prefix.clone() />
                    <div class="Item-actions">
                        <button type="submit" disabled=move || !form.with(ItemForm::is_valid)>"Save"</button>
                        <button type="button" on:click=on_cancel.clone()>"Cancel"</button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
