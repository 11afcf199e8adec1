//! Share Form Component
//!
//! Asks for one email address to share the open wishlist with.

use leptos::prelude::*;

use crate::components::ValidityMark;
use crate::validation::ShareForm as ShareFormState;

#[component]
pub fn ShareForm(
    #[prop(into)] share: Callback<String>,
    #[prop(into)] cancel: Callback<()>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let valid = Signal::derive(move || ShareFormState { email: email.get() }.is_valid());
    let empty = Signal::derive(move || email.with(String::is_empty));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !valid.get_untracked() {
            return;
        }
        share.run(email.get_untracked().trim().to_string());
        set_email.set(String::new());
    };

    view! {
        <form class="ShareForm" on:submit=on_submit>
            <label for="share-email">
                "Share with:"
                <ValidityMark valid=valid empty=empty />
            </label>
            <input
                type="email"
                id="share-email"
                placeholder="friend@email.com"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
                aria-invalid=move || if valid.get() { "false" } else { "true" }
            />
            <div class="ShareForm-buttons">
                <button type="submit" disabled=move || !valid.get()>"Share"</button>
                <button type="button" on:click=move |_| cancel.run(())>"Cancel"</button>
            </div>
        </form>
    }
}
