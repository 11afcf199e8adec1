//! Field validity marker: ✓ when valid, ✗ when filled in but invalid,
//! nothing while the field is empty.

use leptos::prelude::*;

#[component]
pub fn ValidityMark(
    #[prop(into)] valid: Signal<bool>,
    #[prop(into)] empty: Signal<bool>,
) -> impl IntoView {
    view! {
        <span class=move || if valid.get() { "valid" } else { "hide" } aria-hidden="true">"✓"</span>
        <span class=move || if valid.get() || empty.get() { "hide" } else { "invalid" } aria-hidden="true">"✗"</span>
    }
}
