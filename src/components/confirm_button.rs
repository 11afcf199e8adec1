//! Confirm Button
//!
//! A destructive action that asks before it fires.

use leptos::prelude::*;

/// Text shown while a removal waits for confirmation
pub fn removal_prompt(what: &str) -> String {
    format!("Remove {}?", what)
}

/// Button that swaps itself for a yes/no prompt when clicked
#[component]
pub fn ConfirmButton(
    /// Text of the idle button
    #[prop(into)]
    label: String,
    /// Question shown next to the yes/no buttons
    #[prop(into)]
    prompt: String,
    #[prop(into)] class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let asking = RwSignal::new(false);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || {
                let class = class.clone();
                let label = label.clone();
                view! {
                    <button type="button" class=class on:click=move |_| asking.set(true)>
                        {label}
                    </button>
                }
            }
        >
            <span class="Confirm" role="group">
                <span class="Confirm-prompt">{prompt.clone()}</span>
                <button
                    type="button"
                    class="Confirm-yes"
                    on:click=move |_| {
                        asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button type="button" class="Confirm-no" on:click=move |_| asking.set(false)>
                    "No"
                </button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_prompt() {
        assert_eq!(removal_prompt("Kettle"), "Remove Kettle?");
        assert_eq!(removal_prompt("\"Birthday\" and its wishes"), "Remove \"Birthday\" and its wishes?");
    }
}
