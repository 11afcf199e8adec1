use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="Spinner" role="status">
            <div class="Spinner-ring"></div>
        </div>
    }
}
