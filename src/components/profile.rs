//! Profile Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, auth_wrapper};
use crate::components::Spinner;
use crate::context::use_app_context;
use crate::models::UserProfile;

#[component]
pub fn Profile() -> impl IntoView {
    let ctx = use_app_context();
    let (profile, set_profile) = signal::<Option<UserProfile>>(None);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            match auth_wrapper(ctx, api::get_profile()).await {
                Some(Ok(loaded)) => set_profile.set(Some(loaded)),
                Some(Err(e)) => {
                    log::error!("Loading profile failed: {}", e);
                    set_error.set(Some("We couldn't load your profile...".to_string()));
                }
                None => {}
            }
        });
    });

    view! {
        <section class="Profile">
            <h1>"Profile"</h1>
            {move || match (profile.get(), error.get()) {
                (_, Some(msg)) => view! { <p class="Wishlist-error">{msg}</p> }.into_any(),
                (Some(p), None) => view! {
                    <dl class="Profile-details">
                        <dt>"Name"</dt>
                        <dd>{p.full_name()}</dd>
                        <dt>"Email"</dt>
                        <dd>{p.email.clone()}</dd>
                    </dl>
                }.into_any(),
                (None, None) => view! { <Spinner /> }.into_any(),
            }}
        </section>
    }
}
