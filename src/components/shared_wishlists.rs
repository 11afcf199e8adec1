//! Shared Wishlists Page
//!
//! Wishlists other people have shared with the logged-in user.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, auth_wrapper};
use crate::components::Spinner;
use crate::context::use_app_context;
use crate::models::Wishlist;
use crate::routes::Page;

#[component]
pub fn SharedWishlistsPage() -> impl IntoView {
    let ctx = use_app_context();
    let (wishlists, set_wishlists) = signal(Vec::<Wishlist>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            let Some(result) = auth_wrapper(ctx, api::list_shared()).await else {
                return;
            };
            match result {
                Ok(loaded) => set_wishlists.set(loaded),
                Err(e) => {
                    log::error!("Loading shared wishlists failed: {}", e);
                    set_error.set(Some("We couldn't load the lists shared with you...".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <section class="Shared">
            <h1>"Shared With You"</h1>
            {move || error.get().map(|msg| view! { <p class="Wishlist-error">{msg}</p> })}
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="Wishlist-msg">"Loading..."</p> <Spinner /> }
            >
                <Show when=move || wishlists.with(|lists| lists.is_empty())>
                    <p>"Nobody has shared a wishlist with you yet..."</p>
                </Show>
                <ul class="Wishlists-list">
                    <For
                        each=move || wishlists.get()
                        key=|w| w.id.clone()
                        children=move |w| {
                            let page = Page::SharedWishlist(w.id.clone());
                            let href = page.to_hash();
                            let owner = w.owner.clone().unwrap_or_default();
                            view! {
                                <li class="Wishlists-entry">
                                    <a href=href on:click=move |ev| {
                                        ev.prevent_default();
                                        ctx.navigate(page.clone());
                                    }>
                                        <span class="Wishlists-name">{w.name.clone()}</span>
                                    </a>
                                    <span class="Wishlists-owner">{owner}</span>
                                    <span class="Wishlists-count">{format!("{} items", w.item_count)}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
