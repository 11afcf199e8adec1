//! Wishlists Page
//!
//! The user's own wishlists, a form to start a new one, and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, auth_wrapper};
use crate::components::{removal_prompt, ConfirmButton, Spinner};
use crate::context::use_app_context;
use crate::error::{WISHLIST_CREATE_FAILED, WISHLIST_DELETE_FAILED};
use crate::models::Wishlist;
use crate::routes::Page;
use crate::store::remove_wishlist;

#[component]
pub fn WishlistsPage() -> impl IntoView {
    let ctx = use_app_context();
    let (wishlists, set_wishlists) = signal(Vec::<Wishlist>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (new_name, set_new_name) = signal(String::new());

    // Load wishlists on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(result) = auth_wrapper(ctx, api::list_wishlists()).await else {
                return;
            };
            match result {
                Ok(loaded) => {
                    log::debug!("Loaded {} wishlists", loaded.len());
                    set_wishlists.set(loaded);
                }
                Err(e) => {
                    log::error!("Loading wishlists failed: {}", e);
                    set_error.set(Some(format!("We couldn't load your wishlists ({})", e)));
                }
            }
            set_loading.set(false);
        });
    });

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        spawn_local(async move {
            let Some(result) = auth_wrapper(ctx, api::create_wishlist(&name)).await else {
                return;
            };
            match result {
                Ok(created) => {
                    set_wishlists.update(|lists| lists.push(created));
                    set_new_name.set(String::new());
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Creating wishlist {} failed: {}", name, e);
                    set_error.set(Some(WISHLIST_CREATE_FAILED.to_string()));
                }
            }
        });
    };

    let delete = move |wishlist_id: String| {
        spawn_local(async move {
            let Some(result) = auth_wrapper(ctx, api::delete_wishlist(&wishlist_id)).await else {
                return;
            };
            match result {
                Ok(()) => {
                    set_wishlists.update(|lists| remove_wishlist(lists, &wishlist_id));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Deleting wishlist {} failed: {}", wishlist_id, e);
                    set_error.set(Some(WISHLIST_DELETE_FAILED.to_string()));
                }
            }
        });
    };

    view! {
        <section class="Wishlists">
            <h1>"Your Wishlists"</h1>
            <form class="Wishlists-new" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Name a new wishlist..."
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || new_name.with(|n| n.trim().is_empty())>"Create"</button>
            </form>
            {move || error.get().map(|msg| view! { <p class="Wishlist-error">{msg}</p> })}
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="Wishlist-msg">"Loading..."</p> <Spinner /> }
            >
                <Show when=move || wishlists.with(|lists| lists.is_empty())>
                    <p>"No wishlists yet..."</p>
                </Show>
                <ul class="Wishlists-list">
                    <For
                        each=move || wishlists.get()
                        key=|w| w.id.clone()
                        children=move |w| {
                            let page = Page::Wishlist(w.id.clone());
                            let href = page.to_hash();
                            let id = w.id.clone();
                            let shared = w.shared_with.len();
                            view! {
                                <li class="Wishlists-entry">
                                    <a href=href on:click=move |ev| {
                                        ev.prevent_default();
                                        ctx.navigate(page.clone());
                                    }>
                                        <span class="Wishlists-name">{w.name.clone()}</span>
                                    </a>
                                    <span class="Wishlists-count">{format!("{} items", w.item_count)}</span>
                                    {(shared > 0).then(|| view! {
                                        <span class="Wishlists-shared">{format!("shared with {}", shared)}</span>
                                    })}
                                    <ConfirmButton
                                        label="Delete"
                                        prompt=removal_prompt(&format!("\"{}\" and its wishes", w.name))
                                        class="Wishlists-delete"
                                        on_confirm=move |_: ()| delete(id.clone())
                                    />
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
