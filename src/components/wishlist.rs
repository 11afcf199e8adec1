//! Wishlist Page
//!
//! One owned wishlist: its items, the new-item form and the share form.
//! Every call goes through `auth_wrapper`, so an expired session sends the
//! user back to the login page.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, auth_wrapper};
use crate::components::{ItemCard, NewItemForm, ShareForm, Spinner};
use crate::context::use_app_context;
use crate::error::{self, ITEM_CREATE_FAILED, ITEM_DELETE_FAILED, ITEM_UPDATE_FAILED};
use crate::models::{Item, ItemDraft, WishlistUpdate};
use crate::routes::Page;
use crate::store::{
    store_add_item, store_add_shared_email, store_remove_item, store_replace_item, WishlistState,
    WishlistStateStoreFields,
};

/// How long share feedback stays on screen
const FEEDBACK_MS: u32 = 3_000;

fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

#[component]
pub fn WishlistPage(wishlist_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let state = Store::new(WishlistState::new());
    let wishlist_id = StoredValue::new(wishlist_id);

    // Load the wishlist, then its items
    Effect::new(move |_| {
        let id = wishlist_id.get_value();
        spawn_local(async move {
            // None means the session expired and the page is already gone
            let Some(result) = auth_wrapper(ctx, api::get_wishlist(&id)).await else {
                return;
            };
            match result {
                Ok(wishlist) => {
                    state.wishlist().set(wishlist);
                    let Some(items) = auth_wrapper(ctx, api::list_items(&id)).await else {
                        return;
                    };
                    match items {
                        Ok(items) => state.items().set(items),
                        Err(e) => log::error!("Loading items of {} failed: {}", id, e),
                    }
                }
                Err(e) => {
                    log::error!("Loading wishlist {} failed: {}", id, e);
                    state.error().set(Some(format!("We couldn't load this wishlist ({})", e)));
                }
            }
            state.loading().set(false);
        });
    });

    let update = Callback::new(move |(item_id, draft): (String, ItemDraft)| {
        let id = wishlist_id.get_value();
        spawn_local(async move {
            if let Some(result) = auth_wrapper(ctx, api::update_item(&id, &item_id, &draft)).await {
                match result {
                    Ok(item) => {
                        store_replace_item(&state, item);
                        state.error().set(None);
                    }
                    Err(e) => {
                        log::error!("Updating item {} failed: {}", item_id, e);
                        state.error().set(Some(ITEM_UPDATE_FAILED.to_string()));
                    }
                }
            }
        });
    });

    let remove = Callback::new(move |item_id: String| {
        let id = wishlist_id.get_value();
        spawn_local(async move {
            if let Some(result) = auth_wrapper(ctx, api::delete_item(&id, &item_id)).await {
                match result {
                    Ok(()) => {
                        store_remove_item(&state, &item_id);
                        state.error().set(None);
                    }
                    Err(e) => {
                        log::error!("Deleting item {} failed: {}", item_id, e);
                        state.error().set(Some(ITEM_DELETE_FAILED.to_string()));
                    }
                }
            }
        });
    });

    let create = Callback::new(move |draft: ItemDraft| {
        let id = wishlist_id.get_value();
        spawn_local(async move {
            if let Some(result) = auth_wrapper(ctx, api::create_item(&id, &draft)).await {
                match result {
                    Ok(item) => {
                        log::info!("Created item {} in {}", item.id, id);
                        store_add_item(&state, item);
                        state.error().set(None);
                    }
                    Err(e) => {
                        log::error!("Creating item failed: {}", e);
                        state.error().set(Some(ITEM_CREATE_FAILED.to_string()));
                    }
                }
            }
        });
    });

    let share = Callback::new(move |email: String| {
        let id = wishlist_id.get_value();
        spawn_local(async move {
            let update = WishlistUpdate::share_with(&email);
            if let Some(result) = auth_wrapper(ctx, api::update_wishlist(&id, &update)).await {
                match result {
                    Ok(_) => {
                        store_add_shared_email(&state, &email);
                        state.feedback().set(Some(error::share_added_message(&email)));
                        TimeoutFuture::new(FEEDBACK_MS).await;
                        state.feedback().set(None);
                    }
                    Err(e) => {
                        log::error!("Sharing {} with {} failed: {}", id, email, e);
                        state.error().set(Some(error::share_failed_message(&email)));
                        TimeoutFuture::new(FEEDBACK_MS).await;
                        state.error().set(None);
                    }
                }
            }
        });
    });

    let show_item_form = move |_: web_sys::MouseEvent| {
        scroll_to_top();
        state.creating().set(true);
    };
    let show_share_form = move |_: web_sys::MouseEvent| {
        scroll_to_top();
        state.sharing().set(true);
    };

    let content = move || {
        view! {
            <header class="Wishlist-header">
                <a id="back" href=Page::Wishlists.to_hash() on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Page::Wishlists);
                }>
                    <span aria-hidden="true">"← "</span>
                    <span>"All Wishlists"</span>
                </a>
                <h1>{move || state.wishlist().with(|w| w.name.clone())}</h1>
                {move || state.wishlist().with(|w| w.shared_label()).map(|label| view! { <p>{label}</p> })}
            </header>
            <div class="Wishlist-content-container">
                <Show when=move || state.sharing().get()>
                    <ShareForm share=share cancel=move |_: ()| state.sharing().set(false) />
                </Show>
                {move || state.error().get().map(|msg| view! { <p class="Wishlist-error">{msg}</p> })}
                {move || state.feedback().get().map(|msg| view! { <p class="Wishlist-feedback">{msg}</p> })}
                <Show when=move || state.items().with(|items| items.is_empty())>
                    <p>"No items yet..."</p>
                </Show>
                <Show when=move || state.creating().get()>
                    <NewItemForm create=create cancel=move |_: ()| state.creating().set(false) />
                </Show>
                <Show when=move || state.items().with(|items| !items.is_empty())>
                    <div class="Wishlist-items">
                        <For
                            each=move || state.items().get()
                            key=Item::render_key
                            children=move |item| view! { <ItemCard item=item update=update remove=remove /> }
                        />
                    </div>
                </Show>
            </div>
            <button id="Wishlist-share-button" on:click=show_share_form>"Share"</button>
            <button id="Wishlist-new-button" on:click=show_item_form>"New Item"</button>
        }
    };

    view! {
        <div class="Wishlist">
            <div class="Wishlist-container">
                <Show
                    when=move || state.loading().get()
                    fallback=content
                >
                    <div>
                        <p class="Wishlist-msg">"Loading..."</p>
                        <Spinner />
                    </div>
                </Show>
            </div>
        </div>
    }
}
