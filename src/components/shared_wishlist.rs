//! Shared Wishlist Page
//!
//! Someone else's wishlist. Items can be marked bought; only whoever
//! bought an item can release it again.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, auth_wrapper};
use crate::components::Spinner;
use crate::context::use_app_context;
use crate::error::BUY_FAILED;
use crate::models::Item;
use crate::routes::Page;
use crate::store::{store_replace_item, WishlistState, WishlistStateStoreFields};

/// What the viewer may do with an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuyAction {
    Buy,
    Release,
    Taken,
}

fn buy_action(item: &Item, viewer: &str) -> BuyAction {
    if !item.is_bought() {
        BuyAction::Buy
    } else if item.bought_by(viewer) {
        BuyAction::Release
    } else {
        BuyAction::Taken
    }
}

#[component]
pub fn SharedWishlistPage(wishlist_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let state = Store::new(WishlistState::new());
    let (viewer, set_viewer) = signal(String::new());
    let wishlist_id = StoredValue::new(wishlist_id);

    Effect::new(move |_| {
        let id = wishlist_id.get_value();
        spawn_local(async move {
            let Some(profile) = auth_wrapper(ctx, api::get_profile()).await else {
                return;
            };
            match profile {
                Ok(profile) => set_viewer.set(profile.email),
                Err(e) => log::warn!("Could not load profile: {}", e),
            }
            let Some(result) = auth_wrapper(ctx, api::get_shared(&id)).await else {
                return;
            };
            match result {
                Ok(wishlist) => {
                    state.wishlist().set(wishlist);
                    let Some(items) = auth_wrapper(ctx, api::list_shared_items(&id)).await else {
                        return;
                    };
                    match items {
                        Ok(items) => state.items().set(items),
                        Err(e) => log::error!("Loading shared items of {} failed: {}", id, e),
                    }
                }
                Err(e) => {
                    log::error!("Loading shared wishlist {} failed: {}", id, e);
                    state.error().set(Some(format!("We couldn't load this wishlist ({})", e)));
                }
            }
            state.loading().set(false);
        });
    });

    let toggle_bought = move |item_id: String, buy: bool| {
        let id = wishlist_id.get_value();
        spawn_local(async move {
            let Some(result) = auth_wrapper(ctx, api::buy_item(&id, &item_id, buy)).await else {
                return;
            };
            match result {
                Ok(item) => {
                    store_replace_item(&state, item);
                    state.error().set(None);
                }
                Err(e) => {
                    log::error!("Marking item {} bought={} failed: {}", item_id, buy, e);
                    state.error().set(Some(BUY_FAILED.to_string()));
                }
            }
        });
    };

    let item_row = move |item: Item| {
        let action = buy_action(&item, &viewer.get());
        let id = item.id.clone();
        view! {
            <div class={if item.is_bought() { "Item bought" } else { "Item" }}>
                <div class="Item-details">
                    <h3 class="Item-name">{item.name.clone()}</h3>
                    <p class="Item-price">{item.price_label()}</p>
                    {(!item.supplier.is_empty()).then(|| view! { <p class="Item-supplier">{item.supplier.clone()}</p> })}
                </div>
                <div class="Item-actions">
                    {match action {
                        BuyAction::Buy => view! {
                            <button type="button" class="Item-buy" on:click=move |_| toggle_bought(id.clone(), true)>"I'll get this"</button>
                        }.into_any(),
                        BuyAction::Release => view! {
                            <button type="button" class="Item-unbuy" on:click=move |_| toggle_bought(id.clone(), false)>"Never mind"</button>
                        }.into_any(),
                        BuyAction::Taken => view! { <span class="Item-taken">"Already bought"</span> }.into_any(),
                    }}
                </div>
            </div>
        }
    };

    let content = move || {
        view! {
            <header class="Wishlist-header">
                <a id="back" href=Page::Shared.to_hash() on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Page::Shared);
                }>
                    <span aria-hidden="true">"← "</span>
                    <span>"Shared Wishlists"</span>
                </a>
                <h1>{move || state.wishlist().with(|w| w.name.clone())}</h1>
                {move || state.wishlist().with(|w| w.owner.clone()).map(|owner| view! { <p>"From " {owner}</p> })}
            </header>
            <div class="Wishlist-content-container">
                {move || state.error().get().map(|msg| view! { <p class="Wishlist-error">{msg}</p> })}
                <Show when=move || state.items().with(|items| items.is_empty())>
                    <p>"No items yet..."</p>
                </Show>
                <div class="Wishlist-items">
                    <For each=move || state.items().get() key=Item::render_key children=item_row />
                </div>
            </div>
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

#[cfg(test)]
mod tests {
    use super::*;

    fn item(gifter: Option<&str>) -> Item {
        Item {
            id: "i".into(),
            name: "Scarf".into(),
            gifter: gifter.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_buy_action() {
        assert_eq!(buy_action(&item(None), "me@mail.com"), BuyAction::Buy);
        assert_eq!(buy_action(&item(Some("me@mail.com")), "me@mail.com"), BuyAction::Release);
        assert_eq!(buy_action(&item(Some("you@mail.com")), "me@mail.com"), BuyAction::Taken);
    }
}
