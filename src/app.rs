//! Fourth Wish Frontend App
//!
//! Root component: navbar on top, the current page below.

use leptos::prelude::*;

use crate::components::{
    Home, Login, Navbar, NotFound, Profile, Register, SharedWishlistPage, SharedWishlistsPage,
    WishlistPage, WishlistsPage,
};
use crate::context::AppContext;
use crate::routes::Page;
use crate::session;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (logged_in, set_logged_in) = signal(session::is_logged_in());
    let initial_page = window().location().hash().map(|h| Page::from_hash(&h)).unwrap_or(Page::Home);
    let (page, set_page) = signal(initial_page);

    let ctx = AppContext::new((logged_in, set_logged_in), (page, set_page));
    provide_context(ctx);

    // Back/forward buttons and typed URLs
    let _ = window_event_listener(leptos::ev::hashchange, move |_| ctx.sync_with_location());

    // Redirect away from pages the current session can't see
    Effect::new(move |_| {
        let requested = page.get();
        let resolved = requested.clone().resolve(logged_in.get());
        if resolved != requested {
            log::debug!("Redirecting {:?} -> {:?}", requested, resolved);
            ctx.navigate(resolved);
        }
    });

    view! {
        <div class="App">
            <Navbar />
            <main class="App-content">
                {move || match page.get().resolve(logged_in.get()) {
                    Page::Home => view! { <Home /> }.into_any(),
                    Page::Login => view! { <Login /> }.into_any(),
                    Page::Register => view! { <Register /> }.into_any(),
                    Page::Wishlists => view! { <WishlistsPage /> }.into_any(),
                    Page::Wishlist(id) => view! { <WishlistPage wishlist_id=id /> }.into_any(),
                    Page::Shared => view! { <SharedWishlistsPage /> }.into_any(),
                    Page::SharedWishlist(id) => view! { <SharedWishlistPage wishlist_id=id /> }.into_any(),
                    Page::Profile => view! { <Profile /> }.into_any(),
                    Page::NotFound => view! { <NotFound /> }.into_any(),
                }}
            </main>
        </div>
    }
}
