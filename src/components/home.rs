//! Landing and fallback pages

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Page;

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_app_context();
    let go = move |page: Page| {
        move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            ctx.navigate(page.clone());
        }
    };

    view! {
        <section class="Home">
            <h1>"Fourth Wish"</h1>
            <p>"Make a list, share it with the people who shop for you, and never get two toasters again."</p>
            <Show
                when=move || ctx.logged_in.get()
                fallback=move || view! {
                    <p class="Home-links">
                        <a href=Page::Login.to_hash() on:click=go(Page::Login)>"Login"</a>
                        " or "
                        <a href=Page::Register.to_hash() on:click=go(Page::Register)>"Register"</a>
                    </p>
                }
            >
                <p class="Home-links">
                    <a href=Page::Wishlists.to_hash() on:click=go(Page::Wishlists)>"Go to your wishlists"</a>
                </p>
            </Show>
        </section>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="NotFound">
            <h1>"Nothing here"</h1>
            <a href=Page::Home.to_hash() on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate(Page::Home);
            }>"Back home"</a>
        </section>
    }
}
