//! Navbar Component
//!
//! Brand plus links; the link set depends on whether the user is logged in.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Page;

const PRODUCT_NAME: &str = "Fourth Wish";

#[component]
fn NavLink(page: Page, label: &'static str) -> impl IntoView {
    let ctx = use_app_context();
    let href = page.to_hash();
    let target = page.clone();
    let is_active = move || ctx.page.get() == page;

    view! {
        <a
            href=href
            class=move || if is_active() { "active" } else { "" }
            on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate(target.clone());
            }
        >
            {label}
        </a>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="Navbar">
            <div class="logo">
                <a href="#/" class="Navbar-product-name" on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Page::Home);
                }>
                    <span id="Navbar-logo" aria-hidden="true">"🧞"</span>
                    <span class="Navbar-product-name">{PRODUCT_NAME}</span>
                </a>
            </div>
            <Show
                when=move || ctx.logged_in.get()
                fallback=|| view! {
                    <div class="Navbar-links">
                        <NavLink page=Page::Login label="Login" />
                        <NavLink page=Page::Register label="Register" />
                    </div>
                }
            >
                <div class="Navbar-links">
                    <NavLink page=Page::Profile label="Profile" />
                    <NavLink page=Page::Wishlists label="Wishlists" />
                    <NavLink page=Page::Shared label="Shared" />
                </div>
                <button class="Navbar-logout" on:click=move |_| ctx.logout()>"Logout"</button>
            </Show>
        </nav>
    }
}
