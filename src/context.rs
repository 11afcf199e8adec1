//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::error::ApiError;
use crate::routes::Page;
use crate::session;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Whether a bearer token is held - read
    pub logged_in: ReadSignal<bool>,
    /// Whether a bearer token is held - write
    set_logged_in: WriteSignal<bool>,
    /// Page currently showing - read
    pub page: ReadSignal<Page>,
    /// Page currently showing - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(
        logged_in: (ReadSignal<bool>, WriteSignal<bool>),
        page: (ReadSignal<Page>, WriteSignal<Page>),
    ) -> Self {
        Self {
            logged_in: logged_in.0,
            set_logged_in: logged_in.1,
            page: page.0,
            set_page: page.1,
        }
    }

    /// Show `page` and record it in the location hash
    pub fn navigate(&self, page: Page) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&page.to_hash());
        }
        self.show(page);
    }

    /// Pick up a hash change made outside the app (back button, typed URL)
    pub fn sync_with_location(&self) {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        self.show(Page::from_hash(&hash));
    }

    fn show(&self, page: Page) {
        if self.page.get_untracked() != page {
            self.set_page.set(page);
        }
    }

    /// Keep the token and enter the app
    pub fn login(&self, token: &str) -> Result<(), ApiError> {
        session::store_token(token)?;
        self.set_logged_in.set(true);
        self.navigate(Page::Wishlists);
        Ok(())
    }

    /// Drop the session and return to the login page
    pub fn logout(&self) {
        log::info!("Logging out");
        session::clear();
        self.set_logged_in.set(false);
        self.navigate(Page::Login);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
