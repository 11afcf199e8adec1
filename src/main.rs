//! Fourth Wish Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod logger;
mod models;
mod routes;
mod session;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init();
    log::info!("Starting Fourth Wish UI");
    mount_to_body(App);
}
