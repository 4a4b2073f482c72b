#![allow(warnings)]
//! Storefront UI Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dom;
mod error;
mod models;
mod money;
mod request_seq;
mod store;
mod view_models;

use config::StorefrontConfig;
use context::PageContext;
use store::create_shop_store;

fn main() {
    console_error_panic_hook::set_once();
    // everything passes until the page config has been read
    if let Err(e) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }

    let config = StorefrontConfig::load();
    log::set_max_level(config.log_level().to_level_filter());

    let shop = create_shop_store(&config.seed);
    let page = PageContext::new(config, shop);
    app::mount_widgets(page);
}
