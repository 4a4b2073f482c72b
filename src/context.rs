//! Page Context
//!
//! Shared state provided to every mounted widget via Leptos Context API.

use leptos::prelude::*;

use crate::api;
use crate::config::{Labels, StorefrontConfig};
use crate::dom;
use crate::error::RequestError;
use crate::money::Money;
use crate::store::ShopStore;

/// Page-wide config and store, copied into each widget's context
#[derive(Clone, Copy)]
pub struct PageContext {
    config: StoredValue<StorefrontConfig>,
    /// Cart and favorites figures shared between widgets
    pub shop: ShopStore,
}

impl PageContext {
    pub fn new(config: StorefrontConfig, shop: ShopStore) -> Self {
        Self {
            config: StoredValue::new(config),
            shop,
        }
    }

    /// Anti-forgery token for a mutating request
    pub fn csrf(&self) -> Result<String, RequestError> {
        let cookie = self.config.with_value(|c| c.csrf_cookie.clone());
        api::csrf_token(&cookie)
    }

    pub fn labels(&self) -> Labels {
        self.config.with_value(|c| c.labels.clone())
    }

    /// Read one label
    pub fn label(&self, pick: impl FnOnce(&Labels) -> &String) -> String {
        self.config.with_value(|c| pick(&c.labels).clone())
    }

    pub fn price(&self, amount: Money) -> String {
        self.config.with_value(|c| c.price(amount))
    }

    pub fn payable(&self, amount: Money) -> String {
        self.config.with_value(|c| c.payable(amount))
    }

    /// Route a failed request: unauthorized goes to the login page, the
    /// rest only reaches the console
    pub fn report(&self, tag: &str, error: RequestError) {
        match error.login_url() {
            Some(url) if !url.is_empty() => {
                log::info!("[{}] Unauthorized, redirecting to {}", tag, url);
                dom::navigate(url);
            }
            _ => log::error!("[{}] {}", tag, error),
        }
    }
}

/// Get the page context provided at mount time
pub fn use_page() -> PageContext {
    expect_context::<PageContext>()
}
