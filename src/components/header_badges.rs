//! Header Badges
//!
//! Cart and favorites counters in the page header, fed from the shared store.

use leptos::prelude::*;
use serde::Deserialize;

use crate::context::use_page;
use crate::store::ShopStateStoreFields;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CartBadgeOptions {
    pub cart_url: String,
}

/// Cart link with product count and total; inert while the cart is empty
#[component]
pub fn CartBadge(options: CartBadgeOptions) -> impl IntoView {
    let page = use_page();
    let shop = page.shop;

    let total = move || {
        shop.header_total()
            .get()
            .map(|amount| page.payable(amount))
            .unwrap_or_default()
    };

    view! {
        <a
            class="cart-button"
            href=options.cart_url
            class:disabled=move || shop.cart_len().get() == 0
            style:pointer-events={move || if shop.cart_len().get() > 0 { "all" } else { "none" }}
        >
            <span class="material-symbols-outlined">"shopping_cart"</span>
            <span class="amount-cart">{move || shop.cart_len().get()}</span>
            <span class="total-price">{total}</span>
        </a>
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FavoritesBadgeOptions {
    pub favorites_url: String,
}

#[component]
pub fn FavoritesBadge(options: FavoritesBadgeOptions) -> impl IntoView {
    let shop = use_page().shop;

    view! {
        <a class="favorite-button" href=options.favorites_url>
            <span class="material-symbols-outlined">"favorite"</span>
            <span class="amount-favorites">{move || shop.favorites_count().get()}</span>
        </a>
    }
}
