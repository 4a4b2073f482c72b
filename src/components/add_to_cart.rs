//! Add To Cart Button
//!
//! Quantity picker plus button on listings and the product page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;

use crate::api;
use crate::context::use_page;
use crate::error::RequestError;
use crate::models::CartReply;
use crate::store::{store_begin_add, store_cart_added};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AddToCartOptions {
    pub url: String,
    pub product_id: u32,
    pub quantity: u32,
    /// 0 hides the quantity picker
    pub max_quantity: u32,
    pub label: String,
}

impl Default for AddToCartOptions {
    fn default() -> Self {
        Self {
            url: String::new(),
            product_id: 0,
            quantity: 1,
            max_quantity: 0,
            label: "Add to cart".to_string(),
        }
    }
}

#[component]
pub fn AddToCart(options: AddToCartOptions) -> impl IntoView {
    let page = use_page();
    let url = StoredValue::new(options.url);
    let product_id = options.product_id;
    let max_quantity = options.max_quantity;
    let (quantity, set_quantity) = signal(options.quantity.max(1));

    let add = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();

        let ticket = store_begin_add(&page.shop);
        let qty = quantity.get_untracked();
        let url = url.get_value();
        log::debug!("[CART] Adding product {} x{}", product_id, qty);

        spawn_local(async move {
            let result: Result<CartReply, RequestError> = async {
                let csrf = page.csrf()?;
                api::add_to_cart(&url, &csrf, product_id, qty).await
            }
            .await;

            match result {
                Ok(reply) => {
                    if store_cart_added(&page.shop, &reply, ticket) {
                        log::info!("[CART] Product {} added, cart has {}", product_id, reply.cart_len);
                    } else {
                        log::debug!("[CART] Discarding stale add reply for {}", product_id);
                    }
                }
                Err(e) => page.report("CART", e),
            }
        });
    };

    view! {
        <div class="add-to-cart">
            <Show when=move || { max_quantity > 0 }>
                <input
                    type="number"
                    class="cart-quantity"
                    min="1"
                    max=max_quantity.to_string()
                    prop:value=move || quantity.get().to_string()
                    on:change=move |ev| {
                        if let Ok(q) = event_target_value(&ev).trim().parse::<u32>() {
                            set_quantity.set(q.clamp(1, max_quantity));
                        }
                    }
                />
            </Show>
            <button class="add-cart-button" on:click=add>
                <span class="material-symbols-outlined">"add_shopping_cart"</span>
                {options.label}
            </button>
        </div>
    }
}
