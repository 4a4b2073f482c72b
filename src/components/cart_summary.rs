//! Cart Summary
//!
//! Item count, payable total and the discount breakdown.

use leptos::prelude::*;
use serde::Deserialize;

use crate::context::use_page;
use crate::store::ShopStateStoreFields;
use crate::view_models::product_noun;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CartSummaryOptions {
    pub checkout_url: String,
    pub checkout_label: String,
}

#[component]
pub fn CartSummary(options: CartSummaryOptions) -> impl IntoView {
    let page = use_page();
    let shop = page.shop;
    let labels = StoredValue::new(page.labels());

    let count = move || shop.cart_len().get();
    let noun = move || labels.with_value(|l| product_noun(count(), l).to_string());
    let payable = move || page.payable(shop.totals().get().payable);
    let discount = move || format!("-{}", page.price(shop.totals().get().discount));
    let subtotal = move || page.price(shop.totals().get().subtotal);
    let has_checkout = !options.checkout_url.is_empty();

    view! {
        <div class="block-totals">
            <div class="amount-items">
                <div>
                    <span class="items-count">{count}</span>" "
                    <span class="items-noun">{noun}</span>
                </div>
                <span class="total-price-discounts">{payable}</span>
            </div>
            <Show when=move || shop.show_discounts().get()>
                <div class="discounts-total">
                    <span class="discount-title">{labels.with_value(|l| l.amount_discounts.clone())}</span>
                    <span class="discount-value">{discount}</span>
                </div>
                <div class="without-discounts">
                    <span class="without-title">{labels.with_value(|l| l.without_discounts.clone())}</span>
                    <span class="without-value">{subtotal}</span>
                </div>
            </Show>
            {has_checkout.then(|| view! {
                <a
                    class="checkout-button"
                    href=options.checkout_url
                    class:disabled={move || count() == 0}
                >
                    {options.checkout_label}
                </a>
            })}
        </div>
    }
}
