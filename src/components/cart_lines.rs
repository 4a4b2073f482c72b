//! Cart Lines
//!
//! Product lines of the cart page. Quantity changes and removals go to the
//! server; every figure shown afterwards is the one it returns.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;

use crate::api;
use crate::context::use_page;
use crate::error::RequestError;
use crate::models::CartReply;
use crate::request_seq::InFlight;
use crate::store::{store_line_removed, store_quantity_changed};
use crate::view_models::{CartLine, CartListing};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CartLinesOptions {
    pub update_url: String,
    pub remove_url: String,
    pub lines: Vec<CartLine>,
    pub max_quantity: u32,
    pub continue_label: String,
}

impl Default for CartLinesOptions {
    fn default() -> Self {
        Self {
            update_url: String::new(),
            remove_url: String::new(),
            lines: Vec::new(),
            max_quantity: 10,
            continue_label: "Continue shopping".to_string(),
        }
    }
}

#[component]
pub fn CartLines(options: CartLinesOptions) -> impl IntoView {
    let page = use_page();
    let listing = RwSignal::new(CartListing::new(options.lines));
    // one sequence for the shared totals, whichever line sent the request
    let totals_seq = InFlight::new();
    let update_url = StoredValue::new(options.update_url);
    let remove_url = StoredValue::new(options.remove_url);
    let max_quantity = options.max_quantity.max(1);
    let (prev_url, set_prev_url) = signal(None::<String>);
    let empty_label = page.label(|l| &l.empty_cart);
    let continue_label = options.continue_label;

    view! {
        <Show
            when=move || !listing.with(|l| l.is_empty())
            fallback=move || view! {
                <div class="empty-cart">
                    <p>{empty_label.clone()}</p>
                    {
                        let continue_label = continue_label.clone();
                        move || prev_url.get().map(|url| view! {
                            <a class="continue-shopping" href=url>{continue_label.clone()}</a>
                        })
                    }
                </div>
            }
        >
            <div class="cart-lines">
                <For
                    each=move || listing.with(|l| l.lines().to_vec())
                    key=|line| line.product_id
                    children=move |line| view! {
                        <CartLineRow
                            line=line
                            listing=listing
                            totals_seq=totals_seq
                            update_url=update_url
                            remove_url=remove_url
                            max_quantity=max_quantity
                            set_prev_url=set_prev_url
                        />
                    }
                />
            </div>
        </Show>
    }
}

#[component]
fn CartLineRow(
    line: CartLine,
    listing: RwSignal<CartListing>,
    totals_seq: InFlight,
    update_url: StoredValue<String>,
    remove_url: StoredValue<String>,
    max_quantity: u32,
    set_prev_url: WriteSignal<Option<String>>,
) -> impl IntoView {
    let page = use_page();
    // cost of this line only follows its own latest request
    let line_seq = InFlight::new();
    let product_id = line.product_id;

    let current = move || {
        listing.with(|l| {
            l.lines()
                .iter()
                .find(|x| x.product_id == product_id)
                .map(|x| (x.quantity, x.cost))
        })
    };
    let quantity = move || current().map(|(q, _)| q).unwrap_or(0);
    let cost = move || current().map(|(_, c)| page.price(c)).unwrap_or_default();

    let on_quantity = move |ev: web_sys::Event| {
        let Ok(qty) = event_target_value(&ev).trim().parse::<u32>() else {
            return;
        };
        let line_ticket = line_seq.begin();
        let totals_ticket = totals_seq.begin();
        let url = update_url.get_value();
        log::debug!("[CART] Quantity of {} -> {}", product_id, qty);

        spawn_local(async move {
            let result: Result<CartReply, RequestError> = async {
                let csrf = page.csrf()?;
                api::update_quantity(&url, &csrf, product_id, qty).await
            }
            .await;

            match result {
                Ok(reply) => {
                    if line_seq.is_current(line_ticket) {
                        listing.update(|l| l.set_line(product_id, qty, reply.added_prod_cost));
                    }
                    if totals_seq.is_current(totals_ticket) {
                        store_quantity_changed(&page.shop, &reply);
                    } else {
                        log::debug!("[CART] Stale totals for {} ignored", product_id);
                    }
                }
                Err(e) => page.report("CART", e),
            }
        });
    };

    let on_remove = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let ticket = totals_seq.begin();
        let url = remove_url.get_value();
        log::debug!("[CART] Removing {}", product_id);

        spawn_local(async move {
            let result: Result<CartReply, RequestError> = async {
                let csrf = page.csrf()?;
                api::remove_from_cart(&url, &csrf, product_id).await
            }
            .await;

            match result {
                Ok(reply) => {
                    let emptied = store_line_removed(&page.shop, &reply, totals_seq.is_current(ticket));
                    if reply.prev_url.is_some() {
                        set_prev_url.set(reply.prev_url.clone());
                    }
                    let placeholder = listing
                        .try_update(|l| l.apply_removal(product_id, emptied))
                        .unwrap_or(false);
                    if placeholder {
                        log::info!("[CART] Cart is now empty");
                    }
                }
                Err(e) => page.report("CART", e),
            }
        });
    };

    let upper = max_quantity.max(line.quantity);

    view! {
        <div class="cart-line" id=format!("cart-line-{}", product_id)>
            <a class="cart-line-image" href=line.url.clone()>
                <img src=line.image alt=line.title.clone() />
            </a>
            <a class="cart-line-title" href=line.url>{line.title}</a>
            <select class="cart-line-quantity" on:change=on_quantity>
                {(1..=upper).map(|n| view! {
                    <option value=n.to_string() selected={move || quantity() == n}>{n}</option>
                }).collect_view()}
            </select>
            <span class="cart-line-cost">{cost}</span>
            <button class="cart-remove" on:click=on_remove>
                <span class="material-symbols-outlined">"delete"</span>
            </button>
        </div>
    }
}
