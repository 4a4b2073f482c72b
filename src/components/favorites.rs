//! Favorites Widgets
//!
//! Product-page add/remove button and the account favorites listing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;

use crate::api;
use crate::context::use_page;
use crate::error::RequestError;
use crate::models::FavoriteReply;
use crate::request_seq::InFlight;
use crate::store::store_set_favorites;
use crate::view_models::{FavoriteAction, FavoriteEntry, FavoriteToggle as ToggleModel, FavoritesListing};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FavoriteToggleOptions {
    pub url: String,
    pub product_id: u32,
    pub favorited: bool,
}

#[component]
pub fn FavoriteToggle(options: FavoriteToggleOptions) -> impl IntoView {
    let page = use_page();
    let in_flight = InFlight::new();
    let model = RwSignal::new(ToggleModel::new(options.favorited));
    let labels = StoredValue::new(page.labels());
    let url = StoredValue::new(options.url);
    let product_id = options.product_id;

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let action = model.with_untracked(|m| m.action());
        let ticket = in_flight.begin();
        let url = url.get_value();

        spawn_local(async move {
            let result: Result<FavoriteReply, RequestError> = async {
                let csrf = page.csrf()?;
                api::set_favorite(&url, &csrf, product_id, action).await
            }
            .await;

            match result {
                Ok(reply) if in_flight.is_current(ticket) => {
                    log::info!("[FAVORITE] {} {} -> {} total", action.as_str(), product_id, reply.amount_prods);
                    model.update(|m| m.confirm(action));
                    store_set_favorites(&page.shop, reply.amount_prods);
                }
                Ok(reply) => {
                    // the count is still the server's latest word
                    store_set_favorites(&page.shop, reply.amount_prods);
                }
                Err(e) => page.report("FAVORITE", e),
            }
        });
    };

    view! {
        <button class="favorite-toggle" on:click=on_click>
            <span class="material-symbols-outlined">
                {move || if model.with(|m| m.action()) == FavoriteAction::Remove { "heart_minus" } else { "heart_plus" }}
            </span>
            <span class="favorite-label">
                {move || labels.with_value(|l| model.with(|m| m.label(l).to_string()))}
            </span>
        </button>
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FavoritesListOptions {
    pub url: String,
    pub products: Vec<FavoriteEntry>,
}

#[component]
pub fn FavoritesList(options: FavoritesListOptions) -> impl IntoView {
    let page = use_page();
    let listing = RwSignal::new(FavoritesListing::new(options.products));
    let url = StoredValue::new(options.url);
    let empty_label = page.label(|l| &l.empty_favorites);

    let remove = move |product_id: u32| {
        let url = url.get_value();
        spawn_local(async move {
            let result: Result<FavoriteReply, RequestError> = async {
                let csrf = page.csrf()?;
                api::set_favorite(&url, &csrf, product_id, FavoriteAction::Remove).await
            }
            .await;

            match result {
                Ok(reply) => {
                    log::info!("[FAVORITE] Removed {}, {} left", product_id, reply.amount_prods);
                    listing.update(|l| l.removed(product_id, reply.amount_prods));
                    store_set_favorites(&page.shop, reply.amount_prods);
                }
                Err(e) => page.report("FAVORITE", e),
            }
        });
    };

    view! {
        <Show
            when=move || !listing.with(|l| l.show_placeholder())
            fallback={move || view! { <p class="empty-favorites">{empty_label.clone()}</p> }}
        >
            <div class="favorites-list">
                <For
                    each=move || listing.with(|l| l.entries().to_vec())
                    key=|entry| entry.product_id
                    children=move |entry| {
                        let product_id = entry.product_id;
                        view! {
                            <div class="favorite-product" id=format!("favorite-{}", product_id)>
                                <a href=entry.url.clone()><img src=entry.image alt=entry.title.clone() /></a>
                                <a class="favorite-title" href=entry.url>{entry.title}</a>
                                <span class="favorite-price">{entry.price}</span>
                                <button class="favorite-remove" on:click=move |_| remove(product_id)>
                                    <span class="material-symbols-outlined">"close"</span>
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
