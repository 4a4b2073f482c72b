//! Star Rating
//!
//! Five stars previewing on hover; a click submits the rating and the
//! server's recomputed average becomes the new baseline.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;

use crate::api;
use crate::context::use_page;
use crate::error::RequestError;
use crate::models::RatingReply;
use crate::request_seq::InFlight;
use crate::view_models::{StarRating as RatingModel, StarState, STAR_COUNT};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StarRatingOptions {
    pub url: String,
    pub product_id: u32,
    pub rating: f64,
}

#[component]
pub fn StarRating(options: StarRatingOptions) -> impl IntoView {
    let page = use_page();
    let in_flight = InFlight::new();
    let model = RwSignal::new(RatingModel::new(options.rating));
    let url = StoredValue::new(options.url);
    let product_id = options.product_id;

    let rate = move |star: u8| {
        let ticket = in_flight.begin();
        let url = url.get_value();
        log::debug!("[RATING] Product {} rated {}", product_id, star);

        spawn_local(async move {
            let result: Result<RatingReply, RequestError> = async {
                let csrf = page.csrf()?;
                api::rate_product(&url, &csrf, product_id, star).await
            }
            .await;

            match result {
                Ok(reply) if in_flight.is_current(ticket) => {
                    log::info!("[RATING] Product {} now at {:.1}", product_id, reply.current_rating);
                    model.update(|m| m.commit(reply.current_rating));
                }
                Ok(_) => log::debug!("[RATING] Discarding stale reply"),
                Err(e) => page.report("RATING", e),
            }
        });
    };

    view! {
        <div class="star-rating" on:mouseleave=move |_| model.update(|m| m.hover_leave())>
            {(1..=STAR_COUNT).map(|star| {
                let state = move || model.with(|m| m.star(star));
                view! {
                    <span
                        class="fa fa-star"
                        class:checked=move || state().is_filled()
                        class:preview=move || state() == StarState::PreviewFilled
                        on:mouseenter=move |_| model.update(|m| m.hover_enter(star))
                        on:click=move |_| rate(star)
                    ></span>
                }
            }).collect_view()}
            <span class="current-rating-digits">{move || model.with(|m| m.label())}</span>
        </div>
    }
}
