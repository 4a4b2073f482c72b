//! Price Filter
//!
//! Min / max price inputs with arrows that step by ten while held.
//! Values never leave the range the inputs held at page load.

use leptos::prelude::*;
use leptos_pointer::{bind_document_release, make_on_hold, make_on_release, HoldRepeat};
use serde::Deserialize;

use crate::money::Money;
use crate::view_models::{next_price, PriceBounds, StepDirection};

/// Milliseconds between steps while an arrow is held
const REPEAT_MS: u32 = 300;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PriceFilterOptions {
    pub min: Money,
    pub max: Money,
    pub min_name: String,
    pub max_name: String,
}

impl Default for PriceFilterOptions {
    fn default() -> Self {
        Self {
            min: Money::ZERO,
            max: Money::ZERO,
            min_name: "price_min".to_string(),
            max_name: "price_max".to_string(),
        }
    }
}

#[component]
pub fn PriceFilter(options: PriceFilterOptions) -> impl IntoView {
    let bounds = PriceBounds { min: options.min, max: options.max };
    let min_value = RwSignal::new(options.min.to_string());
    let max_value = RwSignal::new(options.max.to_string());

    let hold = HoldRepeat::new(REPEAT_MS);
    bind_document_release(hold);
    on_cleanup(move || hold.stop());

    view! {
        <div class="price-filter">
            <PriceInput name=options.min_name value=min_value bounds=bounds hold=hold />
            <span class="price-separator">"-"</span>
            <PriceInput name=options.max_name value=max_value bounds=bounds hold=hold />
        </div>
    }
}

#[component]
fn PriceInput(
    name: String,
    value: RwSignal<String>,
    bounds: PriceBounds,
    hold: HoldRepeat,
) -> impl IntoView {
    let arrow = move |direction: StepDirection, icon: &'static str| {
        let tick = move || {
            let current = value.get_untracked();
            match next_price(&current, direction, bounds) {
                Some(next) => value.set(next),
                None => log::trace!("[PRICE] {} stays at {:?}", icon, current),
            }
        };
        view! {
            <span
                class="material-symbols-outlined price-arrow"
                on:mousedown=make_on_hold(hold, tick)
                on:mouseup=make_on_release(hold)
                on:mouseleave=make_on_release(hold)
            >
                {icon}
            </span>
        }
    };

    view! {
        <div class="price-input">
            <input
                type="text"
                name=name
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <div class="price-arrows">
                {arrow(StepDirection::Up, "arrow_drop_up")}
                {arrow(StepDirection::Down, "arrow_drop_down")}
            </div>
        </div>
    }
}
