//! Discount Form
//!
//! Coupon and gift card slots on the cart page. Each slot is revealed by
//! its own checkbox (which disables the other one's), submits its code to
//! the apply or cancel endpoint, and feeds the reply into the shared
//! discount ledger. Totals are then recomputed from the ledger.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;

use crate::api;
use crate::context::use_page;
use crate::error::RequestError;
use crate::models::DiscountReply;
use crate::request_seq::InFlight;
use crate::store::ShopStateStoreFields;
use crate::view_models::{reconcile, DiscountKind, ReplyOutcome, SlotAction, SlotState};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SlotOptions {
    pub apply_url: String,
    pub cancel_url: String,
    /// Code already applied when the page was rendered
    pub code: String,
    pub reveal_label: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiscountFormOptions {
    pub coupon: SlotOptions,
    pub card: SlotOptions,
}

impl Default for DiscountFormOptions {
    fn default() -> Self {
        Self {
            coupon: SlotOptions {
                reveal_label: "I have a coupon".to_string(),
                placeholder: "Coupon code".to_string(),
                ..Default::default()
            },
            card: SlotOptions {
                reveal_label: "I have a gift card".to_string(),
                placeholder: "Gift card code".to_string(),
                ..Default::default()
            },
        }
    }
}

#[component]
pub fn DiscountForm(options: DiscountFormOptions) -> impl IntoView {
    let shop = use_page().shop;
    let ledger = shop.ledger().get_untracked();

    let coupon = RwSignal::new(SlotState::new(
        options.coupon.code.clone(),
        ledger.is_active(DiscountKind::Coupon),
    ));
    let card = RwSignal::new(SlotState::new(
        options.card.code.clone(),
        ledger.is_active(DiscountKind::GiftCard),
    ));

    view! {
        <div class="discount-forms">
            <DiscountSlot kind=DiscountKind::Coupon options=options.coupon slot=coupon peer=card />
            <DiscountSlot kind=DiscountKind::GiftCard options=options.card slot=card peer=coupon />
        </div>
    }
}

#[component]
fn DiscountSlot(
    kind: DiscountKind,
    options: SlotOptions,
    slot: RwSignal<SlotState>,
    peer: RwSignal<SlotState>,
) -> impl IntoView {
    let page = use_page();
    let shop = page.shop;
    let in_flight = InFlight::new();
    let apply_url = StoredValue::new(options.apply_url);
    let cancel_url = StoredValue::new(options.cancel_url);
    let tag = match kind {
        DiscountKind::Coupon => "COUPON",
        DiscountKind::GiftCard => "CARD",
    };
    let slot_class = match kind {
        DiscountKind::Coupon => "discount-slot coupon-slot",
        DiscountKind::GiftCard => "discount-slot card-slot",
    };

    let active = move || shop.ledger().with(|l| l.is_active(kind));
    let button_label = move || match shop.ledger().with(|l| l.action(kind)) {
        SlotAction::Apply => page.label(|l| &l.apply),
        SlotAction::Cancel => page.label(|l| &l.cancel),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let state = slot.get_untracked();
        if !state.can_submit() {
            return;
        }
        let action = shop.ledger().with_untracked(|l| l.action(kind));
        let url = match action {
            SlotAction::Apply => apply_url.get_value(),
            SlotAction::Cancel => cancel_url.get_value(),
        };
        let ticket = in_flight.begin();
        log::debug!("[{}] {:?} {}", tag, action, state.code);

        spawn_local(async move {
            let result: Result<DiscountReply, RequestError> = async {
                let csrf = page.csrf()?;
                api::submit_discount_code(&url, &csrf, state.code.trim()).await
            }
            .await;

            let reply = match result {
                Ok(reply) => reply,
                Err(e) => {
                    page.report(tag, e);
                    return;
                }
            };
            if !in_flight.is_current(ticket) {
                log::debug!("[{}] Discarding stale reply", tag);
                return;
            }

            let mut ledger = shop.ledger().get_untracked();
            let mut state = slot.get_untracked();
            let outcome = reconcile(&mut ledger, &mut state, kind, action, &reply);
            slot.set(state);

            match outcome {
                ReplyOutcome::Applied | ReplyOutcome::Canceled => {
                    log::info!("[{}] {:?}", tag, outcome);
                    shop.update(|s| {
                        s.ledger = ledger;
                        s.discounts_changed();
                    });
                }
                ReplyOutcome::Rejected { shown } => {
                    log::info!("[{}] Code rejected (message shown: {})", tag, shown);
                }
                ReplyOutcome::Malformed => {
                    log::warn!("[{}] Reply carried no discount, ignored", tag);
                }
            }
        });
    };

    view! {
        <div class=slot_class>
            <label class="discount-reveal">
                <input
                    type="checkbox"
                    prop:checked=move || slot.with(|s| s.revealed)
                    prop:disabled=move || peer.with(|s| s.locks_peer())
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        slot.update(|s| s.set_revealed(checked));
                    }
                />
                {options.reveal_label}
            </label>
            <Show when=move || slot.with(|s| s.revealed)>
                <form class="discount-form" on:submit=on_submit>
                    <input
                        type="text"
                        class="discount-code"
                        placeholder=options.placeholder.clone()
                        prop:value=move || slot.with(|s| s.code.clone())
                        prop:readonly=active
                        on:input=move |ev| {
                            let code = event_target_value(&ev);
                            slot.update(|s| s.code = code);
                        }
                    />
                    <Show when=active>
                        <span class="material-symbols-outlined discount-applied">"check_circle"</span>
                    </Show>
                    <button
                        type="submit"
                        class="discount-submit"
                        prop:disabled={move || !slot.with(|s| s.can_submit())}
                    >
                        {button_label}
                    </button>
                    {move || slot.with(|s| s.error.clone()).map(|message| view! {
                        <ul class="errorlist"><li>{message}</li></ul>
                    })}
                </form>
            </Show>
        </div>
    }
}
