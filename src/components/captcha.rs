//! Captcha Image
//!
//! Login / signup captcha with a refresh button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;

use crate::api::{self, CaptchaSize};
use crate::context::use_page;
use crate::error::RequestError;
use crate::models::CaptchaReply;
use crate::request_seq::InFlight;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CaptchaOptions {
    pub url: String,
    pub size: CaptchaSize,
    /// Base64 PNG rendered with the page
    pub image: String,
}

#[component]
pub fn CaptchaImage(options: CaptchaOptions) -> impl IntoView {
    let page = use_page();
    let in_flight = InFlight::new();
    let (image, set_image) = signal(options.image);
    let url = StoredValue::new(options.url);
    let size = options.size;

    let refresh = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let ticket = in_flight.begin();
        let url = url.get_value();

        spawn_local(async move {
            let result: Result<CaptchaReply, RequestError> = async {
                let csrf = page.csrf()?;
                api::refresh_captcha(&url, &csrf, size).await
            }
            .await;

            match result {
                Ok(reply) if in_flight.is_current(ticket) => {
                    log::debug!("[CAPTCHA] New image ({} bytes)", reply.captcha_image.len());
                    set_image.set(reply.captcha_image);
                }
                Ok(_) => log::debug!("[CAPTCHA] Discarding stale image"),
                Err(e) => page.report("CAPTCHA", e),
            }
        });
    };

    view! {
        <div class="captcha">
            <img
                class="captcha-image"
                src=move || api::captcha_src(&image.get())
                width=size.width.to_string()
                height=size.height.to_string()
                alt="captcha"
                on:click=refresh
            />
            <button type="button" class="captcha-refresh" on:click=refresh>
                <span class="material-symbols-outlined">"refresh"</span>
            </button>
        </div>
    }
}
