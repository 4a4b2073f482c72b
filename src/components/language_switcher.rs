//! Language Switcher
//!
//! Flag buttons posting the chosen language to the server's set-language
//! endpoint, which redirects back to `next`.

use leptos::prelude::*;
use serde::Deserialize;
use wasm_bindgen::JsCast;

use crate::api::CSRF_FIELD;
use crate::context::use_page;
use crate::view_models::flag_size;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    /// Flag image URL
    pub flag: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LanguageSwitcherOptions {
    pub action: String,
    pub next: String,
    pub current: String,
    pub languages: Vec<Language>,
}

#[component]
pub fn LanguageSwitcher(options: LanguageSwitcherOptions) -> impl IntoView {
    let page = use_page();
    let (current, set_current) = signal(options.current.clone());

    // a missing token only fails the submit server-side
    let csrf = page.csrf().unwrap_or_else(|e| {
        log::warn!("[LANGUAGE] {}", e);
        String::new()
    });

    let choose = move |ev: web_sys::MouseEvent, code: String| {
        if current.get_untracked() == code {
            return;
        }
        let Some(form) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("form").ok().flatten())
            .and_then(|form| form.dyn_into::<web_sys::HtmlFormElement>().ok())
        else {
            log::error!("[LANGUAGE] Flag is not inside its form");
            return;
        };
        log::info!("[LANGUAGE] Switching to {}", code);

        // set the field directly: the form is submitted before any effect runs
        if let Some(input) = form
            .query_selector("input[name='language']")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            input.set_value(&code);
        }
        set_current.set(code);
        if let Err(e) = form.submit() {
            log::error!("[LANGUAGE] Submit failed: {:?}", e);
        }
    };

    view! {
        <form class="language-switcher" method="post" action=options.action>
            <input type="hidden" name=CSRF_FIELD value=csrf />
            <input type="hidden" name="next" value=options.next />
            <input type="hidden" name="language" value=options.current />
            {options.languages.into_iter().map(|language| {
                let code = language.code.clone();
                let is_current = Memo::new({
                    let code = code.clone();
                    move |_| current.get() == code
                });
                view! {
                    <img
                        class="language-flag"
                        class:current-language=move || is_current.get()
                        src=language.flag
                        alt=language.name.clone()
                        title=language.name
                        width=move || flag_size(is_current.get()).0.to_string()
                        height=move || flag_size(is_current.get()).1.to_string()
                        on:click=move |ev| choose(ev, code.clone())
                    />
                }
            }).collect_view()}
        </form>
    }
}
