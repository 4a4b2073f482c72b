//! Navigation Widgets
//!
//! Category tabs, order highlighting and the account menu layout.

use leptos::prelude::*;
use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::dom;
use crate::view_models::{active_tab, highlight_url, highlighted_order, index_url, is_compact_layout, NavTab};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NavTabsOptions {
    pub tabs: Vec<NavTab>,
    pub domain: String,
    pub secure: bool,
}

#[component]
pub fn NavTabs(options: NavTabsOptions) -> impl IntoView {
    let current = dom::current_url();
    let index = index_url(&options.domain, options.secure);
    let active = active_tab(&current, &index, &options.tabs);
    log::trace!("[NAV] {} -> tab {:?}", current, active);

    view! {
        <ul class="prod-navs">
            {options.tabs.into_iter().enumerate().map(|(i, tab)| view! {
                <li class="nav-item">
                    <a class="nav-link" class:active-nav={active == Some(i)} href=tab.href>{tab.label}</a>
                </li>
            }).collect_view()}
        </ul>
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderChoice {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrderHighlightOptions {
    /// Orders page the picker navigates to
    pub url: String,
    pub orders: Vec<OrderChoice>,
    /// Prefix of the order block ids
    pub block_prefix: String,
    pub go_label: String,
}

impl Default for OrderHighlightOptions {
    fn default() -> Self {
        Self {
            url: String::new(),
            orders: Vec::new(),
            block_prefix: "#order-block-".to_string(),
            go_label: "Go".to_string(),
        }
    }
}

const HIGHLIGHT_CLASS: &str = "highlighted-element";

/// Marks the order named in `?highlight=order-<id>` and offers a picker
/// that reloads the page with another one highlighted
#[component]
pub fn OrderHighlight(options: OrderHighlightOptions) -> impl IntoView {
    let highlighted = highlighted_order(&dom::current_url());
    if let Some(id) = &highlighted {
        let selector = format!("{}{}", options.block_prefix, id);
        dom::toggle_class(&selector, HIGHLIGHT_CLASS, true);
        if let Some(block) = dom::query_all(&selector).first() {
            block.scroll_into_view();
        }
        log::debug!("[ORDERS] Highlighted order {}", id);
    }

    let first = options.orders.first().map(|o| o.id.clone()).unwrap_or_default();
    let (choice, set_choice) = signal(highlighted.clone().unwrap_or(first));
    let base = StoredValue::new(options.url);

    let go = move |_: web_sys::MouseEvent| {
        let id = choice.get_untracked();
        if !id.is_empty() {
            dom::navigate(&base.with_value(|url| highlight_url(url, &id)));
        }
    };

    view! {
        <div class="order-highlight">
            <select on:change=move |ev| set_choice.set(event_target_value(&ev))>
                {options.orders.into_iter().map(|order| {
                    let selected = highlighted.as_deref() == Some(order.id.as_str());
                    view! { <option value=order.id selected=selected>{order.label}</option> }
                }).collect_view()}
            </select>
            <button type="button" class="order-highlight-go" on:click=go>{options.go_label}</button>
        </div>
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MenuLayoutOptions {
    pub min_width: f64,
    pub sidebar: String,
    pub content: String,
}

impl Default for MenuLayoutOptions {
    fn default() -> Self {
        Self {
            min_width: 1000.0,
            sidebar: ".sidebar-customer".to_string(),
            content: ".content-customer".to_string(),
        }
    }
}

/// Lays the account sidebar out horizontally above the content on
/// narrow windows. Renders nothing itself.
#[component]
pub fn MenuLayout(options: MenuLayoutOptions) -> impl IntoView {
    let options = StoredValue::new(options);
    let (compact, set_compact) = signal(false);

    let measure = move || {
        let min_width = options.with_value(|o| o.min_width);
        set_compact.set(is_compact_layout(dom::window_width(), min_width));
    };
    measure();

    bind_window_resize(measure);

    Effect::new(move |_| {
        let compact = compact.get();
        options.with_value(|o| {
            dom::toggle_class(&o.sidebar, "sidebar-customer-horizontal", compact);
            dom::toggle_class(&o.content, "content-customer-full", compact);
        });
    });
}

/// Re-run `on_resize` whenever the window is resized
fn bind_window_resize(on_resize: impl Fn() + 'static) {
    let on_resize = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| on_resize());
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}
