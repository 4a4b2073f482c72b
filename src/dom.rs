//! DOM Helpers
//!
//! The few places where widgets reach server-rendered markup outside
//! their own mount point.

use wasm_bindgen::JsCast;

pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// All elements matching `selector`
pub fn query_all(selector: &str) -> Vec<web_sys::HtmlElement> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

pub fn set_shown(element: &web_sys::HtmlElement, shown: bool) {
    let display = if shown { "" } else { "none" };
    let _ = element.style().set_property("display", display);
}

/// Show or hide every element matching `selector`
pub fn set_all_shown(selector: &str, shown: bool) {
    for element in query_all(selector) {
        set_shown(&element, shown);
    }
}

pub fn is_hidden(element: &web_sys::HtmlElement) -> bool {
    element
        .style()
        .get_property_value("display")
        .map(|d| d == "none")
        .unwrap_or(false)
        || element.hidden()
}

pub fn toggle_class(selector: &str, class: &str, on: bool) {
    for element in query_all(selector) {
        let _ = element.class_list().toggle_with_force(class, on);
    }
}

/// Focus the first element matching `selector`
pub fn focus(selector: &str) {
    if let Some(element) = query_all(selector).first() {
        let _ = element.focus();
    }
}

pub fn current_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

/// Navigate the current tab
pub fn navigate(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(url) {
            log::error!("[DOM] Navigation to {} failed: {:?}", url, e);
        }
    }
}

pub fn window_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}
