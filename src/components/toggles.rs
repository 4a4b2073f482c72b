//! View-State Toggles
//!
//! Widgets that only show, hide or restyle markup; none of them talks to
//! the server.

use leptos::prelude::*;
use serde::Deserialize;

use crate::dom;
use crate::view_models::{expander_icon, DeliveryMethod, PasswordVisibility};

// ========================
// Collapsible
// ========================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CollapsibleOptions {
    /// Selector of the elements shown / hidden
    pub target: String,
    pub show_label: String,
    pub hide_label: String,
    pub expanded: bool,
}

impl Default for CollapsibleOptions {
    fn default() -> Self {
        Self {
            target: ".comments".to_string(),
            show_label: "Show comments".to_string(),
            hide_label: "Hide comments".to_string(),
            expanded: false,
        }
    }
}

#[component]
pub fn Collapsible(options: CollapsibleOptions) -> impl IntoView {
    let (expanded, set_expanded) = signal(options.expanded);
    let target = options.target;

    Effect::new(move |_| dom::set_all_shown(&target, expanded.get()));

    view! {
        <button
            type="button"
            class="collapsible-toggle"
            class:expanded=move || expanded.get()
            on:click=move |_| set_expanded.update(|e| *e = !*e)
        >
            {move || if expanded.get() { options.hide_label.clone() } else { options.show_label.clone() }}
        </button>
    }
}

// ========================
// Order Expander
// ========================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderExpanderOptions {
    pub order_id: String,
}

/// Swaps an order's compact summary (cost and thumbnails) for its details
#[component]
pub fn OrderExpander(options: OrderExpanderOptions) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let id = options.order_id;

    Effect::new(move |_| {
        let open = expanded.get();
        dom::set_all_shown(&format!("#order-detail-{}", id), open);
        dom::set_all_shown(&format!("#total-cost-{}", id), !open);
        dom::set_all_shown(&format!("#items-images-{}", id), !open);
    });

    view! {
        <span
            class="material-symbols-outlined order-expander"
            on:click=move |_| set_expanded.update(|e| *e = !*e)
        >
            {move || expander_icon(expanded.get())}
        </span>
    }
}

// ========================
// Password Field
// ========================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PasswordFieldOptions {
    pub name: String,
    pub id: String,
    pub placeholder: String,
    pub autocomplete: String,
}

impl Default for PasswordFieldOptions {
    fn default() -> Self {
        Self {
            name: "password".to_string(),
            id: "id_password".to_string(),
            placeholder: String::new(),
            autocomplete: "current-password".to_string(),
        }
    }
}

#[component]
pub fn PasswordField(options: PasswordFieldOptions) -> impl IntoView {
    let visibility = RwSignal::new(PasswordVisibility::default());

    view! {
        <div class="password-field">
            <input
                type=move || visibility.with(|v| v.input_type())
                name=options.name
                id=options.id
                placeholder=options.placeholder
                autocomplete=options.autocomplete
            />
            <span
                class="material-symbols-outlined password-eye"
                on:click=move |_| visibility.update(|v| v.toggle())
            >
                {move || visibility.with(|v| v.icon())}
            </span>
        </div>
    }
}

// ========================
// Delivery Fields
// ========================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeliveryFieldsOptions {
    pub method_name: String,
    pub address_name: String,
    pub office_name: String,
    /// (value, label) pairs of the method select
    pub methods: Vec<(String, String)>,
    pub selected: String,
    pub address: String,
    pub office_number: String,
}

impl Default for DeliveryFieldsOptions {
    fn default() -> Self {
        let method = |value: &str| (value.to_string(), value.to_string());
        Self {
            method_name: "delivery_method".to_string(),
            address_name: "address".to_string(),
            office_name: "office_number".to_string(),
            methods: vec![method("Self-delivery"), method("Post office"), method("Apartment")],
            selected: String::new(),
            address: String::new(),
            office_number: String::new(),
        }
    }
}

/// Order form fields: the office number only for post office delivery,
/// the address only for apartment delivery
#[component]
pub fn DeliveryFields(options: DeliveryFieldsOptions) -> impl IntoView {
    let (method, set_method) = signal(DeliveryMethod::from_value(&options.selected));
    let address_selector = format!("input[name='{}']", options.address_name);

    Effect::new(move |previous: Option<DeliveryMethod>| {
        let current = method.get();
        if current.shows_address() && previous.is_some_and(|p| p != current) {
            dom::focus(&address_selector);
        }
        current
    });

    let selected = options.selected.clone();

    view! {
        <div class="delivery-fields">
            <select
                name=options.method_name
                on:change=move |ev| set_method.set(DeliveryMethod::from_value(&event_target_value(&ev)))
            >
                <option value="" selected=selected.is_empty()>"---------"</option>
                {options.methods.into_iter().map(|(value, label)| {
                    let is_selected = value == selected;
                    view! { <option value=value selected=is_selected>{label}</option> }
                }).collect_view()}
            </select>
            <div class="office-number-field" style:display=move || if method.get().shows_office_number() { "" } else { "none" }>
                <input type="text" name=options.office_name value=options.office_number />
            </div>
            <div class="address-field" style:display=move || if method.get().shows_address() { "" } else { "none" }>
                <input type="text" name=options.address_name value=options.address />
            </div>
        </div>
    }
}

// ========================
// Filter Panel
// ========================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilterPanelOptions {
    pub target: String,
    pub label: String,
}

impl Default for FilterPanelOptions {
    fn default() -> Self {
        Self {
            target: ".filter-prod-column".to_string(),
            label: "Filters".to_string(),
        }
    }
}

/// Product filter column, open on load when the URL carries a filter
#[component]
pub fn FilterPanel(options: FilterPanelOptions) -> impl IntoView {
    let (open, set_open) = signal(dom::current_url().contains("filter"));
    let target = options.target;

    Effect::new(move |_| dom::set_all_shown(&target, open.get()));

    view! {
        <button
            type="button"
            class="filter-toggle"
            class:open=move || open.get()
            on:click=move |_| set_open.update(|o| *o = !*o)
        >
            <span class="material-symbols-outlined">"tune"</span>
            {options.label}
        </button>
    }
}
