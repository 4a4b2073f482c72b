//! Storefront Widgets
//!
//! The server renders `<div data-widget="name" data-options='{...}'>`
//! placeholders; each one is replaced by the matching component, with the
//! page context provided to it.

use leptos::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::components::*;
use crate::config::parse_options;
use crate::context::PageContext;
use crate::dom;

const WIDGET_SELECTOR: &str = "[data-widget]:not([data-mounted])";

#[derive(Debug, Error)]
pub enum MountError {
    #[error("unknown widget {0:?}")]
    UnknownWidget(String),
    #[error("invalid options for {widget}: {source}")]
    Options {
        widget: String,
        source: serde_json::Error,
    },
}

/// Mount every widget placeholder on the page; returns how many mounted
pub fn mount_widgets(page: PageContext) -> usize {
    let mut mounted = 0;
    for element in dom::query_all(WIDGET_SELECTOR) {
        let name = element.get_attribute("data-widget").unwrap_or_default();
        let options = element.get_attribute("data-options");
        match mount_widget(&element, &name, options.as_deref(), page) {
            Ok(()) => {
                let _ = element.set_attribute("data-mounted", "");
                mounted += 1;
            }
            Err(e) => log::error!("[MOUNT] {}", e),
        }
    }
    log::info!("[MOUNT] {} widgets mounted", mounted);
    mounted
}

fn mount_widget(
    element: &web_sys::HtmlElement,
    name: &str,
    raw: Option<&str>,
    page: PageContext,
) -> Result<(), MountError> {
    match name {
        "cart-badge" => mount_with(element, name, raw, page, |options| view! { <CartBadge options=options /> }),
        "favorites-badge" => mount_with(element, name, raw, page, |options| view! { <FavoritesBadge options=options /> }),
        "add-to-cart" => mount_with(element, name, raw, page, |options| view! { <AddToCart options=options /> }),
        "cart-lines" => mount_with(element, name, raw, page, |options| view! { <CartLines options=options /> }),
        "cart-summary" => mount_with(element, name, raw, page, |options| view! { <CartSummary options=options /> }),
        "discount-form" => mount_with(element, name, raw, page, |options| view! { <DiscountForm options=options /> }),
        "star-rating" => mount_with(element, name, raw, page, |options| view! { <StarRating options=options /> }),
        "favorite-toggle" => mount_with(element, name, raw, page, |options| view! { <FavoriteToggle options=options /> }),
        "favorites-list" => mount_with(element, name, raw, page, |options| view! { <FavoritesList options=options /> }),
        "comment-vote" => mount_with(element, name, raw, page, |options| view! { <CommentVote options=options /> }),
        "price-filter" => mount_with(element, name, raw, page, |options| view! { <PriceFilter options=options /> }),
        "captcha" => mount_with(element, name, raw, page, |options| view! { <CaptchaImage options=options /> }),
        "language-switcher" => mount_with(element, name, raw, page, |options| view! { <LanguageSwitcher options=options /> }),
        "collapsible" => mount_with(element, name, raw, page, |options| view! { <Collapsible options=options /> }),
        "order-expander" => mount_with(element, name, raw, page, |options| view! { <OrderExpander options=options /> }),
        "order-highlight" => mount_with(element, name, raw, page, |options| view! { <OrderHighlight options=options /> }),
        "password-field" => mount_with(element, name, raw, page, |options| view! { <PasswordField options=options /> }),
        "delivery-fields" => mount_with(element, name, raw, page, |options| view! { <DeliveryFields options=options /> }),
        "filter-panel" => mount_with(element, name, raw, page, |options| view! { <FilterPanel options=options /> }),
        "nav-tabs" => mount_with(element, name, raw, page, |options| view! { <NavTabs options=options /> }),
        "menu-layout" => mount_with(element, name, raw, page, |options| view! { <MenuLayout options=options /> }),
        _ => Err(MountError::UnknownWidget(name.to_string())),
    }
}

/// Decode the options, then replace the placeholder's server-rendered
/// content with the component
fn mount_with<O, V>(
    element: &web_sys::HtmlElement,
    name: &str,
    raw: Option<&str>,
    page: PageContext,
    render: impl FnOnce(O) -> V + 'static,
) -> Result<(), MountError>
where
    O: for<'de> Deserialize<'de> + Default + 'static,
    V: IntoView + 'static,
{
    let options: O = parse_options(raw).map_err(|source| MountError::Options {
        widget: name.to_string(),
        source,
    })?;
    log::debug!("[MOUNT] {}", name);

    element.set_inner_html("");
    leptos::mount::mount_to(element.clone(), move || {
        provide_context(page);
        render(options)
    })
    .forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_absent_options_use_defaults() {
        let options: CartLinesOptions = parse_options(None).unwrap();
        assert_eq!(options.max_quantity, 10);

        let options: PriceFilterOptions = parse_options(Some("  ")).unwrap();
        assert_eq!(options.min_name, "price_min");
    }

    #[test]
    fn test_partial_options_keep_other_defaults() {
        let options: DiscountFormOptions =
            parse_options(Some(r#"{"coupon": {"apply_url": "/cart/coupon/", "code": "SALE10"}}"#)).unwrap();
        assert_eq!(options.coupon.apply_url, "/cart/coupon/");
        assert_eq!(options.coupon.code, "SALE10");
        assert_eq!(options.card.reveal_label, "I have a gift card");

        let options: PriceFilterOptions = parse_options(Some(r#"{"min": "10.00", "max": 250}"#)).unwrap();
        assert_eq!(options.min, Money::from_cents(1000));
        assert_eq!(options.max, Money::from_cents(25000));
    }

    #[test]
    fn test_malformed_options_are_reported() {
        let result: Result<StarRatingOptions, _> = parse_options(Some("{rating: 3"));
        let error = result
            .map_err(|source| MountError::Options { widget: "star-rating".to_string(), source })
            .unwrap_err();
        assert!(error.to_string().starts_with("invalid options for star-rating"));
    }
}
