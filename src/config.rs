//! Page Configuration
//!
//! Page-wide settings come from the optional `window.STOREFRONT_CONFIG`
//! object the server renders; per-widget options come from the mount
//! point's `data-options` attribute. Every field has a default.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::money::{Fraction, Money};

/// Name of the JS global holding the page config
const CONFIG_GLOBAL: &str = "STOREFRONT_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Cookie carrying the anti-forgery token
    pub csrf_cookie: String,
    pub currency_symbol: String,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    pub labels: Labels,
    /// Server-rendered cart and favorites state at page load
    pub seed: PageSeed,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            csrf_cookie: "csrftoken".to_string(),
            currency_symbol: "$".to_string(),
            log_level: "debug".to_string(),
            labels: Labels::default(),
            seed: PageSeed::default(),
        }
    }
}

impl StorefrontConfig {
    /// Read `window.STOREFRONT_CONFIG`, falling back to defaults when it is
    /// missing or malformed
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        if raw.is_undefined() || raw.is_null() {
            return Self::default();
        }
        match serde_wasm_bindgen::from_value(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[CONFIG] Ignoring malformed {}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }

    /// Money as displayed on this page, e.g. "$45.00"
    pub fn price(&self, amount: Money) -> String {
        amount.with_symbol(&self.currency_symbol)
    }

    /// Payable amount: the "Free" label at zero
    pub fn payable(&self, amount: Money) -> String {
        if amount.cents() > 0 {
            self.price(amount)
        } else {
            self.labels.free.clone()
        }
    }
}

/// Translated UI strings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub free: String,
    pub apply: String,
    pub cancel: String,
    pub product_singular: String,
    pub product_plural: String,
    pub amount_discounts: String,
    pub without_discounts: String,
    pub add_favorite: String,
    pub remove_favorite: String,
    pub empty_favorites: String,
    pub empty_cart: String,
    pub login_to_rate: String,
    pub please: String,
    pub login: String,
    pub unauthorized: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            free: "Free".to_string(),
            apply: "Apply".to_string(),
            cancel: "Cancel".to_string(),
            product_singular: "product".to_string(),
            product_plural: "products".to_string(),
            amount_discounts: "Amount discounts:".to_string(),
            without_discounts: "Without discounts:".to_string(),
            add_favorite: "Add to Favorite".to_string(),
            remove_favorite: "Remove from Favorite".to_string(),
            empty_favorites: "There are no favorite products yet...".to_string(),
            empty_cart: "Your cart is empty".to_string(),
            login_to_rate: "to be able to rate comments!".to_string(),
            please: "Please".to_string(),
            login: "login".to_string(),
            unauthorized: "Unauthorized".to_string(),
        }
    }
}

/// Initial page state rendered by the server
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageSeed {
    pub cart_len: u32,
    /// Header total as rendered at page load
    pub header_total: Option<Money>,
    /// Pre-discount subtotal of the cart
    pub subtotal: Money,
    pub coupon: Option<Fraction>,
    pub card: Option<Money>,
    pub favorites_count: u32,
}

/// Decode a widget's `data-options` JSON; absent options mean defaults
pub fn parse_options<T>(raw: Option<&str>) -> Result<T, serde_json::Error>
where
    T: for<'de> Deserialize<'de> + Default,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(json) => serde_json::from_str(json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Opts {
        url: String,
        width: u32,
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.csrf_cookie, "csrftoken");
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.payable(Money::ZERO), "Free");
        assert_eq!(config.payable(Money::from_cents(4500)), "$45.00");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: StorefrontConfig = serde_json::from_str(
            r#"{"currency_symbol": "€", "log_level": "WARN", "labels": {"free": "Gratis"},
                "seed": {"cart_len": 2, "subtotal": "50.00", "coupon": "0.1"}}"#,
        )
        .unwrap();
        assert_eq!(config.csrf_cookie, "csrftoken");
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.labels.free, "Gratis");
        assert_eq!(config.labels.apply, "Apply");
        assert_eq!(config.price(Money::from_cents(100)), "€1.00");
        assert_eq!(config.seed.cart_len, 2);
        assert_eq!(config.seed.subtotal, Money::from_cents(5000));
        assert_eq!(config.seed.coupon, Some(Fraction::from_basis_points(1000)));
        assert_eq!(config.seed.card, None);
    }

    #[test]
    fn test_parse_options() {
        let empty: Opts = parse_options(None).unwrap();
        assert_eq!(empty, Opts::default());

        let blank: Opts = parse_options(Some("  ")).unwrap();
        assert_eq!(blank, Opts::default());

        let opts: Opts = parse_options(Some(r#"{"url": "/ajax/x/", "width": 135}"#)).unwrap();
        assert_eq!(opts.url, "/ajax/x/");
        assert_eq!(opts.width, 135);

        assert!(parse_options::<Opts>(Some("{not json")).is_err());
    }
}
