//! Frontend Models
//!
//! Response bodies of the storefront's AJAX endpoints.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::money::{de_f64_lenient, Fraction, Money};

/// Cart add / update-quantity / remove response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CartReply {
    pub cart_len: u32,
    /// Cost of the touched line (add and update only)
    pub added_prod_cost: Option<Money>,
    /// Pre-discount total
    pub total_price: Money,
    pub total_price_discounts: Money,
    pub total_discount: Money,
    /// Page to return to once the cart is emptied (remove only)
    pub prev_url: Option<String>,
}

/// Validation errors keyed by form field
pub type FormErrors = BTreeMap<String, Vec<String>>;

/// Coupon / gift-card apply or cancel response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiscountReply {
    pub coupon_discount: Option<Fraction>,
    pub card_amount: Option<Money>,
    pub form_errors: Option<FormErrors>,
}

impl DiscountReply {
    /// First message for the `code` field, else the first message at all
    pub fn first_error(&self) -> Option<&str> {
        let errors = self.form_errors.as_ref()?;
        errors
            .get("code")
            .and_then(|messages| messages.first())
            .or_else(|| errors.values().flatten().next())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FavoriteReply {
    pub amount_prods: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RatingReply {
    #[serde(deserialize_with = "de_f64_lenient")]
    pub current_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VoteReply {
    pub new_count_likes: u32,
    pub new_count_unlikes: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CaptchaReply {
    /// Base64-encoded PNG
    pub captcha_image: String,
}

/// Body of a 401 response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UnauthorizedBody {
    pub login_page_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_reply_decimal_strings() {
        let reply: CartReply = serde_json::from_str(
            r#"{"success": true, "cart_len": 3, "added_prod_cost": "29.98",
                "total_price": "50.00", "total_price_discounts": "45.00", "total_discount": "5.00"}"#,
        )
        .unwrap();
        assert_eq!(reply.cart_len, 3);
        assert_eq!(reply.added_prod_cost, Some(Money::from_cents(2998)));
        assert_eq!(reply.total_price_discounts, Money::from_cents(4500));
        assert_eq!(reply.prev_url, None);
    }

    #[test]
    fn test_remove_reply_with_null_prev_url() {
        let reply: CartReply = serde_json::from_str(
            r#"{"cart_len": 0, "total_price": 0, "total_price_discounts": "0.00",
                "total_discount": "0.00", "prev_url": null}"#,
        )
        .unwrap();
        assert!(reply.total_price.is_zero());
        assert_eq!(reply.added_prod_cost, None);
    }

    #[test]
    fn test_discount_reply_errors() {
        let reply: DiscountReply = serde_json::from_str(
            r#"{"success": false, "form_errors": {"code": ["Coupon is not valid", "second"]}}"#,
        )
        .unwrap();
        assert_eq!(reply.first_error(), Some("Coupon is not valid"));
        assert_eq!(reply.coupon_discount, None);

        let other: DiscountReply =
            serde_json::from_str(r#"{"form_errors": {"__all__": ["Expired"]}}"#).unwrap();
        assert_eq!(other.first_error(), Some("Expired"));

        let ok: DiscountReply = serde_json::from_str(r#"{"coupon_discount": "0.1"}"#).unwrap();
        assert_eq!(ok.first_error(), None);
        assert_eq!(ok.coupon_discount, Some(Fraction::from_basis_points(1000)));
    }

    #[test]
    fn test_rating_reply_string_or_number() {
        let text: RatingReply = serde_json::from_str(r#"{"current_rating": "3.5"}"#).unwrap();
        let number: RatingReply = serde_json::from_str(r#"{"current_rating": 3.5}"#).unwrap();
        assert_eq!(text, number);
    }
}
