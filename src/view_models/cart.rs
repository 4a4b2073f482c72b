//! Cart Models
//!
//! Totals as the server reports them, and the listing on the cart page.

use serde::Deserialize;

use crate::config::Labels;
use crate::money::Money;

/// Money figures of the cart summary
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CartTotals {
    /// Before discounts
    pub subtotal: Money,
    pub discount: Money,
    pub payable: Money,
}

/// One product line of the cart page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CartLine {
    pub product_id: u32,
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: String,
    pub quantity: u32,
    pub cost: Money,
}

/// Listing region of the cart page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartListing {
    lines: Vec<CartLine>,
    emptied: bool,
}

impl CartListing {
    pub fn new(lines: Vec<CartLine>) -> Self {
        let emptied = lines.is_empty();
        Self { lines, emptied }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Overwrite a line's quantity and cost with the server's figures
    pub fn set_line(&mut self, product_id: u32, quantity: u32, cost: Option<Money>) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
            if let Some(cost) = cost {
                line.cost = cost;
            }
        }
    }

    pub fn remove_line(&mut self, product_id: u32) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() != before
    }

    /// Switch to the empty-cart placeholder; true only the first time
    pub fn mark_empty(&mut self) -> bool {
        self.lines.clear();
        if self.emptied {
            return false;
        }
        self.emptied = true;
        true
    }

    /// Apply a confirmed removal: the line always goes, and an emptied
    /// cart switches to the placeholder. True when the placeholder was
    /// shown by this call.
    pub fn apply_removal(&mut self, product_id: u32, emptied: bool) -> bool {
        if emptied {
            self.mark_empty()
        } else {
            self.remove_line(product_id);
            false
        }
    }

    pub fn is_empty(&self) -> bool {
        self.emptied
    }
}

/// "product" / "products" for a count
pub fn product_noun(count: u32, labels: &Labels) -> &str {
    if count == 1 {
        &labels.product_singular
    } else {
        &labels.product_plural
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: u32, cost: i64) -> CartLine {
        CartLine {
            product_id: id,
            title: format!("Product {}", id),
            url: String::new(),
            image: String::new(),
            quantity: 1,
            cost: Money::from_cents(cost),
        }
    }

    #[test]
    fn test_set_and_remove_lines() {
        let mut listing = CartListing::new(vec![line(1, 1000), line(2, 2500)]);
        listing.set_line(2, 3, Some(Money::from_cents(7500)));
        assert_eq!(listing.lines()[1].quantity, 3);
        assert_eq!(listing.lines()[1].cost, Money::from_cents(7500));

        assert!(listing.remove_line(1));
        assert!(!listing.remove_line(1));
        assert_eq!(listing.lines().len(), 1);
        assert!(!listing.is_empty());
    }

    #[test]
    fn test_empty_placeholder_once() {
        let mut listing = CartListing::new(vec![line(1, 1000)]);
        assert!(listing.mark_empty());
        assert!(!listing.mark_empty());
        assert!(listing.is_empty());
        assert!(listing.lines().is_empty());

        assert!(CartListing::new(Vec::new()).is_empty());
    }

    #[test]
    fn test_removal_drops_line_and_empties_once() {
        let mut listing = CartListing::new(vec![line(1, 1000), line(2, 2500), line(3, 500)]);

        // stale reply: the store ignored its figures but the line still goes
        assert!(!listing.apply_removal(1, false));
        assert_eq!(listing.lines().len(), 2);
        assert!(!listing.is_empty());

        assert!(listing.apply_removal(2, true));
        assert!(listing.is_empty());
        assert!(listing.lines().is_empty());

        // a second emptying reply does not show the placeholder again
        assert!(!listing.apply_removal(3, true));
    }

    #[test]
    fn test_product_noun() {
        let labels = Labels::default();
        assert_eq!(product_noun(1, &labels), "product");
        assert_eq!(product_noun(0, &labels), "products");
        assert_eq!(product_noun(2, &labels), "products");
    }

    #[test]
    fn test_line_from_options() {
        let parsed: CartLine =
            serde_json::from_str(r#"{"product_id": 7, "title": "Charger", "quantity": 2, "cost": "19.90"}"#).unwrap();
        assert_eq!(parsed.cost, Money::from_cents(1990));
        assert!(parsed.image.is_empty());
    }
}
