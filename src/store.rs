//! Page State Store
//!
//! Cart and favorites figures shown by several widgets at once (header
//! badge, cart summary, discount form, cart listing). Uses Leptos
//! reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::PageSeed;
use crate::models::CartReply;
use crate::money::Money;
use crate::request_seq::{RequestSeq, Ticket};
use crate::view_models::{CartTotals, DiscountLedger};

/// Shared page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Number of products in the cart (header badge)
    pub cart_len: u32,
    /// Header total; `None` renders blank
    pub header_total: Option<Money>,
    /// Cart summary figures
    pub totals: CartTotals,
    /// Active coupon / gift card against the subtotal
    pub ledger: DiscountLedger,
    /// Whether the discount summary block is shown
    pub show_discounts: bool,
    pub favorites_count: u32,
    /// Adds from every add-to-cart button on the page share one sequence
    pub add_seq: RequestSeq,
}

impl ShopState {
    pub fn from_seed(seed: &PageSeed) -> Self {
        let ledger = DiscountLedger::new(seed.subtotal, seed.coupon, seed.card);
        let totals = ledger.totals();
        Self {
            cart_len: seed.cart_len,
            header_total: seed.header_total.or(Some(totals.payable)).filter(|_| seed.cart_len > 0),
            totals,
            show_discounts: ledger.has_summary(),
            ledger,
            favorites_count: seed.favorites_count,
            add_seq: RequestSeq::default(),
        }
    }

    /// Ticket for an add-to-cart request about to be sent
    pub fn begin_add(&mut self) -> Ticket {
        self.add_seq.issue()
    }

    /// Product added from a listing or product page. Only the reply to the
    /// latest add on the page reaches the header; returns whether it did.
    pub fn cart_added(&mut self, reply: &CartReply, ticket: Ticket) -> bool {
        if !self.add_seq.is_latest(ticket) {
            return false;
        }
        self.cart_len = reply.cart_len;
        self.header_total = Some(reply.total_price);
        true
    }

    /// Quantity changed on the cart page: all figures verbatim from the server
    pub fn quantity_changed(&mut self, reply: &CartReply) {
        self.cart_len = reply.cart_len;
        self.header_total = Some(reply.total_price_discounts);
        self.totals = CartTotals {
            subtotal: reply.total_price,
            discount: reply.total_discount,
            payable: reply.total_price_discounts,
        };
        self.ledger.set_subtotal(reply.total_price);
    }

    /// Remove reply, possibly overtaken by a newer cart request. A stale
    /// reply leaves the figures alone unless it emptied the cart, which is
    /// final. Returns true when the cart just became empty.
    pub fn removal_confirmed(&mut self, reply: &CartReply, is_current: bool) -> bool {
        if reply.total_price.is_zero() || is_current {
            self.line_removed(reply)
        } else {
            false
        }
    }

    /// Line removed; returns true when the cart just became empty
    pub fn line_removed(&mut self, reply: &CartReply) -> bool {
        self.cart_len = reply.cart_len;
        if reply.total_price.is_zero() {
            self.header_total = None;
            self.totals = CartTotals::default();
            self.ledger.clear();
            self.show_discounts = false;
            return true;
        }
        self.header_total = Some(reply.total_price);
        self.totals = CartTotals {
            subtotal: reply.total_price,
            discount: reply.total_discount,
            payable: reply.total_price_discounts,
        };
        self.ledger.set_subtotal(reply.total_price);
        false
    }

    /// Recompute every figure from the ledger after a discount changed
    pub fn discounts_changed(&mut self) {
        self.totals = self.ledger.totals();
        self.header_total = Some(self.totals.payable);
        self.show_discounts = self.ledger.has_summary();
    }

    /// The cart link is only usable with something in the cart
    pub fn cart_enabled(&self) -> bool {
        self.cart_len > 0
    }
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

pub fn create_shop_store(seed: &PageSeed) -> ShopStore {
    Store::new(ShopState::from_seed(seed))
}

// ========================
// Store Helper Functions
// ========================

pub fn store_begin_add(store: &ShopStore) -> Ticket {
    store.add_seq().try_update(RequestSeq::issue).unwrap_or_default()
}

/// Returns false when a newer add has been sent since `ticket`
pub fn store_cart_added(store: &ShopStore, reply: &CartReply, ticket: Ticket) -> bool {
    store.try_update(|state| state.cart_added(reply, ticket)).unwrap_or(false)
}

pub fn store_quantity_changed(store: &ShopStore, reply: &CartReply) {
    store.update(|state| state.quantity_changed(reply));
}

/// Returns true when the cart just became empty
pub fn store_line_removed(store: &ShopStore, reply: &CartReply, is_current: bool) -> bool {
    store
        .try_update(|state| state.removal_confirmed(reply, is_current))
        .unwrap_or(false)
}

pub fn store_set_favorites(store: &ShopStore, count: u32) {
    store.favorites_count().set(count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Fraction;

    fn reply(cart_len: u32, total: i64, payable: i64, discount: i64) -> CartReply {
        CartReply {
            cart_len,
            added_prod_cost: None,
            total_price: Money::from_cents(total),
            total_price_discounts: Money::from_cents(payable),
            total_discount: Money::from_cents(discount),
            prev_url: None,
        }
    }

    #[test]
    fn test_seed_with_coupon() {
        let seed = PageSeed {
            cart_len: 2,
            subtotal: Money::from_cents(5000),
            coupon: Fraction::parse("0.1"),
            ..Default::default()
        };
        let state = ShopState::from_seed(&seed);
        assert_eq!(state.totals.payable, Money::from_cents(4500));
        assert_eq!(state.header_total, Some(Money::from_cents(4500)));
        assert!(state.show_discounts);
        assert!(state.cart_enabled());
    }

    #[test]
    fn test_empty_seed_has_blank_header() {
        let state = ShopState::from_seed(&PageSeed::default());
        assert_eq!(state.header_total, None);
        assert!(!state.cart_enabled());
    }

    #[test]
    fn test_quantity_change_is_verbatim() {
        let mut state = ShopState::from_seed(&PageSeed {
            cart_len: 1,
            subtotal: Money::from_cents(5000),
            coupon: Fraction::parse("0.1"),
            ..Default::default()
        });
        state.quantity_changed(&reply(2, 10000, 9000, 1000));
        assert_eq!(state.cart_len, 2);
        assert_eq!(state.totals.discount, Money::from_cents(1000));
        assert_eq!(state.header_total, Some(Money::from_cents(9000)));
        assert_eq!(state.ledger.subtotal(), Money::from_cents(10000));
    }

    #[test]
    fn test_removing_last_line_resets() {
        let mut state = ShopState::from_seed(&PageSeed {
            cart_len: 1,
            subtotal: Money::from_cents(2000),
            card: Some(Money::from_cents(500)),
            ..Default::default()
        });
        assert!(!state.line_removed(&reply(1, 1000, 500, 500)));
        assert_eq!(state.header_total, Some(Money::from_cents(1000)));

        assert!(state.line_removed(&reply(0, 0, 0, 0)));
        assert_eq!(state.header_total, None);
        assert_eq!(state.totals, CartTotals::default());
        assert!(!state.show_discounts);
        assert!(!state.cart_enabled());
    }

    #[test]
    fn test_stale_removal_keeps_newer_totals() {
        let mut state = ShopState::from_seed(&PageSeed {
            cart_len: 3,
            subtotal: Money::from_cents(6000),
            ..Default::default()
        });
        state.quantity_changed(&reply(4, 8000, 8000, 0));

        // an older remove reply arrives after the quantity change
        assert!(!state.removal_confirmed(&reply(2, 4000, 4000, 0), false));
        assert_eq!(state.cart_len, 4);
        assert_eq!(state.header_total, Some(Money::from_cents(8000)));

        // an emptied cart applies even when stale
        assert!(state.removal_confirmed(&reply(0, 0, 0, 0), false));
        assert_eq!(state.header_total, None);
        assert_eq!(state.cart_len, 0);
    }

    #[test]
    fn test_only_latest_add_reaches_header() {
        let mut state = ShopState::default();
        let first = state.begin_add();
        let second = state.begin_add();

        assert!(state.cart_added(&reply(2, 3000, 3000, 0), second));
        // the first add's reply comes back late with older figures
        assert!(!state.cart_added(&reply(1, 1000, 1000, 0), first));
        assert_eq!(state.cart_len, 2);
        assert_eq!(state.header_total, Some(Money::from_cents(3000)));
    }

    #[test]
    fn test_discount_change_updates_header() {
        let mut state = ShopState::from_seed(&PageSeed {
            cart_len: 1,
            subtotal: Money::from_cents(3000),
            ..Default::default()
        });
        state.ledger.apply_card(Money::from_cents(5000));
        state.discounts_changed();
        assert_eq!(state.header_total, Some(Money::ZERO));
        assert_eq!(state.totals.payable, Money::ZERO);
        assert!(state.show_discounts);
    }
}
