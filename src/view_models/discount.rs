//! Discount Ledger
//!
//! Coupon (percentage) and gift card (fixed amount) are tracked
//! independently against one pre-discount subtotal. Displayed totals are
//! always derived from the ledger.

use crate::models::DiscountReply;
use crate::money::{Fraction, Money};
use crate::view_models::CartTotals;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountKind {
    Coupon,
    GiftCard,
}

impl DiscountKind {
    pub fn peer(self) -> Self {
        match self {
            DiscountKind::Coupon => DiscountKind::GiftCard,
            DiscountKind::GiftCard => DiscountKind::Coupon,
        }
    }
}

/// What submitting a slot's form will do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAction {
    Apply,
    Cancel,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscountLedger {
    subtotal: Money,
    coupon: Option<Fraction>,
    card: Option<Money>,
}

impl DiscountLedger {
    pub fn new(subtotal: Money, coupon: Option<Fraction>, card: Option<Money>) -> Self {
        Self { subtotal, coupon, card }
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// New pre-discount subtotal from the server; active discounts stay
    pub fn set_subtotal(&mut self, subtotal: Money) {
        self.subtotal = subtotal;
    }

    pub fn apply_coupon(&mut self, fraction: Fraction) {
        self.coupon = Some(fraction);
    }

    pub fn apply_card(&mut self, amount: Money) {
        self.card = Some(amount);
    }

    pub fn cancel(&mut self, kind: DiscountKind) {
        match kind {
            DiscountKind::Coupon => self.coupon = None,
            DiscountKind::GiftCard => self.card = None,
        }
    }

    /// Drop everything, e.g. once the cart is emptied
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self, kind: DiscountKind) -> bool {
        match kind {
            DiscountKind::Coupon => self.coupon.is_some(),
            DiscountKind::GiftCard => self.card.is_some(),
        }
    }

    pub fn action(&self, kind: DiscountKind) -> SlotAction {
        if self.is_active(kind) {
            SlotAction::Cancel
        } else {
            SlotAction::Apply
        }
    }

    /// Amount this discount takes off the subtotal
    pub fn contribution(&self, kind: DiscountKind) -> Money {
        match kind {
            DiscountKind::Coupon => self.coupon.map_or(Money::ZERO, |f| self.subtotal.apply(f)),
            DiscountKind::GiftCard => self.card.unwrap_or(Money::ZERO),
        }
    }

    pub fn discount_total(&self) -> Money {
        self.contribution(DiscountKind::Coupon) + self.contribution(DiscountKind::GiftCard)
    }

    /// Subtotal minus discounts, never below zero
    pub fn payable(&self) -> Money {
        (self.subtotal - self.discount_total()).non_negative()
    }

    /// Whether the discount summary block is shown
    pub fn has_summary(&self) -> bool {
        self.coupon.is_some() || self.card.is_some()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals {
            subtotal: self.subtotal,
            discount: self.discount_total(),
            payable: self.payable(),
        }
    }
}

/// Per-form state of one discount slot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotState {
    /// Form revealed by its "I have a ..." checkbox
    pub revealed: bool,
    /// Revealed by a click on the checkbox rather than on page load
    checked_by_user: bool,
    pub code: String,
    /// Validation message; at most one is ever shown
    pub error: Option<String>,
}

impl SlotState {
    /// A slot whose discount is already active starts revealed
    pub fn new(code: String, active: bool) -> Self {
        Self {
            revealed: active,
            checked_by_user: false,
            code,
            error: None,
        }
    }

    /// The slot's checkbox was clicked
    pub fn set_revealed(&mut self, checked: bool) {
        self.revealed = checked;
        self.checked_by_user = checked;
    }

    /// Whether the peer slot's checkbox is disabled. Only a click locks
    /// the peer; a slot revealed on page load never does.
    pub fn locks_peer(&self) -> bool {
        self.revealed && self.checked_by_user
    }

    /// Submit is disabled while the code input is empty
    pub fn can_submit(&self) -> bool {
        !self.code.trim().is_empty()
    }
}

/// How a discount reply changed the widget
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyOutcome {
    /// Validation error returned; `shown` is false when a previous error
    /// already occupies the slot
    Rejected { shown: bool },
    Applied,
    Canceled,
    /// Apply reply without the amount it should carry
    Malformed,
}

/// Reconcile one successful reply into the ledger and the slot.
///
/// Cancel only removes `kind`'s own contribution; the peer discount and its
/// share of the total are left as they are.
pub fn reconcile(
    ledger: &mut DiscountLedger,
    slot: &mut SlotState,
    kind: DiscountKind,
    action: SlotAction,
    reply: &DiscountReply,
) -> ReplyOutcome {
    if let Some(message) = reply.first_error() {
        if slot.error.is_some() {
            return ReplyOutcome::Rejected { shown: false };
        }
        slot.error = Some(message.to_string());
        return ReplyOutcome::Rejected { shown: true };
    }

    match action {
        SlotAction::Apply => {
            match (kind, reply.coupon_discount, reply.card_amount) {
                (DiscountKind::Coupon, Some(fraction), _) => ledger.apply_coupon(fraction),
                (DiscountKind::GiftCard, _, Some(amount)) => ledger.apply_card(amount),
                _ => return ReplyOutcome::Malformed,
            }
            slot.error = None;
            ReplyOutcome::Applied
        }
        SlotAction::Cancel => {
            ledger.cancel(kind);
            slot.error = None;
            ReplyOutcome::Canceled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon_reply(fraction: &str) -> DiscountReply {
        DiscountReply {
            coupon_discount: Fraction::parse(fraction),
            ..Default::default()
        }
    }

    fn card_reply(amount: i64) -> DiscountReply {
        DiscountReply {
            card_amount: Some(Money::from_cents(amount)),
            ..Default::default()
        }
    }

    fn error_reply(message: &str) -> DiscountReply {
        let mut errors = crate::models::FormErrors::new();
        errors.insert("code".to_string(), vec![message.to_string()]);
        DiscountReply {
            form_errors: Some(errors),
            ..Default::default()
        }
    }

    #[test]
    fn test_coupon_ten_percent_of_fifty() {
        let mut ledger = DiscountLedger::new(Money::from_cents(5000), None, None);
        let mut slot = SlotState::default();

        let outcome = reconcile(&mut ledger, &mut slot, DiscountKind::Coupon, SlotAction::Apply, &coupon_reply("0.1"));

        assert_eq!(outcome, ReplyOutcome::Applied);
        assert_eq!(ledger.discount_total().with_symbol("$"), "$5.00");
        assert_eq!(ledger.payable().with_symbol("$"), "$45.00");
        assert_eq!(ledger.action(DiscountKind::Coupon), SlotAction::Cancel);
        assert!(ledger.has_summary());
    }

    #[test]
    fn test_discounts_accumulate_and_cancel_independently() {
        let mut ledger = DiscountLedger::new(Money::from_cents(10000), None, None);
        let mut coupon = SlotState::default();
        let mut card = SlotState::default();

        reconcile(&mut ledger, &mut coupon, DiscountKind::Coupon, SlotAction::Apply, &coupon_reply("0.2"));
        reconcile(&mut ledger, &mut card, DiscountKind::GiftCard, SlotAction::Apply, &card_reply(1500));
        assert_eq!(ledger.discount_total(), Money::from_cents(3500));
        assert_eq!(ledger.payable(), Money::from_cents(6500));

        // cancel coupon: card's contribution untouched, summary stays
        let card_before = ledger.contribution(DiscountKind::GiftCard);
        reconcile(&mut ledger, &mut coupon, DiscountKind::Coupon, SlotAction::Cancel, &coupon_reply("0.2"));
        assert_eq!(ledger.contribution(DiscountKind::GiftCard), card_before);
        assert_eq!(ledger.discount_total(), Money::from_cents(1500));
        assert!(ledger.has_summary());

        // cancel the last one: summary removed, total back to subtotal
        reconcile(&mut ledger, &mut card, DiscountKind::GiftCard, SlotAction::Cancel, &card_reply(1500));
        assert_eq!(ledger.discount_total(), Money::ZERO);
        assert_eq!(ledger.payable(), ledger.subtotal());
        assert!(!ledger.has_summary());
    }

    #[test]
    fn test_total_equals_sum_of_active_for_any_sequence() {
        let subtotal = Money::from_cents(4999);
        let steps = [
            (DiscountKind::GiftCard, SlotAction::Apply),
            (DiscountKind::Coupon, SlotAction::Apply),
            (DiscountKind::GiftCard, SlotAction::Cancel),
            (DiscountKind::GiftCard, SlotAction::Apply),
            (DiscountKind::Coupon, SlotAction::Cancel),
            (DiscountKind::Coupon, SlotAction::Apply),
        ];
        let mut ledger = DiscountLedger::new(subtotal, None, None);
        let mut slot = SlotState::default();
        for (kind, action) in steps {
            let reply = match kind {
                DiscountKind::Coupon => coupon_reply("0.15"),
                DiscountKind::GiftCard => card_reply(700),
            };
            reconcile(&mut ledger, &mut slot, kind, action, &reply);

            let expected: Money = [DiscountKind::Coupon, DiscountKind::GiftCard]
                .into_iter()
                .filter(|k| ledger.is_active(*k))
                .map(|k| ledger.contribution(k))
                .sum();
            assert_eq!(ledger.discount_total(), expected);
        }
    }

    #[test]
    fn test_payable_floors_at_zero() {
        let mut ledger = DiscountLedger::new(Money::from_cents(2000), None, None);
        ledger.apply_card(Money::from_cents(5000));
        assert_eq!(ledger.payable(), Money::ZERO);
        assert_eq!(ledger.discount_total(), Money::from_cents(5000));
    }

    #[test]
    fn test_error_shown_once() {
        let mut ledger = DiscountLedger::new(Money::from_cents(5000), None, None);
        let mut slot = SlotState::default();

        let first = reconcile(&mut ledger, &mut slot, DiscountKind::Coupon, SlotAction::Apply, &error_reply("Invalid code"));
        let second = reconcile(&mut ledger, &mut slot, DiscountKind::Coupon, SlotAction::Apply, &error_reply("Other"));

        assert_eq!(first, ReplyOutcome::Rejected { shown: true });
        assert_eq!(second, ReplyOutcome::Rejected { shown: false });
        assert_eq!(slot.error.as_deref(), Some("Invalid code"));
        assert!(!ledger.has_summary());

        // a later success clears it
        reconcile(&mut ledger, &mut slot, DiscountKind::Coupon, SlotAction::Apply, &coupon_reply("0.1"));
        assert_eq!(slot.error, None);
    }

    #[test]
    fn test_malformed_apply_leaves_ledger() {
        let mut ledger = DiscountLedger::new(Money::from_cents(5000), None, None);
        let mut slot = SlotState::default();
        let outcome = reconcile(&mut ledger, &mut slot, DiscountKind::GiftCard, SlotAction::Apply, &coupon_reply("0.1"));
        assert_eq!(outcome, ReplyOutcome::Malformed);
        assert!(!ledger.is_active(DiscountKind::GiftCard));
    }

    #[test]
    fn test_coupon_follows_new_subtotal() {
        let mut ledger = DiscountLedger::new(Money::from_cents(5000), Fraction::parse("0.1"), None);
        ledger.set_subtotal(Money::from_cents(8000));
        assert_eq!(ledger.discount_total(), Money::from_cents(800));
    }

    #[test]
    fn test_active_slots_on_load_leave_both_checkboxes_usable() {
        let mut coupon = SlotState::new("SALE10".to_string(), true);
        let mut card = SlotState::new("GIFT-5".to_string(), true);
        assert!(coupon.revealed && card.revealed);
        assert!(!coupon.locks_peer());
        assert!(!card.locks_peer());

        // hiding one, then checking it again locks the other
        coupon.set_revealed(false);
        assert!(!coupon.revealed);
        coupon.set_revealed(true);
        assert!(coupon.locks_peer());

        coupon.set_revealed(false);
        assert!(!coupon.locks_peer());
        card.set_revealed(false);
        assert!(!card.revealed);
    }

    #[test]
    fn test_slot_submit_requires_code() {
        let mut slot = SlotState::new(String::new(), false);
        assert!(!slot.can_submit());
        slot.code = "  ".to_string();
        assert!(!slot.can_submit());
        slot.code = "SALE10".to_string();
        assert!(slot.can_submit());
        assert_eq!(DiscountKind::Coupon.peer(), DiscountKind::GiftCard);
    }
}
