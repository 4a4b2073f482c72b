//! Price Filter Stepping

use crate::money::Money;

/// One step of the up/down arrows
const PRICE_STEP: Money = Money::from_cents(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

/// Allowed range: the values the inputs held when the page loaded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBounds {
    pub min: Money,
    pub max: Money,
}

impl PriceBounds {
    pub fn contains(&self, value: Money) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Round `current` to a whole amount and move it one step.
/// An empty input counts as zero; anything unparsable or too large to
/// hold in cents yields `None`.
pub fn step_price(current: &str, direction: StepDirection) -> Option<Money> {
    let trimmed = current.trim();
    let value: f64 = if trimmed.is_empty() { 0.0 } else { trimmed.parse().ok()? };
    let rounded = (value + 0.5).floor();
    if !rounded.is_finite() || rounded.abs() >= i64::MAX as f64 {
        return None;
    }
    let whole = Money::from_cents((rounded as i64).checked_mul(100)?);
    match direction {
        StepDirection::Up => whole.checked_add(PRICE_STEP),
        StepDirection::Down => whole.checked_sub(PRICE_STEP),
    }
}

/// Next input text for a held arrow, or `None` to keep the current value
pub fn next_price(current: &str, direction: StepDirection, bounds: PriceBounds) -> Option<String> {
    step_price(current, direction)
        .filter(|value| bounds.contains(*value))
        .map(|value| value.to_string())
}
