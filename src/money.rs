//! Money and Fractions
//!
//! Fixed-point amounts as the server sends them. Decimal fields arrive either
//! as JSON strings ("45.00") or numbers, so both decode.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};

/// Amount of money in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse "$45.00", "45", "45.5" or "-5.00".
    /// Currency symbols and whitespace around the number are ignored;
    /// digits past the cent are rounded half-up.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let negative = trimmed.starts_with('-');
        let number: &str = trimmed.trim_start_matches(|c: char| !c.is_ascii_digit() && c != '.');
        parse_fixed(number, 2).map(|cents| Money(if negative { -cents } else { cents }))
    }

    pub fn from_f64(value: f64) -> Self {
        Money((value * 100.0).round() as i64)
    }

    /// Floor at zero
    pub fn non_negative(self) -> Self {
        Money(self.0.max(0))
    }

    /// `self × fraction`, rounded half-up to the cent; saturates at the
    /// `i64` range
    pub fn apply(self, fraction: Fraction) -> Self {
        let scaled = self.0 as i128 * fraction.basis_points() as i128;
        let rounded = if scaled >= 0 {
            (scaled + 5_000) / 10_000
        } else {
            (scaled - 5_000) / 10_000
        };
        Money(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    /// "$45.00" with the given currency symbol, sign in front of the symbol
    pub fn with_symbol(&self, symbol: &str) -> String {
        if self.0 < 0 {
            format!("-{}{}", symbol, Money(-self.0))
        } else {
            format!("{}{}", symbol, self)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Discount fraction in basis points (0.1 == 1000)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fraction(i64);

impl Fraction {
    pub fn from_basis_points(bp: i64) -> Self {
        Fraction(bp)
    }

    pub fn basis_points(&self) -> i64 {
        self.0
    }

    pub fn parse(text: &str) -> Option<Self> {
        parse_fixed(text.trim(), 4).map(Fraction)
    }

    pub fn from_f64(value: f64) -> Self {
        Fraction((value * 10_000.0).round() as i64)
    }
}

/// Parse an unsigned decimal into an integer scaled by 10^scale;
/// `None` when it does not fit an `i64`
fn parse_fixed(text: &str, scale: u32) -> Option<i64> {
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.chars().all(|c| c.is_ascii_digit()) || !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole: i64 = if int_part.is_empty() { 0 } else { int_part.parse().ok()? };
    let factor = 10_i64.pow(scale);
    let digits: Vec<i64> = frac_part.bytes().map(|b| (b - b'0') as i64).collect();

    let mut frac: i64 = 0;
    for i in 0..scale as usize {
        frac = frac * 10 + digits.get(i).copied().unwrap_or(0);
    }
    if digits.get(scale as usize).map_or(false, |d| *d >= 5) {
        frac += 1;
    }
    whole.checked_mul(factor)?.checked_add(frac)
}

// ========================
// Serde
// ========================

#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalRepr {
    Text(String),
    Number(f64),
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match DecimalRepr::deserialize(deserializer)? {
            DecimalRepr::Text(text) => Money::parse(&text)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid amount: {text:?}"))),
            DecimalRepr::Number(n) => Ok(Money::from_f64(n)),
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Fraction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match DecimalRepr::deserialize(deserializer)? {
            DecimalRepr::Text(text) => Fraction::parse(&text)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid fraction: {text:?}"))),
            DecimalRepr::Number(n) => Ok(Fraction::from_f64(n)),
        }
    }
}

/// Rating value sent as string or number
pub fn de_f64_lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match DecimalRepr::deserialize(deserializer)? {
        DecimalRepr::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid number: {text:?}"))),
        DecimalRepr::Number(n) => Ok(n),
    }
}
