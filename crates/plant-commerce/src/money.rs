//! Price type for representing VND amounts.
//!
//! The storefront sells in Vietnamese dong, which has no minor unit, so a
//! price is a whole number of dong held in an `i64`. Arithmetic is checked to
//! avoid silent overflow in cart totals.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::ops::Add;

/// Currency suffix used when displaying prices.
pub const CURRENCY_SUFFIX: &str = "VND";

/// A price in whole VND.
///
/// Admin forms submit numeric inputs as strings, so deserialization accepts a
/// JSON integer, a JSON float (rounded) or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a price from a whole VND amount.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Create a zero price.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in VND.
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a price typed into a form field.
    ///
    /// Surrounding whitespace and dot/comma thousands separators are
    /// ignored. Returns `None` for anything that is not a whole number.
    pub fn parse(input: &str) -> Option<Self> {
        let cleaned: String = input
            .trim()
            .chars()
            .filter(|c| *c != '.' && *c != ',' && *c != ' ')
            .collect();
        if cleaned.is_empty() {
            return None;
        }
        cleaned.parse::<i64>().ok().map(Self)
    }

    /// Try to add two prices.
    pub fn try_add(&self, other: &Price) -> Option<Price> {
        self.0.checked_add(other.0).map(Price)
    }

    /// Try to multiply by a quantity.
    pub fn try_multiply(&self, quantity: u64) -> Option<Price> {
        let quantity = i64::try_from(quantity).ok()?;
        self.0.checked_mul(quantity).map(Price)
    }

    /// Sum prices, returning `None` on overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Price>) -> Option<Price> {
        iter.try_fold(Price::zero(), |acc, p| acc.try_add(p))
    }

    /// Format with dot thousands separators, e.g. `10.000`.
    pub fn display_amount(&self) -> String {
        format_number_with_dots(self.0)
    }

    /// Format for display, e.g. `10.000 VND`.
    pub fn display(&self) -> String {
        format!("{} {}", self.display_amount(), CURRENCY_SUFFIX)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Ok(Price(n)),
            Raw::Float(f) if f.is_finite() => Ok(Price(f.round() as i64)),
            Raw::Float(f) => Err(serde::de::Error::custom(format!("invalid price: {f}"))),
            Raw::Text(s) => Price::parse(&s)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid price: {s:?}"))),
        }
    }
}

/// Group the digits of `n` in threes with dots: `1234567` -> `1.234.567`.
pub fn format_number_with_dots(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
