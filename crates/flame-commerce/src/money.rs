//! Money type for representing menu prices.
//!
//! Amounts are integers in the smallest unit of the currency (paise, cents,
//! pence). Arithmetic saturates rather than overflowing, so pricing a cart is
//! a total function.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    ZAR,
    GBP,
    USD,
    AUD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::ZAR => "ZAR",
            Currency::GBP => "GBP",
            Currency::USD => "USD",
            Currency::AUD => "AUD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::ZAR => "R",
            Currency::GBP => "\u{00a3}",
            Currency::USD => "$",
            Currency::AUD => "A$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Minor units per major unit. Every supported currency uses two decimals.
    pub const fn minor_per_major(&self) -> i64 {
        100
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "ZAR" => Some(Currency::ZAR),
            "GBP" => Some(Currency::GBP),
            "USD" => Some(Currency::USD),
            "AUD" => Some(Currency::AUD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub const fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from whole major units.
    ///
    /// ```
    /// use flame_commerce::money::{Money, Currency};
    /// let price = Money::from_major(349, Currency::INR);
    /// assert_eq!(price.amount_minor, 34900);
    /// ```
    pub const fn from_major(amount: i64, currency: Currency) -> Self {
        Self::new(amount.saturating_mul(currency.minor_per_major()), currency)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Add another amount, saturating at the bounds of `i64`.
    ///
    /// Mixing currencies is a caller bug; the result keeps `self`'s currency.
    pub fn saturating_add(&self, other: &Money) -> Money {
        debug_assert_eq!(self.currency, other.currency, "currency mismatch");
        Money::new(
            self.amount_minor.saturating_add(other.amount_minor),
            self.currency,
        )
    }

    /// Multiply by a quantity, saturating at the bounds of `i64`.
    pub fn times(&self, quantity: i64) -> Money {
        Money::new(self.amount_minor.saturating_mul(quantity), self.currency)
    }

    /// Sum an iterator of Money values.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| acc.saturating_add(m))
    }

    /// Format as a display string (e.g., "₹349.00").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format without symbol (e.g., "349.00").
    pub fn display_amount(&self) -> String {
        let per = self.currency.minor_per_major();
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let abs = self.amount_minor.unsigned_abs();
        format!(
            "{}{}.{:02}",
            sign,
            abs / per as u64,
            abs % per as u64
        )
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        self.saturating_add(&other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, quantity: i64) -> Money {
        self.times(quantity)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_major() {
        let m = Money::from_major(99, Currency::INR);
        assert_eq!(m.amount_minor, 9900);
        assert_eq!(m.currency, Currency::INR);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(34900, Currency::INR).display(), "\u{20b9}349.00");
        assert_eq!(Money::new(1205, Currency::GBP).display(), "\u{00a3}12.05");
        assert_eq!(Money::new(-50, Currency::USD).display(), "$-0.50");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(29900, Currency::INR);
        let b = Money::new(9900, Currency::INR);
        assert_eq!((a + b).amount_minor, 39800);
    }

    #[test]
    fn test_money_times() {
        let m = Money::new(398, Currency::INR);
        assert_eq!(m.times(2).amount_minor, 796);
        assert_eq!((m * 3).amount_minor, 1194);
    }

    #[test]
    fn test_money_saturates() {
        let m = Money::new(i64::MAX, Currency::INR);
        assert_eq!(m.times(2).amount_minor, i64::MAX);
        assert_eq!((m + Money::new(1, Currency::INR)).amount_minor, i64::MAX);
    }

    #[test]
    fn test_money_sum() {
        let values = [Money::new(100, Currency::ZAR), Money::new(250, Currency::ZAR)];
        assert_eq!(Money::sum(values.iter(), Currency::ZAR).amount_minor, 350);
        let empty: [Money; 0] = [];
        assert!(Money::sum(empty.iter(), Currency::ZAR).is_zero());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!(Currency::from_code("zar"), Some(Currency::ZAR));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
