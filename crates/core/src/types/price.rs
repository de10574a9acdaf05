//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored as `rust_decimal::Decimal` so that cart totals are
//! exact: intermediate sums never round, and display formatting is the only
//! place a value is reduced to two decimal places.

use core::ops::{Add, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from an amount in the smallest currency unit.
    #[must_use]
    pub fn from_cents(cents: i64, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
            currency_code,
        }
    }

    /// A zero price in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code,
        }
    }

    /// Format for display (e.g., `$19.99`).
    ///
    /// Rounding to two decimal places happens here and only here.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// Summing prices assumes a single-currency catalog; the left-hand currency
/// is kept.
impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            amount: self.amount + rhs.amount,
            currency_code: self.currency_code,
        }
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(quantity),
            currency_code: self.currency_code,
        }
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Currency symbol used for display.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(5999, CurrencyCode::USD);
        assert_eq!(price.amount, Decimal::new(5999, 2));
        assert_eq!(price.display(), "$59.99");
    }

    #[test]
    fn test_from_cents_zero() {
        assert_eq!(Price::from_cents(0, CurrencyCode::USD).display(), "$0.00");
        assert_eq!(
            Price::from_cents(0, CurrencyCode::USD),
            Price::zero(CurrencyCode::USD)
        );
    }

    #[test]
    fn test_display_pads_to_two_places() {
        let price = Price::new(Decimal::new(10, 0), CurrencyCode::USD);
        assert_eq!(price.display(), "$10.00");
    }

    #[test]
    fn test_sum_is_exact() {
        // 0.1 + 0.2 drifts under f64; Decimal must not.
        let a = Price::from_cents(10, CurrencyCode::USD);
        let b = Price::from_cents(20, CurrencyCode::USD);
        assert_eq!((a + b).amount, Decimal::new(30, 2));
    }

    #[test]
    fn test_mul_by_quantity() {
        let price = Price::from_cents(1499, CurrencyCode::USD);
        assert_eq!((price * 3).display(), "$44.97");
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(CurrencyCode::USD.symbol(), "$");
        assert_eq!(CurrencyCode::USD.code(), "USD");
    }
}
