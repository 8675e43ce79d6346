//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

    /// Create a USD price from a whole-dollar amount.
    #[must_use]
    pub fn usd(dollars: i64) -> Self {
        Self::new(Decimal::from(dollars), CurrencyCode::USD)
    }

    /// Create a price from an amount in minor units (cents).
    #[must_use]
    pub fn from_cents(cents: i64, currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::new(cents, 2), currency_code)
    }

    /// Format for display the way the storefront shows prices.
    ///
    /// Whole amounts drop the cents (`$1,499`); fractional amounts keep two
    /// decimal places (`$19.99`). The integer part is grouped by thousands.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let abs = rounded.abs();
        let whole = abs.trunc();
        let cents = ((abs - whole) * Decimal::ONE_HUNDRED)
            .to_u32()
            .unwrap_or_default();
        let grouped = group_thousands(whole.to_u128().unwrap_or_default());
        let symbol = self.currency_code.symbol();

        if cents == 0 {
            format!("{sign}{symbol}{grouped}")
        } else {
            format!("{sign}{symbol}{grouped}.{cents:02}")
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Percentage saved when paying `sale` instead of `original`, rounded to the
/// nearest whole percent.
///
/// Returns `None` when there is no discount (sale not below original) or the
/// inputs are not meaningful (non-positive original, negative sale).
#[must_use]
pub fn discount_percent(original: Decimal, sale: Decimal) -> Option<u32> {
    if original <= Decimal::ZERO || sale < Decimal::ZERO || sale >= original {
        return None;
    }

    ((original - sale) / original * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// ISO 4217 alphabetic code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_amounts_group_thousands() {
        assert_eq!(Price::usd(1499).display(), "$1,499");
        assert_eq!(Price::usd(8500).display(), "$8,500");
        assert_eq!(Price::usd(420).display(), "$420");
        assert_eq!(Price::usd(1_250_000).display(), "$1,250,000");
    }

    #[test]
    fn test_display_fractional_amounts() {
        assert_eq!(
            Price::from_cents(1999, CurrencyCode::USD).display(),
            "$19.99"
        );
        assert_eq!(
            Price::from_cents(123_405, CurrencyCode::GBP).display(),
            "£1,234.05"
        );
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Price::usd(-25).display(), "-$25");
    }

    #[test]
    fn test_discount_percent_matches_showcase_badges() {
        let pct = |o: i64, s: i64| discount_percent(Decimal::from(o), Decimal::from(s));
        assert_eq!(pct(2140, 1499), Some(30));
        assert_eq!(pct(7999, 5999), Some(25));
        assert_eq!(pct(700, 420), Some(40));
        assert_eq!(pct(1999, 1299), Some(35));
    }

    #[test]
    fn test_discount_percent_without_discount() {
        let pct = |o: i64, s: i64| discount_percent(Decimal::from(o), Decimal::from(s));
        assert_eq!(pct(100, 100), None);
        assert_eq!(pct(100, 120), None);
        assert_eq!(pct(0, 0), None);
        assert_eq!(pct(100, -1), None);
    }

    #[test]
    fn test_currency_codes() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::USD);
        assert_eq!(CurrencyCode::EUR.symbol(), "€");
        assert_eq!(CurrencyCode::AUD.code(), "AUD");
    }
}
