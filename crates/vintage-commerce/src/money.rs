//! Prices in integer minor units.
//!
//! Catalog prices arrive as whole cents (or yen); the storefront only ever
//! compares, sums, and formats them, so no float ever touches an amount.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies the shop prices in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// ISO code, e.g. "USD".
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Digits after the decimal point in displayed amounts.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An amount in the currency's smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    pub amount_cents: i64,
    /// Snapshots may omit it; the shop default applies.
    #[serde(default)]
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Clamp negative amounts to zero.
    pub fn non_negative(&self) -> Self {
        Self::new(self.amount_cents.max(0), self.currency)
    }

    /// Price label as the card shows it, e.g. "$49.99" or "¥100".
    ///
    /// ```
    /// use vintage_commerce::money::{Currency, Money};
    /// assert_eq!(Money::new(-1205, Currency::USD).display(), "-$12.05");
    /// ```
    pub fn display(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let symbol = self.currency.symbol();
        let abs = self.amount_cents.unsigned_abs();
        match self.currency.decimal_places() {
            0 => format!("{}{}{}", sign, symbol, abs),
            places => {
                let unit = 10_u64.pow(places);
                format!(
                    "{}{}{}.{:0width$}",
                    sign,
                    symbol,
                    abs / unit,
                    abs % unit,
                    width = places as usize
                )
            }
        }
    }

    /// `None` on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|amount| Money::new(amount, self.currency))
    }

    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum in `currency`; `None` if any amount is in another currency or the total overflows.
    pub fn try_sum<'a>(
        mut amounts: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        amounts.try_fold(Money::zero(currency), |total, m| total.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_money_display() {
        assert_eq!(usd(4999).display(), "$49.99");
        assert_eq!(usd(9000).display(), "$90.00");
        assert_eq!(usd(5).display(), "$0.05");
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5}100");
        assert_eq!(Money::new(12000, Currency::EUR).to_string(), "\u{20ac}120.00");
    }

    #[test]
    fn test_money_checked_arithmetic() {
        assert_eq!(usd(1000).try_add(&usd(500)).unwrap().amount_cents, 1500);
        assert_eq!(usd(1000).try_multiply(3).unwrap().amount_cents, 3000);
        assert!(usd(i64::MAX).try_multiply(2).is_none());
        assert!(usd(i64::MAX).try_add(&usd(1)).is_none());
    }

    #[test]
    fn test_money_try_sum() {
        let prices = [usd(10000), usd(9000), usd(4500)];
        assert_eq!(Money::try_sum(prices.iter(), Currency::USD), Some(usd(23500)));
        assert_eq!(
            Money::try_sum([].iter(), Currency::GBP),
            Some(Money::zero(Currency::GBP))
        );
        assert!(Money::try_sum([usd(i64::MAX), usd(1)].iter(), Currency::USD).is_none());
    }

    #[test]
    fn test_money_currency_mismatch() {
        let eur = Money::new(1000, Currency::EUR);
        assert!(usd(1000).try_add(&eur).is_none());
        assert!(Money::try_sum([usd(1000), eur].iter(), Currency::USD).is_none());
    }

    #[test]
    fn test_money_non_negative() {
        assert_eq!(usd(-50).non_negative().amount_cents, 0);
        assert_eq!(usd(50).non_negative().amount_cents, 50);
    }

    #[test]
    fn test_money_deserialize_defaults_currency() {
        let m: Money = serde_json::from_str(r#"{"amount_cents": 2500}"#).unwrap();
        assert_eq!(m, usd(2500));
    }
}
