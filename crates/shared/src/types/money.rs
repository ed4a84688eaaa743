//! Money type with integer minor units and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are counted in the smallest currency unit (e.g., cents).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by money values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Currency code is not three ASCII letters.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),

    /// Operands carry different currencies.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        /// Currency of the left operand.
        expected: CurrencyCode,
        /// Currency of the right operand.
        got: CurrencyCode,
    },

    /// Result does not fit in the minor-unit range.
    #[error("Amount overflow")]
    Overflow,
}

/// ISO 4217 style currency code, always stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 3 && s.bytes().all(|b| b.is_ascii_alphabetic()) {
            Ok(Self(s.to_ascii_uppercase()))
        } else {
            Err(MoneyError::InvalidCurrencyCode(s.to_string()))
        }
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

/// Represents a monetary amount with currency.
///
/// The amount is an integer count of minor units; there are no fractional
/// minor units. Operations return new values instead of mutating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// The amount in the smallest currency unit (e.g., cents).
    pub amount: i64,
    /// Currency code (e.g., "USD", "JPY").
    pub currency: CurrencyCode,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: i64, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Adds two amounts of the same currency.
    pub fn checked_add(&self, other: &Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self::new(amount, self.currency.clone()))
    }

    /// Orders two amounts of the same currency.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    fn ensure_same_currency(&self, other: &Self) -> Result<(), MoneyError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency.clone(),
                got: other.currency.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd() -> CurrencyCode {
        "USD".parse().unwrap()
    }

    #[test]
    fn test_money_new() {
        let money = Money::new(1234, usd());
        assert_eq!(money.amount, 1234);
        assert_eq!(money.currency.as_str(), "USD");
    }

    #[test]
    fn test_checked_add() {
        let sum = Money::new(150, usd()).checked_add(&Money::new(-50, usd())).unwrap();
        assert_eq!(sum, Money::new(100, usd()));
    }

    #[test]
    fn test_checked_add_overflow() {
        let result = Money::new(i64::MAX, usd()).checked_add(&Money::new(1, usd()));
        assert_eq!(result, Err(MoneyError::Overflow));
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let eur: CurrencyCode = "EUR".parse().unwrap();
        let err = Money::new(1, usd())
            .checked_add(&Money::new(1, eur.clone()))
            .unwrap_err();
        assert_eq!(
            err,
            MoneyError::CurrencyMismatch {
                expected: usd(),
                got: eur.clone()
            }
        );
        assert!(Money::new(1, usd()).try_cmp(&Money::new(1, eur)).is_err());
    }

    #[test]
    fn test_try_cmp() {
        assert_eq!(
            Money::new(2, usd()).try_cmp(&Money::new(1, usd())),
            Ok(Ordering::Greater)
        );
        assert_eq!(
            Money::new(1, usd()).try_cmp(&Money::new(1, usd())),
            Ok(Ordering::Equal)
        );
    }

    #[test]
    fn test_currency_code_uppercases() {
        assert_eq!(CurrencyCode::from_str("usd").unwrap().as_str(), "USD");
    }

    #[rstest::rstest]
    #[case("")]
    #[case("US")]
    #[case("US1")]
    #[case("USDX")]
    #[case("€UR")]
    fn test_currency_code_rejects(#[case] raw: &str) {
        assert_eq!(
            CurrencyCode::from_str(raw),
            Err(MoneyError::InvalidCurrencyCode(raw.to_string()))
        );
    }

    #[test]
    fn test_money_serde() {
        let json = serde_json::to_value(Money::new(1234, usd())).unwrap();
        assert_eq!(json, serde_json::json!({ "amount": 1234, "currency": "USD" }));

        let parsed: Money = serde_json::from_str(r#"{"amount":5,"currency":"eur"}"#).unwrap();
        assert_eq!(parsed.currency.as_str(), "EUR");
        assert!(serde_json::from_str::<Money>(r#"{"amount":5,"currency":"EURO"}"#).is_err());
    }
}
