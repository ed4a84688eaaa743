//! Conversion between integer minor units and human-facing values.
//!
//! Every operation is a pure computation over its inputs, the static currency
//! table and the [`CurrencySettings`] the formatter was built with. When a
//! currency code is omitted the configured default is used; an unknown code is
//! always an error and never falls back to the default.

use std::str::FromStr;

use polyglot_shared::I18nConfig;
use polyglot_shared::types::{CurrencyCode, Money};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::definition::CurrencyDef;
use super::error::{CurrencyError, CurrencyResult};
use super::locale::LocaleFormat;

/// Defaults applied when a call omits the currency or locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencySettings {
    /// Currency code used when none is given.
    pub default_currency: String,
    /// Locale tag used when none is given.
    pub default_locale: String,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            default_currency: "USD".to_string(),
            default_locale: "en-US".to_string(),
        }
    }
}

impl From<&I18nConfig> for CurrencySettings {
    fn from(config: &I18nConfig) -> Self {
        Self {
            default_currency: config.currency.clone(),
            default_locale: config.locale.clone(),
        }
    }
}

/// Amount accepted by [`CurrencyFormatter::format_currency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountInput<'a> {
    /// Already in minor units.
    Minor(i64),
    /// Major-unit decimal text such as `"12.34"`.
    Decimal(&'a str),
    /// No amount; treated as zero.
    Missing,
}

impl From<i64> for AmountInput<'_> {
    fn from(amount: i64) -> Self {
        Self::Minor(amount)
    }
}

impl<'a> From<&'a str> for AmountInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Decimal(text)
    }
}

impl<'a> From<&'a String> for AmountInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Decimal(text)
    }
}

impl<'a, T: Into<AmountInput<'a>>> From<Option<T>> for AmountInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Major-unit value accepted by [`CurrencyFormatter::format_float_to_int`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecimalInput<'a> {
    /// Parsed value.
    Value(Decimal),
    /// Decimal text, parsed on use.
    Text(&'a str),
}

impl From<Decimal> for DecimalInput<'_> {
    fn from(value: Decimal) -> Self {
        Self::Value(value)
    }
}

impl<'a> From<&'a str> for DecimalInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl DecimalInput<'_> {
    fn value(self) -> CurrencyResult<Decimal> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Text(text) => parse_decimal(text),
        }
    }
}

/// Currency-aware formatting over integer minor units.
#[derive(Debug, Clone, Default)]
pub struct CurrencyFormatter {
    settings: CurrencySettings,
}

impl CurrencyFormatter {
    /// Creates a formatter with explicit defaults.
    #[must_use]
    pub const fn new(settings: CurrencySettings) -> Self {
        Self { settings }
    }

    /// Looks up `code`, or the default currency when `None`.
    pub fn currency(&self, code: Option<&str>) -> CurrencyResult<&'static CurrencyDef> {
        CurrencyDef::find(code.unwrap_or(&self.settings.default_currency))
    }

    /// Renders an amount for display (`"$12.34"`).
    ///
    /// Minor units are used as-is, decimal text is rounded half-up to the
    /// nearest minor unit, and a missing amount renders as zero.
    ///
    /// Decimal text is scaled by the currency's own `base^exponent`, not a
    /// fixed 100: `"1234"` is ¥1,234 for JPY and 1.234 KWD is 1234 fils.
    pub fn format_currency<'a>(
        &self,
        value: impl Into<AmountInput<'a>>,
        locale: Option<&str>,
        code: Option<&str>,
    ) -> CurrencyResult<String> {
        let currency = self.currency(code)?;
        let amount = match value.into() {
            AmountInput::Minor(amount) => amount,
            AmountInput::Decimal(text) => to_minor_units(parse_decimal(text)?, currency)?,
            AmountInput::Missing => 0,
        };
        let format = LocaleFormat::resolve(locale.unwrap_or(&self.settings.default_locale))?;
        Ok(format.render(to_major_units(amount, currency)?, currency))
    }

    /// Reads `amount` as having `decimal_places` minor digits.
    ///
    /// Used when a stored amount's scale differs from the currency exponent:
    /// `format_to_decimal(123456, 4, "USD")` is `12.3456`.
    pub fn format_to_decimal(
        &self,
        amount: i64,
        decimal_places: u32,
        code: Option<&str>,
    ) -> CurrencyResult<Decimal> {
        let currency = self.currency(code)?;
        Decimal::from(amount)
            .checked_div(currency.scale(decimal_places)?)
            .ok_or(CurrencyError::Overflow)
    }

    /// Converts a major-unit value into minor units, rounding half-up.
    pub fn format_float_to_int<'a>(
        &self,
        value: impl Into<DecimalInput<'a>>,
        code: Option<&str>,
    ) -> CurrencyResult<i64> {
        let currency = self.currency(code)?;
        to_minor_units(value.into().value()?, currency)
    }

    /// Converts minor units into a fixed-decimal string with exactly
    /// `exponent` fraction digits and no grouping (`1234` USD is `"12.34"`).
    pub fn format_int_to_float(&self, amount: i64, code: Option<&str>) -> CurrencyResult<String> {
        let currency = self.currency(code)?;
        let mut major = to_major_units(amount, currency)?
            .round_dp_with_strategy(currency.exponent, RoundingStrategy::MidpointAwayFromZero);
        major.rescale(currency.exponent);
        Ok(major.to_string())
    }

    /// Adds two minor-unit amounts of the same currency.
    pub fn add_amount(&self, first: i64, second: i64, code: Option<&str>) -> CurrencyResult<Money> {
        let (first, second) = self.money_pair(first, second, code)?;
        Ok(first.checked_add(&second)?)
    }

    /// Returns true if `first > second`.
    pub fn is_greater_than(&self, first: i64, second: i64, code: Option<&str>) -> CurrencyResult<bool> {
        let (first, second) = self.money_pair(first, second, code)?;
        Ok(first.try_cmp(&second)?.is_gt())
    }

    /// Returns true if `first >= second`.
    pub fn is_greater_than_or_equal(
        &self,
        first: i64,
        second: i64,
        code: Option<&str>,
    ) -> CurrencyResult<bool> {
        let (first, second) = self.money_pair(first, second, code)?;
        Ok(first.try_cmp(&second)?.is_ge())
    }

    fn money_pair(&self, first: i64, second: i64, code: Option<&str>) -> CurrencyResult<(Money, Money)> {
        let currency = CurrencyCode::from_str(self.currency(code)?.code)?;
        Ok((Money::new(first, currency.clone()), Money::new(second, currency)))
    }
}

/// Parses major-unit decimal text (`"12.34"`, `"-0.5"`, `"1e3"`).
fn parse_decimal(text: &str) -> CurrencyResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CurrencyError::InvalidAmount(text.to_string()));
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| CurrencyError::InvalidAmount(text.to_string()))
}

/// `round_half_up(value * base^exponent)`
fn to_minor_units(value: Decimal, currency: &CurrencyDef) -> CurrencyResult<i64> {
    value
        .checked_mul(currency.factor()?)
        .ok_or(CurrencyError::Overflow)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(CurrencyError::Overflow)
}

fn to_major_units(amount: i64, currency: &CurrencyDef) -> CurrencyResult<Decimal> {
    Decimal::from(amount)
        .checked_div(currency.factor()?)
        .ok_or(CurrencyError::Overflow)
}
