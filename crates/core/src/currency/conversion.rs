//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - Always round to the target currency's minor unit
//! - Use banker's rounding (round half to even)

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::definition::CurrencyDef;
use super::error::{CurrencyError, CurrencyResult};

/// Round a decimal value using Banker's Rounding (MidpointNearestEven).
#[must_use]
pub fn round_bankers(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}

/// Applies `rate` to `amount` and rounds to `decimal_places`.
///
/// # Errors
///
/// Returns `CurrencyError::Overflow` if the product does not fit in a `Decimal`.
pub fn convert_amount(
    amount: Decimal,
    rate: Decimal,
    decimal_places: u32,
) -> CurrencyResult<Decimal> {
    amount
        .checked_mul(rate)
        .map(|converted| round_bankers(converted, decimal_places))
        .ok_or(CurrencyError::Overflow)
}

/// Converts a minor-unit amount of `from` into minor units of `to`.
///
/// `rate` reads as `1 from = rate to` in major units. Currencies with
/// different exponents are handled (USD cents to whole JPY, etc).
///
/// # Errors
///
/// Returns `CurrencyError::Overflow` if the result does not fit in `i64`.
pub fn convert_minor(
    amount: i64,
    from: &CurrencyDef,
    to: &CurrencyDef,
    rate: Decimal,
) -> CurrencyResult<i64> {
    let major = Decimal::from(amount)
        .checked_div(from.factor()?)
        .ok_or(CurrencyError::Overflow)?;
    let unscaled = major
        .checked_mul(to.factor()?)
        .ok_or(CurrencyError::Overflow)?;
    convert_amount(unscaled, rate, 0)?
        .to_i64()
        .ok_or(CurrencyError::Overflow)
}
