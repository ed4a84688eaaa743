//! Exchange rate types and lookup.
//!
//! Lookup priority for a pair:
//! 1. Same currency (rate of 1)
//! 2. Direct rate (from -> to)
//! 3. Inverse rate (to -> from, then invert)
//! 4. Triangulation through the table's base currency

use std::collections::BTreeSet;

use polyglot_shared::RatesConfig;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::conversion::round_bankers;
use super::definition::CurrencyDef;
use super::error::{CurrencyError, CurrencyResult};

/// Decimal places kept on every looked-up rate.
pub const RATE_DECIMAL_PLACES: u32 = 8;

/// Rounds a rate to [`RATE_DECIMAL_PLACES`].
///
/// A positive rate below the last kept place keeps that many significant
/// digits instead, so a quotable pair never reads as zero.
fn round_rate(rate: Decimal) -> Decimal {
    let rounded = round_bankers(rate, RATE_DECIMAL_PLACES);
    if rounded.is_zero() && !rate.is_zero() {
        rate.round_sf_with_strategy(RATE_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
            .map_or(rate, |r| r.normalize())
    } else {
        rounded
    }
}

/// Exchange rate between two currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency code.
    pub from_currency: String,
    /// Target currency code.
    pub to_currency: String,
    /// Exchange rate (1 from_currency = rate to_currency).
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Creates a new exchange rate, canonicalizing both codes.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown currencies or a non-positive rate.
    pub fn new(from_currency: &str, to_currency: &str, rate: Decimal) -> CurrencyResult<Self> {
        let from = CurrencyDef::find(from_currency)?;
        let to = CurrencyDef::find(to_currency)?;
        if rate <= Decimal::ZERO {
            return Err(CurrencyError::NonPositiveRate {
                from: from.code.to_string(),
                to: to.code.to_string(),
                rate: rate.to_string(),
            });
        }
        Ok(Self {
            from_currency: from.code.to_string(),
            to_currency: to.code.to_string(),
            rate,
        })
    }

    /// The opposite pair, quoted at `1 / rate`.
    ///
    /// `None` when the reciprocal is not representable.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        Some(Self {
            from_currency: self.to_currency.clone(),
            to_currency: self.from_currency.clone(),
            rate: Decimal::ONE.checked_div(self.rate)?,
        })
    }
}

/// How a rate was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateLookupMethod {
    /// Direct rate found (or same currency).
    Direct,
    /// Inverse of the opposite pair.
    Inverse,
    /// Triangulated through the base currency.
    Triangulated,
}

/// Result of a rate lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLookup {
    /// Rate rounded to [`RATE_DECIMAL_PLACES`], or to that many significant
    /// digits when smaller.
    pub rate: Decimal,
    /// How the rate was obtained.
    pub method: RateLookupMethod,
}

/// Immutable set of exchange rates quoted around a base currency.
#[derive(Debug, Clone)]
pub struct RateTable {
    base: &'static CurrencyDef,
    rates: Vec<ExchangeRate>,
}

impl RateTable {
    /// Creates a rate table.
    ///
    /// # Errors
    ///
    /// Returns an error if the base currency is unknown.
    pub fn new(base: &str, rates: Vec<ExchangeRate>) -> CurrencyResult<Self> {
        Ok(Self {
            base: CurrencyDef::find(base)?,
            rates,
        })
    }

    /// Builds a table from `1 base = rate target` configuration entries.
    pub fn from_config(config: &RatesConfig) -> CurrencyResult<Self> {
        let rates = config
            .values
            .iter()
            .map(|(code, rate)| ExchangeRate::new(&config.base, code, *rate))
            .collect::<CurrencyResult<Vec<_>>>()?;
        Self::new(&config.base, rates)
    }

    /// Base currency code.
    #[must_use]
    pub fn base(&self) -> &'static str {
        self.base.code
    }

    /// Every currency the table can quote, sorted by code.
    #[must_use]
    pub fn currencies(&self) -> Vec<&str> {
        let mut codes: BTreeSet<&str> = BTreeSet::new();
        codes.insert(self.base.code);
        for rate in &self.rates {
            codes.insert(&rate.from_currency);
            codes.insert(&rate.to_currency);
        }
        codes.into_iter().collect()
    }

    /// Finds the rate to convert `from` into `to`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCurrency` for codes outside the currency table and
    /// `RateNotFound` when no direct, inverse or triangulated rate exists.
    pub fn find_rate(&self, from: &str, to: &str) -> CurrencyResult<RateLookup> {
        let from = CurrencyDef::find(from)?.code;
        let to = CurrencyDef::find(to)?.code;

        let (rate, method) = self.resolve(from, to).ok_or_else(|| CurrencyError::RateNotFound {
            from: from.to_string(),
            to: to.to_string(),
        })?;

        Ok(RateLookup {
            rate: round_rate(rate),
            method,
        })
    }

    fn resolve(&self, from: &str, to: &str) -> Option<(Decimal, RateLookupMethod)> {
        if from == to {
            return Some((Decimal::ONE, RateLookupMethod::Direct));
        }

        if let Some(quote) = self.quote(from, to) {
            return Some(quote);
        }

        let base = self.base.code;
        if from != base && to != base {
            let (from_to_base, _) = self.quote(from, base)?;
            let (base_to_target, _) = self.quote(base, to)?;
            return from_to_base
                .checked_mul(base_to_target)
                .map(|rate| (rate, RateLookupMethod::Triangulated));
        }

        None
    }

    fn pair(&self, from: &str, to: &str) -> Option<&ExchangeRate> {
        self.rates
            .iter()
            .find(|r| r.from_currency == from && r.to_currency == to)
    }

    /// Direct rate, else the inverse of the opposite pair.
    fn quote(&self, from: &str, to: &str) -> Option<(Decimal, RateLookupMethod)> {
        if let Some(direct) = self.pair(from, to) {
            return Some((direct.rate, RateLookupMethod::Direct));
        }
        self.pair(to, from)
            .and_then(ExchangeRate::inverse)
            .map(|inverse| (inverse.rate, RateLookupMethod::Inverse))
    }
}
