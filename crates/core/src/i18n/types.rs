//! I18n response types.

use std::collections::BTreeMap;

use polyglot_shared::types::Language;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rate between a source and a target currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyConversion {
    /// Source currency code.
    pub source_currency: String,
    /// Target currency code.
    pub target_currency: String,
    /// 1 source = `exchange_rate` target.
    pub exchange_rate: Decimal,
}

/// Rates from one source currency to every known currency, keyed by code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyConversionDict(pub BTreeMap<String, Decimal>);

impl CurrencyConversionDict {
    /// Rate to `code`, if present.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<Decimal> {
        self.0.get(code).copied()
    }
}

/// Combined conversions and language list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nInfo {
    /// Conversions from the CMS currency.
    pub currency_conversions: CurrencyConversionDict,
    /// Supported languages in configured order.
    pub languages: Vec<Language>,
}
