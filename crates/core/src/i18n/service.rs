//! I18n service answering conversion and language queries.
//!
//! The service is built once from configuration and is immutable afterwards,
//! so it can be shared across requests behind an `Arc` without locking.

use std::collections::HashSet;

use polyglot_shared::I18nConfig;
use polyglot_shared::types::Language;

use super::error::I18nError;
use super::types::{CurrencyConversion, CurrencyConversionDict, I18nInfo};
use crate::currency::locale::is_well_formed;
use crate::currency::{CurrencyDef, RateTable};

/// Serves currency conversions and the supported language list.
#[derive(Debug, Clone)]
pub struct I18nService {
    rates: RateTable,
    languages: Vec<Language>,
    cms_currency: &'static CurrencyDef,
}

impl I18nService {
    /// Creates the service.
    ///
    /// # Errors
    ///
    /// Returns an error if the CMS currency is unknown or cannot be quoted by
    /// the rate table, or if the language list holds malformed or repeated tags.
    pub fn new(
        rates: RateTable,
        languages: Vec<Language>,
        cms_currency: &str,
    ) -> Result<Self, I18nError> {
        let cms_currency = CurrencyDef::find(cms_currency)?;
        rates.find_rate(cms_currency.code, rates.base())?;

        let mut seen = HashSet::new();
        for language in &languages {
            if !is_well_formed(&language.code) {
                return Err(I18nError::InvalidLanguage(language.code.clone()));
            }
            if !seen.insert(language.code.to_ascii_lowercase()) {
                return Err(I18nError::DuplicateLanguage(language.code.clone()));
            }
        }

        Ok(Self {
            rates,
            languages,
            cms_currency,
        })
    }

    /// Builds the service from the `i18n` configuration section.
    pub fn from_config(config: &I18nConfig) -> Result<Self, I18nError> {
        let rates = RateTable::from_config(&config.rates)?;
        Self::new(rates, config.languages.clone(), &config.currency)
    }

    /// Currency used when a request names no source currency.
    #[must_use]
    pub fn cms_currency(&self) -> &'static str {
        self.cms_currency.code
    }

    /// Underlying rate table.
    #[must_use]
    pub const fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Rate from `source` (or the CMS currency) to `target`.
    pub fn currency_conversion(
        &self,
        source: Option<&str>,
        target: &str,
    ) -> Result<CurrencyConversion, I18nError> {
        let source = self.source_or_default(source)?;
        let target = CurrencyDef::find(target)?.code;
        let lookup = self.rates.find_rate(source, target)?;

        Ok(CurrencyConversion {
            source_currency: source.to_string(),
            target_currency: target.to_string(),
            exchange_rate: lookup.rate,
        })
    }

    /// Rates from `source` (or the CMS currency) to every quotable currency.
    pub fn currency_conversions(
        &self,
        source: Option<&str>,
    ) -> Result<CurrencyConversionDict, I18nError> {
        let source = self.source_or_default(source)?;
        let mut dict = CurrencyConversionDict::default();
        for target in self.rates.currencies() {
            let lookup = self.rates.find_rate(source, target)?;
            dict.0.insert(target.to_string(), lookup.rate);
        }
        Ok(dict)
    }

    /// Supported languages in configured order.
    #[must_use]
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Conversions from the CMS currency together with the language list.
    pub fn i18n_info(&self) -> Result<I18nInfo, I18nError> {
        Ok(I18nInfo {
            currency_conversions: self.currency_conversions(None)?,
            languages: self.languages.clone(),
        })
    }

    fn source_or_default(&self, source: Option<&str>) -> Result<&'static str, I18nError> {
        match source {
            Some(code) => Ok(CurrencyDef::find(code)?.code),
            None => Ok(self.cms_currency.code),
        }
    }
}
