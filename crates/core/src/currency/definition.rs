//! Static currency reference data.
//!
//! Each definition carries the radix (`base`) and the number of minor-unit
//! digits (`exponent`), so one major unit equals `base^exponent` minor units.
//! Symbols are the ones used by `en-US` rendering; locales may override them.

use rust_decimal::Decimal;

use super::error::{CurrencyError, CurrencyResult};

/// Reference data for a single currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyDef {
    /// ISO 4217 code.
    pub code: &'static str,
    /// English name.
    pub name: &'static str,
    /// Display symbol.
    pub symbol: &'static str,
    /// Radix of the minor unit, almost always 10.
    pub base: u32,
    /// Number of minor-unit digits.
    pub exponent: u32,
    /// Fraction digits shown when rendering for display.
    pub display_digits: u32,
}

impl CurrencyDef {
    const fn decimal(code: &'static str, name: &'static str, symbol: &'static str, exponent: u32) -> Self {
        Self {
            code,
            name,
            symbol,
            base: 10,
            exponent,
            display_digits: exponent,
        }
    }

    const fn non_decimal(
        code: &'static str,
        name: &'static str,
        base: u32,
        exponent: u32,
        display_digits: u32,
    ) -> Self {
        Self {
            code,
            name,
            symbol: code,
            base,
            exponent,
            display_digits,
        }
    }

    /// Looks up a currency by code, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnknownCurrency` when the code is not in the table.
    pub fn find(code: &str) -> CurrencyResult<&'static Self> {
        CURRENCIES
            .iter()
            .find(|def| def.code.eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| CurrencyError::UnknownCurrency(code.to_string()))
    }

    /// Returns every known currency.
    #[must_use]
    pub fn all() -> &'static [Self] {
        CURRENCIES
    }

    /// Minor units per major unit (`base^exponent`).
    pub fn factor(&self) -> CurrencyResult<Decimal> {
        self.scale(self.exponent)
    }

    /// Returns `base^places`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::Overflow` when the power exceeds `Decimal` range.
    pub fn scale(&self, places: u32) -> CurrencyResult<Decimal> {
        let base = Decimal::from(self.base);
        (0..places).try_fold(Decimal::ONE, |acc, _| {
            acc.checked_mul(base).ok_or(CurrencyError::Overflow)
        })
    }
}

static CURRENCIES: &[CurrencyDef] = &[
    CurrencyDef::decimal("USD", "US Dollar", "$", 2),
    CurrencyDef::decimal("EUR", "Euro", "€", 2),
    CurrencyDef::decimal("GBP", "British Pound", "£", 2),
    CurrencyDef::decimal("JPY", "Japanese Yen", "¥", 0),
    CurrencyDef::decimal("CNY", "Chinese Yuan", "CN¥", 2),
    CurrencyDef::decimal("CAD", "Canadian Dollar", "CA$", 2),
    CurrencyDef::decimal("AUD", "Australian Dollar", "A$", 2),
    CurrencyDef::decimal("NZD", "New Zealand Dollar", "NZ$", 2),
    CurrencyDef::decimal("HKD", "Hong Kong Dollar", "HK$", 2),
    CurrencyDef::decimal("TWD", "New Taiwan Dollar", "NT$", 2),
    CurrencyDef::decimal("SGD", "Singapore Dollar", "SGD", 2),
    CurrencyDef::decimal("CHF", "Swiss Franc", "CHF", 2),
    CurrencyDef::decimal("SEK", "Swedish Krona", "SEK", 2),
    CurrencyDef::decimal("NOK", "Norwegian Krone", "NOK", 2),
    CurrencyDef::decimal("DKK", "Danish Krone", "DKK", 2),
    CurrencyDef::decimal("ISK", "Icelandic Króna", "ISK", 0),
    CurrencyDef::decimal("PLN", "Polish Zloty", "PLN", 2),
    CurrencyDef::decimal("CZK", "Czech Koruna", "CZK", 2),
    CurrencyDef::decimal("HUF", "Hungarian Forint", "HUF", 2),
    CurrencyDef::decimal("RON", "Romanian Leu", "RON", 2),
    CurrencyDef::decimal("TRY", "Turkish Lira", "TRY", 2),
    CurrencyDef::decimal("UAH", "Ukrainian Hryvnia", "UAH", 2),
    CurrencyDef::decimal("RUB", "Russian Ruble", "RUB", 2),
    CurrencyDef::decimal("ILS", "Israeli New Shekel", "₪", 2),
    CurrencyDef::decimal("AED", "UAE Dirham", "AED", 2),
    CurrencyDef::decimal("SAR", "Saudi Riyal", "SAR", 2),
    CurrencyDef::decimal("BHD", "Bahraini Dinar", "BHD", 3),
    CurrencyDef::decimal("JOD", "Jordanian Dinar", "JOD", 3),
    CurrencyDef::decimal("KWD", "Kuwaiti Dinar", "KWD", 3),
    CurrencyDef::decimal("OMR", "Omani Rial", "OMR", 3),
    CurrencyDef::decimal("TND", "Tunisian Dinar", "TND", 3),
    CurrencyDef::decimal("EGP", "Egyptian Pound", "EGP", 2),
    CurrencyDef::decimal("NGN", "Nigerian Naira", "NGN", 2),
    CurrencyDef::decimal("KES", "Kenyan Shilling", "KES", 2),
    CurrencyDef::decimal("UGX", "Ugandan Shilling", "UGX", 0),
    CurrencyDef::decimal("ZAR", "South African Rand", "ZAR", 2),
    CurrencyDef::decimal("XAF", "Central African CFA Franc", "FCFA", 0),
    CurrencyDef::decimal("INR", "Indian Rupee", "₹", 2),
    CurrencyDef::decimal("IDR", "Indonesian Rupiah", "IDR", 2),
    CurrencyDef::decimal("KRW", "South Korean Won", "₩", 0),
    CurrencyDef::decimal("MYR", "Malaysian Ringgit", "MYR", 2),
    CurrencyDef::decimal("PHP", "Philippine Peso", "₱", 2),
    CurrencyDef::decimal("THB", "Thai Baht", "THB", 2),
    CurrencyDef::decimal("VND", "Vietnamese Dong", "₫", 0),
    CurrencyDef::decimal("MXN", "Mexican Peso", "MX$", 2),
    CurrencyDef::decimal("BRL", "Brazilian Real", "R$", 2),
    CurrencyDef::decimal("ARS", "Argentine Peso", "ARS", 2),
    CurrencyDef::decimal("CLP", "Chilean Peso", "CLP", 0),
    CurrencyDef::decimal("COP", "Colombian Peso", "COP", 2),
    CurrencyDef::decimal("PEN", "Peruvian Sol", "PEN", 2),
    CurrencyDef::non_decimal("MGA", "Malagasy Ariary", 5, 1, 0),
    CurrencyDef::non_decimal("MRU", "Mauritanian Ouguiya", 5, 1, 2),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn test_find_is_case_insensitive() {
        let usd = CurrencyDef::find("usd").unwrap();
        assert_eq!(usd.code, "USD");
        assert_eq!(usd.exponent, 2);
        assert_eq!(usd.base, 10);
    }

    #[test]
    fn test_find_unknown() {
        assert_eq!(
            CurrencyDef::find("XYZ"),
            Err(CurrencyError::UnknownCurrency("XYZ".into()))
        );
        assert!(CurrencyDef::find("").is_err());
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<_> = CurrencyDef::all().iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), CurrencyDef::all().len());
    }

    #[test]
    fn test_factor() {
        assert_eq!(CurrencyDef::find("USD").unwrap().factor().unwrap(), dec!(100));
        assert_eq!(CurrencyDef::find("JPY").unwrap().factor().unwrap(), dec!(1));
        assert_eq!(CurrencyDef::find("KWD").unwrap().factor().unwrap(), dec!(1000));
        assert_eq!(CurrencyDef::find("MGA").unwrap().factor().unwrap(), dec!(5));
    }

    #[test]
    fn test_scale_overflow() {
        let usd = CurrencyDef::find("USD").unwrap();
        assert_eq!(usd.scale(4).unwrap(), dec!(10000));
        assert_eq!(usd.scale(40), Err(CurrencyError::Overflow));
    }
}
