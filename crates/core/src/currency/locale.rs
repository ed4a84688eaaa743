//! Locale-aware rendering of currency amounts.
//!
//! A small table of locale formats covers the languages the platform ships
//! with. Tags that are well formed but not in the table resolve to the first
//! format with the same language, then to `en-US`.

use rust_decimal::{Decimal, RoundingStrategy};

use super::definition::CurrencyDef;
use super::error::{CurrencyError, CurrencyResult};

const NBSP: char = '\u{a0}';

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `$1.00`; alphabetic symbols get a non-breaking space (`CHF 1.00`).
    Prefix,
    /// `R$ 1,00`, always separated by a non-breaking space.
    PrefixSpaced,
    /// `1,00 €`, always separated by a non-breaking space.
    Suffix,
}

/// Number and symbol conventions for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    /// Canonical tag.
    pub tag: &'static str,
    /// Separator between groups of three integer digits.
    pub group_separator: &'static str,
    /// Separator between integer and fraction digits.
    pub decimal_separator: &'static str,
    /// Integer digits beyond the first group needed before grouping kicks in.
    pub min_grouping_digits: usize,
    /// Symbol placement.
    pub position: SymbolPosition,
    /// Per-currency symbol replacements (code, symbol).
    pub symbol_overrides: &'static [(&'static str, &'static str)],
}

static LOCALES: &[LocaleFormat] = &[
    LocaleFormat {
        tag: "en-US",
        group_separator: ",",
        decimal_separator: ".",
        min_grouping_digits: 1,
        position: SymbolPosition::Prefix,
        symbol_overrides: &[],
    },
    LocaleFormat {
        tag: "en-GB",
        group_separator: ",",
        decimal_separator: ".",
        min_grouping_digits: 1,
        position: SymbolPosition::Prefix,
        symbol_overrides: &[("USD", "US$")],
    },
    LocaleFormat {
        tag: "es-ES",
        group_separator: ".",
        decimal_separator: ",",
        min_grouping_digits: 2,
        position: SymbolPosition::Suffix,
        symbol_overrides: &[("USD", "US$")],
    },
    LocaleFormat {
        tag: "fr-FR",
        group_separator: "\u{202f}",
        decimal_separator: ",",
        min_grouping_digits: 1,
        position: SymbolPosition::Suffix,
        symbol_overrides: &[("USD", "$US")],
    },
    LocaleFormat {
        tag: "de-DE",
        group_separator: ".",
        decimal_separator: ",",
        min_grouping_digits: 1,
        position: SymbolPosition::Suffix,
        symbol_overrides: &[],
    },
    LocaleFormat {
        tag: "pt-BR",
        group_separator: ".",
        decimal_separator: ",",
        min_grouping_digits: 1,
        position: SymbolPosition::PrefixSpaced,
        symbol_overrides: &[("USD", "US$")],
    },
    LocaleFormat {
        tag: "ja-JP",
        group_separator: ",",
        decimal_separator: ".",
        min_grouping_digits: 1,
        position: SymbolPosition::Prefix,
        symbol_overrides: &[("JPY", "￥"), ("USD", "$")],
    },
];

/// Returns true if `tag` looks like a BCP-47 language tag.
///
/// The primary subtag must be 2 or 3 ASCII letters; the remaining subtags
/// (separated by `-` or `_`) must be 1 to 8 ASCII alphanumerics.
#[must_use]
pub fn is_well_formed(tag: &str) -> bool {
    let mut subtags = tag.split(['-', '_']);
    let Some(language) = subtags.next() else {
        return false;
    };
    (2..=3).contains(&language.len())
        && language.bytes().all(|b| b.is_ascii_alphabetic())
        && subtags.all(|s| (1..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphanumeric()))
}

impl LocaleFormat {
    /// Resolves a locale tag to a format.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::InvalidLocale` for malformed tags.
    pub fn resolve(tag: &str) -> CurrencyResult<&'static Self> {
        let tag = tag.trim();
        if !is_well_formed(tag) {
            return Err(CurrencyError::InvalidLocale(tag.to_string()));
        }

        let normalized = tag.replace('_', "-");
        if let Some(exact) = LOCALES
            .iter()
            .find(|l| l.tag.eq_ignore_ascii_case(&normalized))
        {
            return Ok(exact);
        }

        let language = normalized.split('-').next().unwrap_or_default();
        Ok(LOCALES
            .iter()
            .find(|l| l.language().eq_ignore_ascii_case(language))
            .unwrap_or(&LOCALES[0]))
    }

    /// Primary language subtag.
    #[must_use]
    pub fn language(&self) -> &'static str {
        self.tag.split('-').next().unwrap_or(self.tag)
    }

    /// Symbol used for `currency` in this locale.
    #[must_use]
    pub fn symbol_for(&self, currency: &CurrencyDef) -> &'static str {
        self.symbol_overrides
            .iter()
            .find(|(code, _)| *code == currency.code)
            .map_or(currency.symbol, |&(_, symbol)| symbol)
    }

    /// Renders a major-unit value for display.
    ///
    /// The value is rounded half away from zero to the currency's display
    /// digits. Negative values get a leading `-`.
    #[must_use]
    pub fn render(&self, value: Decimal, currency: &CurrencyDef) -> String {
        let digits = currency.display_digits;
        let mut rounded = value.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        rounded.set_sign_positive(true);
        rounded.rescale(digits);

        let text = rounded.to_string();
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

        let mut number = self.group(integer);
        if !fraction.is_empty() {
            number.push_str(self.decimal_separator);
            number.push_str(fraction);
        }

        let symbol = self.symbol_for(currency);
        let mut out = String::with_capacity(number.len() + symbol.len() + 4);
        if negative {
            out.push('-');
        }
        match self.position {
            SymbolPosition::Prefix => {
                out.push_str(symbol);
                if symbol.chars().last().is_some_and(char::is_alphabetic) {
                    out.push(NBSP);
                }
                out.push_str(&number);
            }
            SymbolPosition::PrefixSpaced => {
                out.push_str(symbol);
                out.push(NBSP);
                out.push_str(&number);
            }
            SymbolPosition::Suffix => {
                out.push_str(&number);
                out.push(NBSP);
                out.push_str(symbol);
            }
        }
        out
    }

    fn group(&self, integer: &str) -> String {
        if integer.len() < 3 + self.min_grouping_digits {
            return integer.to_string();
        }
        let mut out = String::with_capacity(integer.len() * 2);
        for (i, ch) in integer.char_indices() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                out.push_str(self.group_separator);
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn currency(code: &str) -> &'static CurrencyDef {
        CurrencyDef::find(code).unwrap()
    }

    #[rstest]
    #[case("en-US", "en-US")]
    #[case("EN-us", "en-US")]
    #[case("en_GB", "en-GB")]
    #[case("en-CA", "en-US")]
    #[case("es-MX", "es-ES")]
    #[case("fr", "fr-FR")]
    #[case("de-AT", "de-DE")]
    #[case("nl-NL", "en-US")]
    #[case("zh-Hant-TW", "en-US")]
    fn test_resolve(#[case] tag: &str, #[case] expected: &str) {
        assert_eq!(LocaleFormat::resolve(tag).unwrap().tag, expected);
    }

    #[rstest]
    #[case("")]
    #[case("e")]
    #[case("english")]
    #[case("en-")]
    #[case("en US")]
    #[case("12-US")]
    fn test_resolve_rejects_malformed(#[case] tag: &str) {
        assert!(matches!(
            LocaleFormat::resolve(tag),
            Err(CurrencyError::InvalidLocale(_))
        ));
    }

    #[rstest]
    #[case("en-US", "USD", dec!(12.34), "$12.34")]
    #[case("en-US", "USD", dec!(0), "$0.00")]
    #[case("en-US", "USD", dec!(1234567.891), "$1,234,567.89")]
    #[case("en-US", "USD", dec!(-1234.5), "-$1,234.50")]
    #[case("en-US", "EUR", dec!(9.2), "€9.20")]
    #[case("en-US", "JPY", dec!(1234.5), "¥1,235")]
    #[case("en-US", "CHF", dec!(1234.56), "CHF\u{a0}1,234.56")]
    #[case("en-US", "KWD", dec!(1.2345), "KWD\u{a0}1.235")]
    #[case("en-GB", "USD", dec!(12.34), "US$12.34")]
    #[case("en-GB", "GBP", dec!(12.34), "£12.34")]
    #[case("de-DE", "EUR", dec!(1234.56), "1.234,56\u{a0}€")]
    #[case("de-DE", "USD", dec!(-0.5), "-0,50\u{a0}$")]
    #[case("fr-FR", "EUR", dec!(1234.56), "1\u{202f}234,56\u{a0}€")]
    #[case("fr-FR", "USD", dec!(12.34), "12,34\u{a0}$US")]
    #[case("es-ES", "EUR", dec!(1234.56), "1234,56\u{a0}€")]
    #[case("es-ES", "EUR", dec!(12345.67), "12.345,67\u{a0}€")]
    #[case("pt-BR", "BRL", dec!(1234.56), "R$\u{a0}1.234,56")]
    #[case("ja-JP", "JPY", dec!(1234), "￥1,234")]
    fn test_render(
        #[case] tag: &str,
        #[case] code: &str,
        #[case] value: Decimal,
        #[case] expected: &str,
    ) {
        let format = LocaleFormat::resolve(tag).unwrap();
        assert_eq!(format.render(value, currency(code)), expected);
    }

    #[test]
    fn test_render_rounds_half_away_from_zero() {
        let format = LocaleFormat::resolve("en-US").unwrap();
        assert_eq!(format.render(dec!(0.125), currency("USD")), "$0.13");
        assert_eq!(format.render(dec!(-0.125), currency("USD")), "-$0.13");
        assert_eq!(format.render(dec!(-0.001), currency("USD")), "$0.00");
    }

    #[test]
    fn test_render_non_decimal_currency() {
        let format = LocaleFormat::resolve("en-US").unwrap();
        assert_eq!(format.render(dec!(246.8), currency("MGA")), "MGA\u{a0}247");
    }
}
