//! Property-based tests for currency operations.
//!
//! - Minor-unit round trip through fixed-decimal text
//! - Ordering and addition agree with integer arithmetic
//! - Rate lookups are reciprocal within rounding

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::convert_minor;
use super::definition::CurrencyDef;
use super::exchange::{ExchangeRate, RateLookupMethod, RateTable};
use super::format::CurrencyFormatter;

/// Strategy to pick any currency from the table.
fn any_currency() -> impl Strategy<Value = &'static CurrencyDef> {
    prop::sample::select(CurrencyDef::all().iter().collect::<Vec<_>>())
}

/// Strategy to generate minor-unit amounts, negative included.
fn minor_amount() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..1_000_000_000_000i64
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Fixed-decimal text parses back to the same minor units.
    #[test]
    fn prop_int_to_float_round_trip(amount in minor_amount(), currency in any_currency()) {
        let formatter = CurrencyFormatter::default();
        let text = formatter.format_int_to_float(amount, Some(currency.code)).unwrap();
        let back = formatter.format_float_to_int(text.as_str(), Some(currency.code)).unwrap();
        prop_assert_eq!(back, amount, "{} {} -> {}", amount, currency.code, text);
    }

    /// Fixed-decimal text always carries exactly `exponent` fraction digits.
    #[test]
    fn prop_int_to_float_digits(amount in minor_amount(), currency in any_currency()) {
        let text = CurrencyFormatter::default()
            .format_int_to_float(amount, Some(currency.code))
            .unwrap();
        let digits = text.split_once('.').map_or(0, |(_, fraction)| fraction.len());
        prop_assert_eq!(digits, currency.exponent as usize);
        prop_assert!(!text.contains(','));
    }

    /// Comparisons agree with integer ordering.
    #[test]
    fn prop_comparisons_match_integers(a in minor_amount(), b in minor_amount()) {
        let formatter = CurrencyFormatter::default();
        prop_assert_eq!(formatter.is_greater_than(a, b, None).unwrap(), a > b);
        prop_assert_eq!(formatter.is_greater_than_or_equal(a, b, None).unwrap(), a >= b);
    }

    /// Addition agrees with integer addition.
    #[test]
    fn prop_add_matches_integers(a in minor_amount(), b in minor_amount(), currency in any_currency()) {
        let sum = CurrencyFormatter::default()
            .add_amount(a, b, Some(currency.code))
            .unwrap();
        prop_assert_eq!(sum.amount, a + b);
        prop_assert_eq!(sum.currency.as_str(), currency.code);
    }

    /// Decimal text is read at the currency scale.
    #[test]
    fn prop_float_to_int_scales(whole in -1_000_000i64..1_000_000i64) {
        let formatter = CurrencyFormatter::default();
        let text = whole.to_string();
        prop_assert_eq!(formatter.format_float_to_int(text.as_str(), Some("USD")).unwrap(), whole * 100);
        prop_assert_eq!(formatter.format_float_to_int(text.as_str(), Some("JPY")).unwrap(), whole);
    }

    /// Inverse lookups are reciprocal to the direct rate within rounding.
    #[test]
    fn prop_inverse_is_reciprocal(rate in positive_rate()) {
        let table = RateTable::new("USD", vec![ExchangeRate::new("USD", "EUR", rate).unwrap()]).unwrap();
        let forward = table.find_rate("USD", "EUR").unwrap();
        let back = table.find_rate("EUR", "USD").unwrap();
        prop_assert_eq!(forward.method, RateLookupMethod::Direct);
        prop_assert_eq!(back.method, RateLookupMethod::Inverse);
        let product = forward.rate * back.rate;
        prop_assert!((product - Decimal::ONE).abs() < Decimal::new(1, 3), "product {}", product);
    }

    /// Every quotable pair reads as a positive rate, however far apart.
    #[test]
    fn prop_looked_up_rates_are_positive(
        strong in 1i64..100_000_000i64,
        weak_units in 1i64..1_000_000i64,
        weak_scale in 0u32..12,
    ) {
        let rates = vec![
            ExchangeRate::new("USD", "VND", Decimal::from(strong)).unwrap(),
            ExchangeRate::new("USD", "BHD", Decimal::new(weak_units, weak_scale)).unwrap(),
        ];
        let table = RateTable::new("USD", rates).unwrap();
        for (from, to) in [("VND", "BHD"), ("BHD", "VND"), ("VND", "USD"), ("USD", "BHD")] {
            let lookup = table.find_rate(from, to).unwrap();
            prop_assert!(lookup.rate > Decimal::ZERO, "{} -> {} = {}", from, to, lookup.rate);
        }
    }

    /// Converting with rate 1 between same-exponent currencies is the identity.
    #[test]
    fn prop_unit_rate_preserves_amount(amount in minor_amount()) {
        let usd = CurrencyDef::find("USD").unwrap();
        let eur = CurrencyDef::find("EUR").unwrap();
        prop_assert_eq!(convert_minor(amount, usd, eur, Decimal::ONE).unwrap(), amount);
    }
}
