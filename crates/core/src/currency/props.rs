//! Property-based tests for price handling.
//!
//! - Allowlist membership
//! - Conversion rounding
//! - Minor-unit normalization
//! - Format then normalize round trip

use proptest::prelude::*;
use rust_decimal::Decimal;

use pricehook_shared::{ConversionRate, Currency};

use super::{convert_price, format_price, is_currency_enabled, normalize_price};

/// Strategy to generate prices in minor units (0.00 to 10,000,000.00).
fn price_cents() -> impl Strategy<Value = i64> {
    0i64..1_000_000_000i64
}

/// Strategy to generate positive rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = ConversionRate> {
    (1i64..100_000_000i64).prop_map(|v| {
        ConversionRate::new(Decimal::new(v, 4)).expect("strategy yields positive rates")
    })
}

/// Strategy to pick an enabled currency.
fn enabled_currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any three-letter code outside {GBP, USD, EUR} is rejected.
    #[test]
    fn prop_other_codes_not_enabled(code in "[A-Z]{3}") {
        let expected = matches!(code.as_str(), "GBP" | "USD" | "EUR");
        prop_assert_eq!(is_currency_enabled(&code, None), expected);
    }

    /// Converted prices never carry more than two decimal places.
    #[test]
    fn prop_convert_rounds_to_2_decimals(
        cents in price_cents(),
        rate in positive_rate(),
    ) {
        let result = convert_price(Decimal::new(cents, 2), rate).unwrap();
        let scaled = result * Decimal::from(100);
        prop_assert_eq!(scaled, scaled.round(), "{} has more than 2 decimals", result);
    }

    /// Conversion stays within half a cent of the exact product.
    #[test]
    fn prop_convert_within_half_cent(
        cents in price_cents(),
        rate in positive_rate(),
    ) {
        let price = Decimal::new(cents, 2);
        let exact = price * rate.value();
        let result = convert_price(price, rate).unwrap();
        prop_assert!((result - exact).abs() <= Decimal::new(5, 3));
    }

    /// A minor-unit string of N cents normalizes to N / 100.
    #[test]
    fn prop_minor_units_normalize(
        cents in price_cents(),
        currency in enabled_currency(),
    ) {
        let text = cents.to_string();
        let price = normalize_price(&text, currency.code()).unwrap();
        prop_assert_eq!(price, Decimal::new(cents, 2));
    }

    /// Formatting then normalizing through the sign-stripped path reproduces
    /// the price within 0.01.
    #[test]
    fn prop_format_normalize_round_trip(
        cents in price_cents(),
        currency in enabled_currency(),
    ) {
        let price = Decimal::new(cents, 2);
        let formatted = format_price(price, currency.code()).unwrap();
        prop_assert!(formatted.starts_with(currency.symbol()));

        let parsed = normalize_price(&formatted, currency.code()).unwrap();
        prop_assert!((parsed - price).abs() <= Decimal::new(1, 2),
            "{} -> {} -> {}", price, formatted, parsed);
    }
}
