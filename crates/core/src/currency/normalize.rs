//! Price text normalization.
//!
//! Storefront templates emit prices in two shapes:
//! - minor-unit integer strings: `"1999"` is 19.99
//! - sign-prefixed decimals: `"£19.99"`, `"US$1,299.00"`
//!
//! Text starting with an ASCII digit takes the minor-unit path; anything else
//! takes the sign-prefixed path.

use rust_decimal::Decimal;

use pricehook_shared::{Currency, PriceError, PriceResult};

/// Parses raw element text into a price.
///
/// `currency_code` is the store currency the text is encoded in. It selects
/// how many trailing digits of a minor-unit string form the fraction.
///
/// Minor-unit strings shorter than the fraction width are left-padded with
/// zeros, so `"9"` is 0.09 and `"99"` is 0.99.
///
/// # Errors
///
/// - `CurrencyNotEnabled` if `currency_code` is not in the allowlist
/// - `SliceError` if a minor-unit string contains a non-digit character
/// - `NotANumber` if the reshaped text does not parse as a decimal
pub fn normalize_price(text: &str, currency_code: &str) -> PriceResult<Decimal> {
    let currency: Currency = currency_code.parse()?;
    let text = text.trim();

    if text.starts_with(|c: char| c.is_ascii_digit()) {
        parse_minor_units(text, currency.minor_units())
    } else {
        parse_sign_prefixed(text)
    }
}

fn parse_minor_units(text: &str, places: u32) -> PriceResult<Decimal> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PriceError::SliceError(text.to_string()));
    }

    let places = places as usize;
    let padded = format!("{text:0>width$}", width = places + 1);
    let (whole, fraction) = padded.split_at(padded.len() - places);
    let reshaped = if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{fraction}")
    };

    reshaped
        .parse()
        .map_err(|_| PriceError::NotANumber(text.to_string()))
}

/// Upper-case letters allowed before a sign symbol, as in `US$` or `HK$`.
const MAX_SIGN_LETTERS: usize = 3;

/// Drops the leading currency sign and `,` grouping separators, then parses
/// the leading numeric run. A `-` before the sign is kept.
fn parse_sign_prefixed(text: &str) -> PriceResult<Decimal> {
    let not_a_number = || PriceError::NotANumber(text.to_string());

    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let amount: String = strip_currency_sign(rest)
        .ok_or_else(not_a_number)?
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .filter(|c| *c != ',')
        .collect();

    let value: Decimal = amount.parse().map_err(|_| not_a_number())?;

    Ok(if negative { -value } else { value })
}

/// Strips a sign of the form `[A-Z]{0,3}<symbols>` plus optional whitespace.
///
/// Returns `None` unless a digit follows the sign, so word-led text such as
/// `"Only 3 left"` and signed amounts such as `"$-5.00"` are rejected.
fn strip_currency_sign(text: &str) -> Option<&str> {
    let after_letters = text.trim_start_matches(|c: char| c.is_ascii_uppercase());
    if text.len() - after_letters.len() > MAX_SIGN_LETTERS {
        return None;
    }

    let after_symbols = after_letters.trim_start_matches(is_sign_symbol);
    if after_symbols.len() == after_letters.len() {
        return None;
    }

    let amount = after_symbols.trim_start();
    amount
        .starts_with(|c: char| c.is_ascii_digit())
        .then_some(amount)
}

fn is_sign_symbol(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && !matches!(c, '.' | ',' | '-' | '+')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_minor_unit_string() {
        assert_eq!(normalize_price("1999", "GBP").unwrap(), dec!(19.99));
    }

    #[test]
    fn test_sign_prefixed_string() {
        assert_eq!(normalize_price("£19.99", "GBP").unwrap(), dec!(19.99));
    }

    #[rstest]
    #[case("$5", dec!(5))]
    #[case("€0.99", dec!(0.99))]
    #[case("£1,234.56", dec!(1234.56))]
    #[case("US$19.99", dec!(19.99))]
    #[case("€ 19.99", dec!(19.99))]
    #[case("£19.99 incl. VAT", dec!(19.99))]
    #[case("-$5.00", dec!(-5.00))]
    #[case("HK$ 88", dec!(88))]
    fn test_sign_prefixed_variants(#[case] text: &str, #[case] expected: Decimal) {
        assert_eq!(normalize_price(text, "USD").unwrap(), expected);
    }

    #[rstest]
    #[case("0", dec!(0.00))]
    #[case("9", dec!(0.09))]
    #[case("99", dec!(0.99))]
    #[case("100", dec!(1.00))]
    #[case("0199", dec!(1.99))]
    #[case("123456789", dec!(1234567.89))]
    fn test_minor_unit_padding(#[case] text: &str, #[case] expected: Decimal) {
        assert_eq!(normalize_price(text, "EUR").unwrap(), expected);
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(normalize_price("  1999\n", "GBP").unwrap(), dec!(19.99));
    }

    #[test]
    fn test_currency_not_enabled() {
        assert_eq!(
            normalize_price("1999", "JPY"),
            Err(PriceError::CurrencyNotEnabled("JPY".into()))
        );
    }

    #[rstest]
    #[case("19.99")]
    #[case("1,999")]
    #[case("12abc")]
    fn test_malformed_minor_units(#[case] text: &str) {
        assert_eq!(
            normalize_price(text, "GBP"),
            Err(PriceError::SliceError(text.to_string()))
        );
    }

    #[rstest]
    #[case("")]
    #[case("£")]
    #[case("£abc")]
    #[case("£1.2.3")]
    #[case("$-5.00")]
    #[case("Only 3 left")]
    #[case("Save 20%")]
    #[case("Sold out: back in 2 weeks")]
    #[case("From £5")]
    #[case("USDX$5")]
    fn test_not_a_number(#[case] text: &str) {
        assert_eq!(
            normalize_price(text, "GBP"),
            Err(PriceError::NotANumber(text.to_string()))
        );
    }
}
