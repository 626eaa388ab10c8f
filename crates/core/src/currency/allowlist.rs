//! Currency allowlist check.

use pricehook_shared::{Allowlist, PriceResult};

/// Returns true if `code` is in `allowlist`, or in the default set
/// {GBP, USD, EUR} when no allowlist is given.
#[must_use]
pub fn is_currency_enabled(code: &str, allowlist: Option<&Allowlist>) -> bool {
    match allowlist {
        Some(allowlist) => allowlist.contains(code),
        None => Allowlist::default().contains(code),
    }
}

/// Checks `code` against a caller-supplied list of codes.
///
/// # Errors
///
/// Returns `InvalidAllowlist` if `codes` is not a valid sequence of
/// three-letter currency codes.
pub fn is_currency_in<I, S>(code: &str, codes: I) -> PriceResult<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let allowlist = Allowlist::new(codes)?;
    Ok(is_currency_enabled(code, Some(&allowlist)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricehook_shared::PriceError;
    use rstest::rstest;

    #[rstest]
    #[case("GBP")]
    #[case("USD")]
    #[case("EUR")]
    fn test_default_codes_enabled(#[case] code: &str) {
        assert!(is_currency_enabled(code, None));
    }

    #[rstest]
    #[case("JPY")]
    #[case("IDR")]
    #[case("usd")]
    #[case("")]
    #[case("US")]
    fn test_other_codes_disabled(#[case] code: &str) {
        assert!(!is_currency_enabled(code, None));
    }

    #[test]
    fn test_custom_allowlist() {
        let allowlist = Allowlist::new(["JPY"]).unwrap();
        assert!(is_currency_enabled("JPY", Some(&allowlist)));
        assert!(!is_currency_enabled("USD", Some(&allowlist)));
    }

    #[test]
    fn test_is_currency_in() {
        assert_eq!(is_currency_in("EUR", ["EUR", "CHF"]), Ok(true));
        assert_eq!(is_currency_in("GBP", ["EUR", "CHF"]), Ok(false));
    }

    #[test]
    fn test_is_currency_in_invalid_list() {
        assert!(matches!(
            is_currency_in("EUR", ["EUR", "euro"]),
            Err(PriceError::InvalidAllowlist(_))
        ));
        assert!(matches!(
            is_currency_in("EUR", Vec::<String>::new()),
            Err(PriceError::InvalidAllowlist(_))
        ));
    }
}
