//! Currency formatting.
//!
//! Renders prices the way English locales display them: symbol before the
//! amount, `,` thousands separators, and a fixed number of fraction digits.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use pricehook_shared::{Allowlist, Currency, PriceError, PriceResult};

/// Locale used when none is given.
pub const DEFAULT_LOCALE: &str = "en";

/// Formats prices for a locale, restricted to an allowlist.
#[derive(Debug, Clone)]
pub struct PriceFormatter {
    allowlist: Allowlist,
    locale: String,
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self::with_allowlist(Allowlist::default())
    }
}

impl PriceFormatter {
    /// Creates a formatter for a custom allowlist in the default locale.
    #[must_use]
    pub fn with_allowlist(allowlist: Allowlist) -> Self {
        Self {
            allowlist,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// Sets the locale tag (e.g. `"en-GB"`).
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Renders `price` in the currency named by `currency_code`.
    ///
    /// # Errors
    ///
    /// - `CurrencyNotEnabled` if the code is not in the allowlist
    /// - `FormattingUnavailable` if the locale is not English, or the code
    ///   has no display rules
    pub fn format(&self, price: Decimal, currency_code: &str) -> PriceResult<String> {
        if !self.allowlist.contains(currency_code) {
            return Err(PriceError::CurrencyNotEnabled(currency_code.to_string()));
        }

        let unavailable = || PriceError::FormattingUnavailable {
            currency: currency_code.to_string(),
            locale: self.locale.clone(),
        };

        if !is_english_locale(&self.locale) {
            return Err(unavailable());
        }
        let currency: Currency = currency_code.parse().map_err(|_| unavailable())?;

        Ok(render(price, currency))
    }
}

/// Renders `price` with the currency's symbol, e.g. `"$24.99"`.
///
/// # Errors
///
/// `CurrencyNotEnabled` if the code is not in the default allowlist.
pub fn format_price(price: Decimal, currency_code: &str) -> PriceResult<String> {
    PriceFormatter::default().format(price, currency_code)
}

/// Same as [`format_price`] for an explicit locale tag.
pub fn format_price_in_locale(
    price: Decimal,
    currency_code: &str,
    locale: &str,
) -> PriceResult<String> {
    PriceFormatter::default()
        .locale(locale)
        .format(price, currency_code)
}

/// Formats a price given as text, e.g. `"24.99"`.
///
/// # Errors
///
/// `NotANumber` if the text is not a decimal number, otherwise as
/// [`format_price`].
pub fn format_price_text(price: &str, currency_code: &str) -> PriceResult<String> {
    let trimmed = price.trim();
    let price: Decimal = trimmed
        .parse()
        .map_err(|_| PriceError::NotANumber(trimmed.to_string()))?;
    format_price(price, currency_code)
}

fn is_english_locale(locale: &str) -> bool {
    let language = locale.split(['-', '_']).next().unwrap_or_default();
    language.eq_ignore_ascii_case("en")
}

fn render(price: Decimal, currency: Currency) -> String {
    let places = currency.minor_units();
    let rounded = price.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.prec$}", rounded.abs(), prec = places as usize);
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = format!("{sign}{}{}", currency.symbol(), group_thousands(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
