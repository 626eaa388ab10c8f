//! One element's worth of conversion.

use pricehook_shared::{ConversionSettings, PriceResult};

use super::{convert_price, format_price, normalize_price};

/// Rewrites one element's text from the store currency to the local one.
///
/// Runs normalize (store currency) -> convert (local rate) -> format (local
/// currency). The first failing stage's error is returned unchanged.
pub fn process_price_text(text: &str, settings: &ConversionSettings) -> PriceResult<String> {
    let price = normalize_price(text, &settings.store_currency_code)?;
    let converted = convert_price(price, settings.local_conversion_rate)?;
    format_price(converted, &settings.local_currency_code)
}
