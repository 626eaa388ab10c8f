//! Currency conversion logic.
//!
//! Converted prices are rounded to two decimal places, half away from zero,
//! matching how the storefront rounds displayed prices.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use pricehook_shared::{ConversionRate, PriceError, PriceResult};

/// Decimal places kept after converting a price.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Converts a price into the local currency: `round(price * rate, 2)`.
///
/// # Errors
///
/// `AmountOverflow` if the product leaves the decimal range.
pub fn convert_price(price: Decimal, rate: ConversionRate) -> PriceResult<Decimal> {
    convert_amount(price, rate.value(), PRICE_DECIMAL_PLACES)
}

/// Converts an amount using the given rate, rounding half away from zero.
///
/// # Errors
///
/// `AmountOverflow` if the product leaves the decimal range.
pub fn convert_amount(
    amount: Decimal,
    rate: Decimal,
    decimal_places: u32,
) -> PriceResult<Decimal> {
    let converted = amount
        .checked_mul(rate)
        .ok_or(PriceError::AmountOverflow { amount, rate })?;
    Ok(converted.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero))
}
