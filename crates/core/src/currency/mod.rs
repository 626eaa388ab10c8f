//! Price text handling for the enabled currencies.
//!
//! Data flows one way through the pipeline:
//! raw text -> [`normalize_price`] -> [`convert_price`] -> [`format_price`].

pub mod allowlist;
pub mod conversion;
pub mod format;
pub mod normalize;
pub mod pipeline;

#[cfg(test)]
mod props;

pub use allowlist::{is_currency_enabled, is_currency_in};
pub use conversion::{PRICE_DECIMAL_PLACES, convert_amount, convert_price};
pub use format::{
    DEFAULT_LOCALE, PriceFormatter, format_price, format_price_in_locale, format_price_text,
};
pub use normalize::normalize_price;
pub use pipeline::process_price_text;
