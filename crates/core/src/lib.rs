//! Core price conversion logic for pricehook.
//!
//! This crate contains pure logic with ZERO document or network dependencies.
//! Hosts plug their page model in through the traits in [`page`].
//!
//! # Modules
//!
//! - `currency` - Allowlist check, price normalization, conversion, formatting
//! - `page` - Drives the pipeline over every marked element of a page

pub mod currency;
pub mod page;

pub use currency::{
    convert_price, format_price, is_currency_enabled, normalize_price, process_price_text,
};
pub use page::{PRICE_CONVERSION_HOOK, PriceDocument, PriceElement, UpdateReport, update_page};
