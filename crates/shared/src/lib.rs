//! Shared types, errors, and configuration for pricehook.
//!
//! This crate provides the vocabulary used by every other crate:
//! - Currency types and the currency allowlist
//! - Conversion rate newtype
//! - The closed price error taxonomy
//! - Conversion settings and configuration loading

pub mod config;
pub mod error;
pub mod types;

pub use config::{
    AppConfig, ConversionSettings, CookieJar, SettingsSource, UpdateConfig, UpdateMode,
};
pub use error::{PriceError, PriceResult};
pub use types::{Allowlist, ConversionRate, Currency};
