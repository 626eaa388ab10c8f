//! Conversion settings and application configuration.
//!
//! Settings reach the pipeline one of two ways:
//! - a storefront key-value store (the cookie jar) through [`SettingsSource`]
//! - files and `PRICEHOOK__*` environment variables through [`AppConfig::load`]
//!
//! Both produce the same [`ConversionSettings`], read once by the caller and
//! passed down explicitly.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::error::{PriceError, PriceResult};
use crate::types::ConversionRate;

/// Key holding the currency the viewer should see.
pub const LOCAL_CURRENCY_CODE_KEY: &str = "localCurrencyCode";
/// Key holding the currency prices are encoded in.
pub const STORE_CURRENCY_CODE_KEY: &str = "storeCurrencyCode";
/// Key holding the store-to-local multiplier as a numeric string.
pub const LOCAL_CONVERSION_RATE_KEY: &str = "localConversionRate";

/// Read-only key-value store the settings are sourced from.
pub trait SettingsSource {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

impl SettingsSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl SettingsSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

/// Cookies parsed from a `Cookie` request header (`a=1; b=2`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: Vec<(String, String)>,
}

impl CookieJar {
    /// Parses a header value. Pairs without `=` are ignored; when a name
    /// repeats the first occurrence wins.
    #[must_use]
    pub fn parse(header: &str) -> Self {
        let cookies = header
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some((name.to_string(), value.trim().trim_matches('"').to_string()))
            })
            .collect();
        Self { cookies }
    }

    /// Number of cookies in the jar.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Returns true if the jar holds no cookies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl SettingsSource for CookieJar {
    fn get(&self, key: &str) -> Option<String> {
        self.cookies
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.clone())
    }
}

/// Everything the pipeline needs to rewrite one page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConversionSettings {
    /// Currency the viewer should see.
    pub local_currency_code: String,
    /// Currency prices are encoded in on the page.
    pub store_currency_code: String,
    /// Store-to-local multiplier.
    pub local_conversion_rate: ConversionRate,
}

impl ConversionSettings {
    /// Reads the three settings keys from a key-value source.
    ///
    /// Currency codes are not checked here; the normalizer and formatter
    /// reject codes outside the allowlist when they are used.
    ///
    /// # Errors
    ///
    /// `MissingSetting` for an absent key, `NotANumber` or `InvalidRate` for a
    /// bad rate.
    pub fn from_source<S: SettingsSource + ?Sized>(source: &S) -> PriceResult<Self> {
        let local_currency_code = required(source, LOCAL_CURRENCY_CODE_KEY)?;
        let store_currency_code = required(source, STORE_CURRENCY_CODE_KEY)?;
        let rate = required(source, LOCAL_CONVERSION_RATE_KEY)?;

        Ok(Self {
            local_currency_code,
            store_currency_code,
            local_conversion_rate: ConversionRate::parse(&rate)?,
        })
    }
}

fn required<S: SettingsSource + ?Sized>(source: &S, key: &str) -> PriceResult<String> {
    source
        .get(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| PriceError::MissingSetting(key.to_string()))
}

/// How the page updater reacts to an element that fails to convert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// Stop at the first failure; earlier elements keep their new text.
    #[default]
    AbortOnError,
    /// Leave the failing element untouched and continue with the rest.
    SkipFailed,
}

/// Page update configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateConfig {
    /// Failure handling.
    #[serde(default)]
    pub mode: UpdateMode,
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Conversion settings.
    pub conversion: ConversionSettings,
    /// Page update configuration.
    #[serde(default)]
    pub update: UpdateConfig,
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PRICEHOOK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
