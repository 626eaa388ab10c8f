//! Currencies the storefront can display prices in.

use serde::{Deserialize, Serialize};

use crate::error::PriceError;

/// ISO 4217 currencies with known display rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Pound Sterling
    Gbp,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
}

impl Currency {
    /// Every currency with display rules, in allowlist order.
    pub const ALL: [Self; 3] = [Self::Gbp, Self::Usd, Self::Eur];

    /// Three-letter ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Gbp => "GBP",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }

    /// Conventional symbol used in "en" locales.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Gbp => "£",
            Self::Usd => "$",
            Self::Eur => "€",
        }
    }

    /// Number of fractional digits in one major unit.
    #[must_use]
    pub const fn minor_units(self) -> u32 {
        match self {
            Self::Gbp | Self::Usd | Self::Eur => 2,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GBP" => Ok(Self::Gbp),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            _ => Err(PriceError::CurrencyNotEnabled(s.to_string())),
        }
    }
}
