//! Price conversion error types.
//!
//! Every variant is terminal for the operation that raised it. Nothing in the
//! pipeline retries; callers branch on the variant to decide whether to skip
//! an element or abort the page.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `PriceError`.
pub type PriceResult<T> = Result<T, PriceError>;

/// Errors raised while parsing, converting, or formatting prices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    /// A value expected to be numeric failed to parse.
    #[error("Not a number: {0:?}")]
    NotANumber(String),

    /// Currency code is not in the allowlist.
    #[error("Currency not enabled: {0}")]
    CurrencyNotEnabled(String),

    /// A custom allowlist was not a valid sequence of currency codes.
    #[error("Invalid currency allowlist: {0}")]
    InvalidAllowlist(String),

    /// No formatting rules exist for the currency and locale.
    #[error("Formatting unavailable for {currency} in locale {locale:?}")]
    FormattingUnavailable {
        /// Currency code that was requested.
        currency: String,
        /// Locale tag that was requested.
        locale: String,
    },

    /// The page query returned no elements for the marker class.
    #[error("No elements found with class {0:?}")]
    NoElementsFound(String),

    /// A minor-unit string could not be reshaped into a decimal string.
    #[error("Malformed minor-unit price: {0:?}")]
    SliceError(String),

    /// A required configuration key is absent.
    #[error("Missing setting: {0}")]
    MissingSetting(String),

    /// Conversion rate must be strictly positive.
    #[error("Conversion rate must be positive, got {0}")]
    InvalidRate(Decimal),

    /// Converting the amount overflowed the decimal range.
    #[error("Converting {amount} at rate {rate} overflows")]
    AmountOverflow {
        /// Amount being converted.
        amount: Decimal,
        /// Rate applied.
        rate: Decimal,
    },
}

impl PriceError {
    /// Returns a stable machine-readable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotANumber(_) => "NOT_A_NUMBER",
            Self::CurrencyNotEnabled(_) => "CURRENCY_NOT_ENABLED",
            Self::InvalidAllowlist(_) => "INVALID_ALLOWLIST",
            Self::FormattingUnavailable { .. } => "FORMATTING_UNAVAILABLE",
            Self::NoElementsFound(_) => "NO_ELEMENTS_FOUND",
            Self::SliceError(_) => "SLICE_ERROR",
            Self::MissingSetting(_) => "MISSING_SETTING",
            Self::InvalidRate(_) => "INVALID_RATE",
            Self::AmountOverflow { .. } => "AMOUNT_OVERFLOW",
        }
    }
}
