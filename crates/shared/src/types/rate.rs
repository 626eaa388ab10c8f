//! Conversion rate between the store and local currency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PriceError, PriceResult};

/// A strictly positive multiplier: 1 store unit = `rate` local units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct ConversionRate(Decimal);

impl ConversionRate {
    /// Wraps a rate, rejecting zero and negative values.
    pub fn new(rate: Decimal) -> PriceResult<Self> {
        if rate <= Decimal::ZERO {
            return Err(PriceError::InvalidRate(rate));
        }
        Ok(Self(rate))
    }

    /// Parses a numeric string such as `"1.25"`.
    ///
    /// # Errors
    ///
    /// `NotANumber` if the text is not a decimal number, `InvalidRate` if it
    /// is not positive.
    pub fn parse(text: &str) -> PriceResult<Self> {
        let trimmed = text.trim();
        let rate: Decimal = trimmed
            .parse()
            .map_err(|_| PriceError::NotANumber(trimmed.to_string()))?;
        Self::new(rate)
    }

    /// The underlying multiplier.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for ConversionRate {
    type Error = PriceError;

    fn try_from(rate: Decimal) -> Result<Self, Self::Error> {
        Self::new(rate)
    }
}

impl From<ConversionRate> for Decimal {
    fn from(rate: ConversionRate) -> Self {
        rate.0
    }
}

impl std::fmt::Display for ConversionRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_positive_rate() {
        let rate = ConversionRate::new(dec!(1.25)).unwrap();
        assert_eq!(rate.value(), dec!(1.25));
    }

    #[test]
    fn test_non_positive_rate_rejected() {
        assert_eq!(
            ConversionRate::new(Decimal::ZERO),
            Err(PriceError::InvalidRate(Decimal::ZERO))
        );
        assert_eq!(
            ConversionRate::new(dec!(-0.5)),
            Err(PriceError::InvalidRate(dec!(-0.5)))
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(ConversionRate::parse(" 1.1 ").unwrap().value(), dec!(1.1));
        assert_eq!(
            ConversionRate::parse("abc"),
            Err(PriceError::NotANumber("abc".into()))
        );
        assert!(matches!(
            ConversionRate::parse("0"),
            Err(PriceError::InvalidRate(_))
        ));
    }
}
