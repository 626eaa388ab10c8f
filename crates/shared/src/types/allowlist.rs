//! Currency allowlist.

use serde::{Deserialize, Serialize};

use super::currency::Currency;
use crate::error::{PriceError, PriceResult};

/// A validated, non-empty set of three-letter currency codes.
///
/// The default allowlist holds every [`Currency`] with display rules
/// (GBP, USD, EUR). Custom allowlists may name other codes; those pass the
/// membership check but have no formatting rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Allowlist {
    codes: Vec<String>,
}

impl Allowlist {
    /// Builds an allowlist from a sequence of codes.
    ///
    /// Duplicates are collapsed; order of first appearance is kept.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAllowlist` if the sequence is empty or any entry is not
    /// three upper-case ASCII letters.
    pub fn new<I, S>(codes: I) -> PriceResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut validated: Vec<String> = Vec::new();
        for code in codes {
            let code = code.as_ref();
            if !is_currency_code(code) {
                return Err(PriceError::InvalidAllowlist(format!(
                    "{code:?} is not a three-letter currency code"
                )));
            }
            if !validated.iter().any(|c| c == code) {
                validated.push(code.to_string());
            }
        }

        if validated.is_empty() {
            return Err(PriceError::InvalidAllowlist(
                "allowlist must contain at least one code".to_string(),
            ));
        }

        Ok(Self { codes: validated })
    }

    /// Parses a comma-separated list such as `"GBP, USD"`.
    pub fn parse(list: &str) -> PriceResult<Self> {
        Self::new(list.split(',').map(str::trim))
    }

    /// Returns true if `code` is a member. Comparison is exact.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    /// The member codes in order.
    #[must_use]
    pub fn codes(&self) -> &[String] {
        &self.codes
    }
}

impl Default for Allowlist {
    fn default() -> Self {
        Self {
            codes: Currency::ALL.iter().map(|c| c.code().to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for Allowlist {
    type Error = PriceError;

    fn try_from(codes: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(codes)
    }
}

impl From<Allowlist> for Vec<String> {
    fn from(allowlist: Allowlist) -> Self {
        allowlist.codes
    }
}

fn is_currency_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}
