//! Page updater.
//!
//! Elements are processed in document order. Under the default
//! [`UpdateMode::AbortOnError`] the first failure stops the update and is
//! returned: elements before it keep their converted text, the rest stay in
//! the store currency. [`UpdateMode::SkipFailed`] isolates failures per
//! element instead.

use tracing::{debug, error, info, warn};

use pricehook_shared::{ConversionSettings, PriceError, PriceResult, SettingsSource, UpdateMode};

use super::{PRICE_CONVERSION_HOOK, PriceDocument, PriceElement};
use crate::currency::process_price_text;

/// An element left unconverted under [`UpdateMode::SkipFailed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedElement {
    /// Position among the marked elements.
    pub index: usize,
    /// Trimmed text that failed to convert.
    pub text: String,
    /// Why it failed.
    pub error: PriceError,
}

/// Outcome of a page update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Number of marked elements found.
    pub found: usize,
    /// Number of elements rewritten.
    pub converted: usize,
    /// Elements left untouched.
    pub skipped: Vec<SkippedElement>,
}

impl UpdateReport {
    /// Returns true if every marked element was rewritten.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.converted == self.found
    }
}

/// Rewrites every marked element's price into the local currency.
///
/// # Errors
///
/// `NoElementsFound` if the page has no marked elements (nothing is
/// written). Under `AbortOnError`, the first element's conversion error.
pub fn update_page<D>(
    document: &mut D,
    settings: &ConversionSettings,
    mode: UpdateMode,
) -> PriceResult<UpdateReport>
where
    D: PriceDocument + ?Sized,
{
    let mut elements = document.elements_with_class(PRICE_CONVERSION_HOOK);
    if elements.is_empty() {
        return Err(PriceError::NoElementsFound(PRICE_CONVERSION_HOOK.to_string()));
    }

    let mut report = UpdateReport {
        found: elements.len(),
        ..UpdateReport::default()
    };

    for (index, element) in elements.iter_mut().enumerate() {
        let raw = element.text();
        let text = raw.trim();

        match process_price_text(text, settings) {
            Ok(formatted) => {
                debug!(index, from = text, to = %formatted, "Converted price");
                element.set_text(&formatted);
                report.converted += 1;
            }
            Err(err) => match mode {
                UpdateMode::AbortOnError => return Err(err),
                UpdateMode::SkipFailed => {
                    warn!(index, text, code = err.error_code(), error = %err, "Skipped price");
                    report.skipped.push(SkippedElement {
                        index,
                        text: text.to_string(),
                        error: err,
                    });
                }
            },
        }
    }

    info!(
        found = report.found,
        converted = report.converted,
        skipped = report.skipped.len(),
        local_currency = %settings.local_currency_code,
        "Page prices updated"
    );

    Ok(report)
}

/// Top-level entry point: reads settings from `source` once, then updates
/// the page.
///
/// Failures are logged and swallowed; the page keeps whatever state it
/// reached. Returns the report when the update ran to completion.
pub fn convert_page_prices<D, S>(
    document: &mut D,
    source: &S,
    mode: UpdateMode,
) -> Option<UpdateReport>
where
    D: PriceDocument + ?Sized,
    S: SettingsSource + ?Sized,
{
    let result = ConversionSettings::from_source(source)
        .and_then(|settings| update_page(document, &settings, mode));

    match result {
        Ok(report) => Some(report),
        Err(err) => {
            error!(code = err.error_code(), error = %err, "Price conversion aborted");
            None
        }
    }
}
