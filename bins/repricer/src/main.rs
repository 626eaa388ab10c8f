//! Pricehook repricer
//!
//! Reads a JSON page snapshot, rewrites every marked price into the
//! configured local currency, and prints the updated snapshot on stdout.
//!
//! Usage: `repricer <page.json | ->`

use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pricehook_core::page::{StaticPage, UpdateReport, update_page};
use pricehook_shared::{AppConfig, PriceResult};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "pricehook_core=debug,repricer=info";

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries the page
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: repricer <page.json | ->")?;

    let config = AppConfig::load().context("Failed to load configuration")?;
    info!(
        store_currency = %config.conversion.store_currency_code,
        local_currency = %config.conversion.local_currency_code,
        rate = %config.conversion.local_conversion_rate,
        mode = ?config.update.mode,
        "Conversion configured"
    );

    let raw = read_snapshot(&path)?;
    let mut page: StaticPage =
        serde_json::from_str(&raw).with_context(|| format!("Invalid page snapshot in {path}"))?;
    info!(path = %path, elements = page.elements().len(), "Loaded page snapshot");

    let result = update_page(&mut page, &config.conversion, config.update.mode);

    // The page is printed even after a failure: it holds the partial update
    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(if report_outcome(result) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Logs the update outcome once and returns true on success.
fn report_outcome(result: PriceResult<UpdateReport>) -> bool {
    match result {
        Ok(report) => {
            info!(
                converted = report.converted,
                skipped = report.skipped.len(),
                "Repricing finished"
            );
            true
        }
        Err(err) => {
            error!(code = err.error_code(), error = %err, "Repricing aborted");
            false
        }
    }
}

fn read_snapshot(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read page snapshot from stdin")?;
        return Ok(raw);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricehook_shared::PriceError;

    #[test]
    fn test_default_log_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }

    #[test]
    fn test_report_outcome() {
        assert!(report_outcome(Ok(UpdateReport::default())));
        assert!(!report_outcome(Err(PriceError::NoElementsFound(
            "price-conversion-hook".into()
        ))));
    }
}
