//! Common types used across the workspace.

pub mod allowlist;
pub mod currency;
pub mod rate;

pub use allowlist::Allowlist;
pub use currency::Currency;
pub use rate::ConversionRate;
