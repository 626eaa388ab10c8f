//! Page-level price rewriting.
//!
//! The host owns the document. It hands the updater every element carrying
//! the [`PRICE_CONVERSION_HOOK`] class through [`PriceDocument`], and each
//! element exposes its text through [`PriceElement`].

pub mod static_page;
pub mod updater;

pub use static_page::{PageElement, StaticPage};
pub use updater::{SkippedElement, UpdateReport, convert_page_prices, update_page};

/// Class marking elements whose text is a convertible price.
pub const PRICE_CONVERSION_HOOK: &str = "price-conversion-hook";

/// Read and write access to one element's text.
pub trait PriceElement {
    /// Current text content.
    fn text(&self) -> String;

    /// Replaces the text content.
    fn set_text(&mut self, text: &str);
}

/// Query access to a page.
pub trait PriceDocument {
    /// Element handle type.
    type Element: PriceElement;

    /// Every element carrying `class`, in document order.
    fn elements_with_class(&mut self, class: &str) -> Vec<&mut Self::Element>;
}
