//! In-memory page snapshot.

use serde::{Deserialize, Serialize};

use super::{PriceDocument, PriceElement};

/// One element of a page snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageElement {
    /// Class names on the element.
    #[serde(default)]
    pub classes: Vec<String>,
    /// Text content.
    pub text: String,
}

impl PageElement {
    /// Creates an element with no classes.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            classes: Vec::new(),
            text: text.into(),
        }
    }

    /// Adds a class name.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Returns true if the element carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl PriceElement for PageElement {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }
}

/// A page held as a flat list of elements in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticPage {
    elements: Vec<PageElement>,
}

impl StaticPage {
    /// Creates a page from elements in document order.
    #[must_use]
    pub fn new(elements: Vec<PageElement>) -> Self {
        Self { elements }
    }

    /// All elements in document order.
    #[must_use]
    pub fn elements(&self) -> &[PageElement] {
        &self.elements
    }
}

impl PriceDocument for StaticPage {
    type Element = PageElement;

    fn elements_with_class(&mut self, class: &str) -> Vec<&mut PageElement> {
        self.elements
            .iter_mut()
            .filter(|element| element.has_class(class))
            .collect()
    }
}
