#![forbid(unsafe_code)]

//! Resolvable element references.
//!
//! A [`Locator`] is the lazy counterpart of an [`Element`] handle. Components
//! store locators instead of elements because the element may not exist when
//! the component is built, and may be replaced between renders. Every call
//! to [`Locator::resolve`] runs the lookup again; nothing is cached.

use std::fmt;
use std::rc::Rc;

use crate::document::{Document, Element};

type Lookup = Rc<dyn Fn() -> Option<Element>>;

/// A zero-argument element lookup.
#[derive(Clone, Default)]
pub struct Locator {
    lookup: Option<Lookup>,
}

impl fmt::Debug for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locator")
            .field("bound", &self.lookup.is_some())
            .finish()
    }
}

impl Locator {
    /// Wrap an arbitrary lookup.
    pub fn new(lookup: impl Fn() -> Option<Element> + 'static) -> Self {
        Self {
            lookup: Some(Rc::new(lookup)),
        }
    }

    /// Look up `id` in `document` on every resolution.
    #[must_use]
    pub fn by_id(document: &Document, id: impl Into<String>) -> Self {
        let document = document.clone();
        let id = id.into();
        Self::new(move || document.get_element_by_id(&id))
    }

    /// Always resolve to `element`, attached or not.
    #[must_use]
    pub fn element(element: &Element) -> Self {
        let element = element.clone();
        Self::new(move || Some(element.clone()))
    }

    /// A locator that never resolves.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Run the lookup.
    #[must_use]
    pub fn resolve(&self) -> Option<Element> {
        self.lookup.as_ref().and_then(|lookup| lookup())
    }
}
