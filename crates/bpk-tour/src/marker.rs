#![forbid(unsafe_code)]

//! Document-scoped resources held while a tour is mounted.
//!
//! Both guards undo their change on drop, so a controller that is torn down
//! without an explicit unmount still leaves the document clean.
//!
//! # Invariants
//!
//! 1. A [`DocumentMarker`] adds its class on acquire and removes the same
//!    class on drop, exactly once.
//! 2. A [`PopoverContainer`] only detaches an element it created itself.
//!
//! Two markers for the same class must not be alive at once: the first one
//! dropped removes the class for both. At most one tour is mounted at a time.

use bpk_dom::{Document, Element};

/// A class on the document element, present for the guard's lifetime.
#[derive(Debug)]
#[must_use = "the marker class is removed as soon as the guard is dropped"]
pub struct DocumentMarker {
    element: Element,
    class_name: String,
}

impl DocumentMarker {
    pub fn acquire(document: &Document, class_name: impl Into<String>) -> Self {
        let element = document.document_element();
        let class_name = class_name.into();
        element.add_class(&class_name);
        Self {
            element,
            class_name,
        }
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

impl Drop for DocumentMarker {
    fn drop(&mut self) {
        self.element.remove_class(&self.class_name);
    }
}

/// The element the tour popover is hosted in.
///
/// Reuses an element that already carries the id; otherwise creates one
/// under `<body>` and detaches it again on drop.
#[derive(Debug)]
pub struct PopoverContainer {
    element: Element,
    owned: bool,
}

impl PopoverContainer {
    pub fn acquire(document: &Document, id: &str) -> Self {
        if let Some(element) = document.get_element_by_id(id) {
            return Self {
                element,
                owned: false,
            };
        }
        let element = document.create_element("div").with_id(id);
        document.body().append_child(&element);
        Self {
            element,
            owned: true,
        }
    }

    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Whether the container was created by this guard.
    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.owned
    }
}

impl Drop for PopoverContainer {
    fn drop(&mut self) {
        if self.owned {
            self.element.remove();
        }
    }
}
