#![forbid(unsafe_code)]

//! Full-viewport dimming backdrop.
//!
//! [`Scrim`] renders a blocking overlay behind modal content and emits its
//! `on_close` message when the dimmed area is clicked.
//!
//! While a scrim is on screen the rest of the application must be hidden
//! from assistive technology. [`ScrimGuard`] does that for the lifetime of
//! the guard: it marks the application element `aria-hidden="true"` and
//! restores whatever value was there before when dropped.

use bpk_dom::{Element, Locator};

use crate::node::{EventKind, Node};

const ARIA_HIDDEN: &str = "aria-hidden";

/// A blocking overlay.
#[derive(Debug, Clone)]
pub struct Scrim<M> {
    application_element: Locator,
    on_close: M,
}

impl<M> Scrim<M> {
    pub fn new(application_element: Locator, on_close: M) -> Self {
        Self {
            application_element,
            on_close,
        }
    }

    /// Hide the application element for as long as the returned guard lives.
    #[must_use]
    pub fn guard(&self) -> ScrimGuard {
        ScrimGuard::acquire(&self.application_element)
    }

    pub fn view(self) -> Node<M> {
        Node::element("div")
            .class("bpk-scrim")
            .attr("role", "presentation")
            .on(EventKind::Click, self.on_close)
            .into()
    }
}

/// Keeps the application element hidden from assistive technology.
#[derive(Debug)]
#[must_use = "the application element is restored as soon as the guard is dropped"]
pub struct ScrimGuard {
    element: Option<Element>,
    previous: Option<String>,
}

impl ScrimGuard {
    /// Resolve the application element and hide it. A locator that does not
    /// resolve yields an inert guard.
    pub fn acquire(application_element: &Locator) -> Self {
        let element = application_element.resolve();
        let previous = element.as_ref().and_then(|el| {
            let previous = el.attribute(ARIA_HIDDEN);
            el.set_attribute(ARIA_HIDDEN, "true");
            previous
        });
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "scrim.acquire", resolved = element.is_some());
        Self { element, previous }
    }

    /// Whether an application element was found.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.element.is_some()
    }
}

impl Drop for ScrimGuard {
    fn drop(&mut self) {
        let Some(element) = self.element.take() else {
            return;
        };
        match self.previous.take() {
            Some(previous) => element.set_attribute(ARIA_HIDDEN, previous),
            None => {
                element.remove_attribute(ARIA_HIDDEN);
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "scrim.release");
    }
}
