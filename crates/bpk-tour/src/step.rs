#![forbid(unsafe_code)]

//! Tour steps.

use bpk_dom::{Element, Locator};
use bpk_widgets::Node;

use crate::controller::TourMsg;

/// One stop in a tour.
///
/// Steps are identified by position only; two steps may share a target.
#[derive(Debug, Clone)]
pub struct Step {
    pub target: Locator,
    /// Popover title.
    pub label: String,
    /// Popover body.
    pub content: Node<TourMsg>,
}

impl Step {
    pub fn new(target: Locator, label: impl Into<String>) -> Self {
        Self {
            target,
            label: label.into(),
            content: Node::Empty,
        }
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<Node<TourMsg>>) -> Self {
        self.content = content.into();
        self
    }

    /// Resolve the target now.
    #[must_use]
    pub fn target_element(&self) -> Option<Element> {
        self.target.resolve()
    }
}
