#![forbid(unsafe_code)]

//! Popover widget for target-anchored floating content.
//!
//! [`Popover`] renders a dialog panel anchored to a *target* element that is
//! located lazily through a [`Locator`]. The panel carries a labelled header
//! with a close control, a body, and an optional footer appended after the
//! body content.
//!
//! # Deferred rendering
//!
//! The popover renders nothing while it is closed, and nothing while its
//! target cannot be resolved. A host that re-renders after the target
//! appears gets the panel on that render; no state is kept in between.
//!
//! # Dismissal
//!
//! The panel root handles [`EventKind::Dismiss`] (escape key, outside click)
//! and the close button handles [`EventKind::Click`]; both emit the same
//! `on_close` message.
//!
//! # Differences from Scrim
//!
//! - **No backdrop**: compose with [`Scrim`](crate::scrim::Scrim) for modality
//! - **Portal**: when a render target resolves, the panel is hosted there
//!
//! # Example
//!
//! ```
//! use bpk_dom::{Document, Locator};
//! use bpk_widgets::popover::Popover;
//!
//! let doc = Document::new();
//! let anchor = doc.create_element("button").with_id("help");
//! doc.body().append_child(&anchor);
//!
//! let view = Popover::new("help-popover", "close")
//!     .open(true)
//!     .target(Locator::by_id(&doc, "help"))
//!     .label("Help")
//!     .content("Some help")
//!     .view();
//! assert!(view.find_by_id("help-popover").is_some());
//! ```

use bpk_dom::{Element, Locator};

use crate::button::{Button, ButtonVariant};
use crate::node::{EventKind, Node};

/// Default text of the close control.
pub const DEFAULT_CLOSE_BUTTON_TEXT: &str = "Close";

/// Configuration for a popover.
#[derive(Debug, Clone)]
pub struct Popover<M> {
    id: String,
    is_open: bool,
    on_close: M,
    target: Locator,
    render_target: Locator,
    label: String,
    label_as_title: bool,
    close_button_text: String,
    class_name: Option<String>,
    portal_class_name: Option<String>,
    content: Node<M>,
    footer: Node<M>,
}

impl<M: Clone> Popover<M> {
    /// Create a closed popover with no target.
    pub fn new(id: impl Into<String>, on_close: M) -> Self {
        Self {
            id: id.into(),
            is_open: false,
            on_close,
            target: Locator::none(),
            render_target: Locator::none(),
            label: String::new(),
            label_as_title: false,
            close_button_text: DEFAULT_CLOSE_BUTTON_TEXT.to_owned(),
            class_name: None,
            portal_class_name: None,
            content: Node::Empty,
            footer: Node::Empty,
        }
    }

    #[must_use]
    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    /// Element the panel points at.
    #[must_use]
    pub fn target(mut self, target: Locator) -> Self {
        self.target = target;
        self
    }

    /// Element the panel is hosted in.
    #[must_use]
    pub fn render_target(mut self, render_target: Locator) -> Self {
        self.render_target = render_target;
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Show the label as a visible title instead of an accessible-only name.
    #[must_use]
    pub fn label_as_title(mut self, label_as_title: bool) -> Self {
        self.label_as_title = label_as_title;
        self
    }

    #[must_use]
    pub fn close_button_text(mut self, text: impl Into<String>) -> Self {
        self.close_button_text = text.into();
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn portal_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.portal_class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<Node<M>>) -> Self {
        self.content = content.into();
        self
    }

    /// Appended inside the body, after the content.
    #[must_use]
    pub fn footer(mut self, footer: impl Into<Node<M>>) -> Self {
        self.footer = footer.into();
        self
    }

    /// Resolve the current target.
    #[must_use]
    pub fn target_element(&self) -> Option<Element> {
        self.target.resolve()
    }

    /// Build the view. Empty while closed or while the target is absent.
    pub fn view(self) -> Node<M> {
        if !self.is_open {
            return Node::Empty;
        }
        let Some(target) = self.target.resolve() else {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "popover.deferred", id = %self.id);
            return Node::Empty;
        };

        let label_id = format!("{}-label", self.id);
        let label = if self.label_as_title {
            Node::element("h2")
                .id(label_id.clone())
                .class("bpk-popover__label")
                .child(self.label.as_str())
        } else {
            Node::element("span")
                .id(label_id.clone())
                .class("bpk-popover__label bpk-popover__label--hidden")
                .child(self.label.as_str())
        };
        let close = Button::new(self.close_button_text.as_str())
            .variant(ButtonVariant::Link)
            .class_name("bpk-popover__close-button")
            .on_click(self.on_close.clone())
            .view();

        let mut panel = Node::element("section")
            .id(self.id.clone())
            .class("bpk-popover");
        if let Some(extra) = &self.class_name {
            panel = panel.class(extra);
        }
        panel = panel
            .attr("role", "dialog")
            .attr("tabindex", "-1")
            .attr("aria-labelledby", label_id);
        if let Some(target_id) = target.id() {
            panel = panel.attr("data-target", format!("#{target_id}"));
        }
        let panel: Node<M> = panel
            .on(EventKind::Dismiss, self.on_close)
            .child(
                Node::element("span")
                    .class("bpk-popover__arrow")
                    .attr("role", "presentation"),
            )
            .child(
                Node::element("header")
                    .class("bpk-popover__header")
                    .child(label)
                    .child(close),
            )
            .child(
                Node::element("div")
                    .class("bpk-popover__body")
                    .child(self.content)
                    .child(self.footer),
            )
            .into();

        match self.render_target.resolve() {
            Some(host) => crate::node::PortalNode {
                host,
                class_name: self.portal_class_name.unwrap_or_default(),
                child: Box::new(panel),
            }
            .into(),
            None => panel,
        }
    }
}
