#![forbid(unsafe_code)]

//! Button control.

use crate::node::{EventKind, Node};

/// Visual variant of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Featured,
    Outline,
    /// Rendered as inline link text.
    Link,
}

impl ButtonVariant {
    fn modifier(self) -> Option<&'static str> {
        match self {
            Self::Primary => None,
            Self::Secondary => Some("bpk-button--secondary"),
            Self::Destructive => Some("bpk-button--destructive"),
            Self::Featured => Some("bpk-button--featured"),
            Self::Outline => Some("bpk-button--outline"),
            Self::Link => Some("bpk-button--link"),
        }
    }
}

/// A clickable control emitting `M` when activated.
#[derive(Debug, Clone)]
pub struct Button<M> {
    variant: ButtonVariant,
    on_click: Option<M>,
    class_name: Option<String>,
    label: Node<M>,
    large: bool,
}

impl<M> Button<M> {
    pub fn new(label: impl Into<Node<M>>) -> Self {
        Self {
            variant: ButtonVariant::default(),
            on_click: None,
            class_name: None,
            label: label.into(),
            large: false,
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn on_click(mut self, msg: M) -> Self {
        self.on_click = Some(msg);
        self
    }

    /// Extra (already resolved) class names.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn large(mut self, large: bool) -> Self {
        self.large = large;
        self
    }

    pub fn view(self) -> Node<M> {
        let mut el = Node::element("button")
            .attr("type", "button")
            .class("bpk-button");
        if let Some(modifier) = self.variant.modifier() {
            el = el.class(modifier);
        }
        if self.large {
            el = el.class("bpk-button--large");
        }
        if let Some(extra) = &self.class_name {
            el = el.class(extra);
        }
        if let Some(msg) = self.on_click {
            el = el.on(EventKind::Click, msg);
        }
        el.child(self.label).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_button_markup() {
        let node = Button::new("Next")
            .variant(ButtonVariant::Link)
            .class_name("tour-next")
            .on_click(1u8)
            .view();
        assert_eq!(
            node.to_markup(),
            r#"<button class="bpk-button bpk-button--link tour-next" type="button">Next</button>"#
        );
        let el = node.find_by_class("tour-next").unwrap();
        assert_eq!(el.handler(EventKind::Click), Some(&1));
    }

    #[test]
    fn button_without_handler_is_inert() {
        let node: Node<u8> = Button::new("Idle").view();
        let el = node.find_by_class("bpk-button").unwrap();
        assert!(el.handler(EventKind::Click).is_none());
    }
}
