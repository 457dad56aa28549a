#![forbid(unsafe_code)]

//! Caller-supplied tour configuration.

use std::fmt;

use bpk_dom::Locator;
use bpk_widgets::Node;
use bpk_widgets::popover::DEFAULT_CLOSE_BUTTON_TEXT;

use crate::config::TourConfig;
use crate::controller::TourMsg;
use crate::step::Step;

pub const DEFAULT_PREV_BUTTON_LABEL: &str = "Prev";
pub const DEFAULT_NEXT_BUTTON_LABEL: &str = "Next";

/// Invoked after a close has reset the tour to its first step.
pub type CloseCallback = Box<dyn FnMut()>;

/// Everything the caller controls about a tour.
pub struct TourProps {
    pub is_open: bool,
    /// Navigation order. Expected non-empty; an empty list renders nothing.
    pub steps: Vec<Step>,
    pub on_close: Option<CloseCallback>,
    pub prev_button_label: Node<TourMsg>,
    pub next_button_label: Node<TourMsg>,
    pub close_button_text: String,
    /// Show a dimming scrim behind the popover while open.
    pub show_scrim: bool,
    /// The application root, hidden behind the scrim.
    pub get_application_element: Locator,
}

impl fmt::Debug for TourProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TourProps")
            .field("is_open", &self.is_open)
            .field("steps", &self.steps.len())
            .field("on_close", &self.on_close.is_some())
            .field("show_scrim", &self.show_scrim)
            .finish_non_exhaustive()
    }
}

impl TourProps {
    pub fn new(is_open: bool, steps: Vec<Step>, get_application_element: Locator) -> Self {
        Self {
            is_open,
            steps,
            on_close: None,
            prev_button_label: Node::text(DEFAULT_PREV_BUTTON_LABEL),
            next_button_label: Node::text(DEFAULT_NEXT_BUTTON_LABEL),
            close_button_text: DEFAULT_CLOSE_BUTTON_TEXT.to_owned(),
            show_scrim: true,
            get_application_element,
        }
    }

    #[must_use]
    pub fn with_on_close(mut self, on_close: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }

    #[must_use]
    pub fn with_prev_button_label(mut self, label: impl Into<Node<TourMsg>>) -> Self {
        self.prev_button_label = label.into();
        self
    }

    #[must_use]
    pub fn with_next_button_label(mut self, label: impl Into<Node<TourMsg>>) -> Self {
        self.next_button_label = label.into();
        self
    }

    #[must_use]
    pub fn with_close_button_text(mut self, text: impl Into<String>) -> Self {
        self.close_button_text = text.into();
        self
    }

    #[must_use]
    pub fn with_show_scrim(mut self, show_scrim: bool) -> Self {
        self.show_scrim = show_scrim;
        self
    }

    /// Apply labels and scrim choice from a loaded config.
    #[must_use]
    pub fn apply_config(self, config: &TourConfig) -> Self {
        self.with_prev_button_label(config.prev_button_label.as_str())
            .with_next_button_label(config.next_button_label.as_str())
            .with_close_button_text(config.close_button_text.as_str())
            .with_show_scrim(config.show_scrim)
    }
}
