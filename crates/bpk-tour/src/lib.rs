#![forbid(unsafe_code)]

//! Guided tour overlay for Backpack.
//!
//! A tour walks the user through an ordered list of [`Step`]s. Each step
//! points at an element of the page through a [`Locator`](bpk_dom::Locator);
//! the controller shows the step's content in a popover anchored to that
//! element, marks the element as the active target, and offers prev/next
//! navigation.
//!
//! # Example
//!
//! ```
//! use bpk_dom::{Document, Locator};
//! use bpk_tour::{Step, TourController, TourMsg, TourProps, STEP_TARGET_ACTIVE};
//! use bpk_widgets::{EventKind, Mounted};
//!
//! let doc = Document::new();
//! let root = doc.create_element("div").with_id("root");
//! doc.body().append_child(&root);
//! for id in ["step-1", "step-2"] {
//!     root.append_child(&doc.create_element("div").with_id(id));
//! }
//!
//! let steps = vec![
//!     Step::new(Locator::by_id(&doc, "step-1"), "First").content("Hello"),
//!     Step::new(Locator::by_id(&doc, "step-2"), "Second").content("World"),
//! ];
//! let props = TourProps::new(true, steps, Locator::by_id(&doc, "root"));
//! let mut tour = Mounted::new(TourController::new(&doc, props));
//!
//! // Click "Next" in the rendered footer.
//! let view = tour.view();
//! let next = view.find_by_class("bpk-tour-popover__button-next").unwrap();
//! let msg = *next.handler(EventKind::Click).unwrap();
//! assert_eq!(msg, TourMsg::Next);
//! tour.update(msg);
//!
//! let second = doc.get_element_by_id("step-2").unwrap();
//! assert!(second.has_class(STEP_TARGET_ACTIVE));
//! ```
//!
//! Mounting goes through [`Mounted`](bpk_widgets::Mounted) so the document
//! is restored however the tour goes away.

pub mod config;
pub mod controller;
pub mod marker;
pub mod props;
pub mod step;
pub mod sync;

pub use config::{TourConfig, TourConfigError};
pub use controller::{
    BUTTON_NEXT, BUTTON_NEXT_HAS_PREV, BUTTON_PREV, BUTTON_PREV_HAS_NEXT, FOOTER, POPOVER,
    POPOVER_CONTAINER_ID, POPOVER_ID, PORTAL, ROOT_NODE_ACTIVE, SEPARATOR, STEP_TARGET_ACTIVE,
    TourController, TourEvent, TourMsg,
};
pub use props::{CloseCallback, DEFAULT_NEXT_BUTTON_LABEL, DEFAULT_PREV_BUTTON_LABEL, TourProps};
pub use step::Step;
