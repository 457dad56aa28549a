#![forbid(unsafe_code)]

//! Tour controller: step navigation and document synchronization.
//!
//! # State
//!
//! The controller owns a single index into the caller's step list. It starts
//! at 0 and returns to 0 on every close, so reopening always restarts the
//! tour. When the index does not address a step (empty list, or a shorter
//! list supplied later) the controller renders nothing.
//!
//! # Document effects
//!
//! | When                  | Effect                                                |
//! |-----------------------|-------------------------------------------------------|
//! | mount                 | root marker class on `<html>`, popover container      |
//! | first open            | current target marked                                 |
//! | active index changes  | previous target unmarked, new target marked           |
//! | open with scrim       | application element hidden behind the scrim           |
//! | unmount               | all of the above undone                               |
//!
//! Target marking always runs after the index change it reflects, and is
//! skipped when the index did not change. The controller remembers the
//! element it last marked, so a mark placed under an older step list is
//! still cleared on the next change and on unmount.
//!
//! # Concurrency
//!
//! Single-threaded and synchronous. The document marker and the target
//! marker are owned by the mounted controller; mounting two tours at once is
//! unsupported.

use bpk_dom::{ClassNameResolver, Document, Element, Locator};
use bpk_widgets::{Button, ButtonVariant, Lifecycle, Node, Popover, Scrim, ScrimGuard};

use crate::marker::{DocumentMarker, PopoverContainer};
use crate::props::TourProps;
use crate::step::Step;
use crate::sync::sync_targets;

/// Id of the element the popover is hosted in.
pub const POPOVER_CONTAINER_ID: &str = "bpk-tour-popover-container";
/// Id of the popover panel.
pub const POPOVER_ID: &str = "bpk-tour-popover";
/// Glyph between the prev and next actions.
pub const SEPARATOR: &str = "|";

/// Marks `<html>` while a tour is mounted.
pub const ROOT_NODE_ACTIVE: &str = "bpk-tour-root-node--active";
/// Marks the element the current step points at.
pub const STEP_TARGET_ACTIVE: &str = "bpk-tour-step-target--active";
/// Portal wrapping the popover inside the container.
pub const PORTAL: &str = "bpk-tour-portal";
/// Extra class on the popover panel.
pub const POPOVER: &str = "bpk-tour-popover";
/// Footer holding the navigation buttons.
pub const FOOTER: &str = "bpk-tour-popover__footer";
/// The "prev" button.
pub const BUTTON_PREV: &str = "bpk-tour-popover__button-prev";
/// Added to "prev" when a "next" button follows it.
pub const BUTTON_PREV_HAS_NEXT: &str = "bpk-tour-popover__button-prev--has-next";
/// The "next" button.
pub const BUTTON_NEXT: &str = "bpk-tour-popover__button-next";
/// Added to "next" when a "prev" button precedes it.
pub const BUTTON_NEXT_HAS_PREV: &str = "bpk-tour-popover__button-next--has-prev";

/// Navigation intents emitted by the tour's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourMsg {
    Prev,
    Next,
    Close,
}

/// What an update changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourEvent {
    StepChanged { from: usize, to: usize },
    /// The tour was closed from step `from` and reset to 0.
    Closed { from: usize },
}

/// The guided tour component.
pub struct TourController {
    document: Document,
    props: TourProps,
    class_names: ClassNameResolver,
    active_index: usize,
    /// Element currently carrying the active target class.
    marked: Option<Element>,
    root_marker: Option<DocumentMarker>,
    container: Option<PopoverContainer>,
    scrim_guard: Option<ScrimGuard>,
}

impl std::fmt::Debug for TourController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TourController")
            .field("props", &self.props)
            .field("active_index", &self.active_index)
            .field("mounted", &self.is_mounted())
            .finish_non_exhaustive()
    }
}

impl TourController {
    /// Create an unmounted controller at step 0.
    pub fn new(document: &Document, props: TourProps) -> Self {
        Self {
            document: document.clone(),
            props,
            class_names: ClassNameResolver::identity(),
            active_index: 0,
            marked: None,
            root_marker: None,
            container: None,
            scrim_guard: None,
        }
    }

    /// Resolve class names through `class_names` (set before mounting).
    #[must_use]
    pub fn with_class_names(mut self, class_names: ClassNameResolver) -> Self {
        self.class_names = class_names;
        self
    }

    #[must_use]
    pub fn props(&self) -> &TourProps {
        &self.props
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// The step at the active index, if any.
    #[must_use]
    pub fn current_step(&self) -> Option<&Step> {
        self.props.steps.get(self.active_index)
    }

    /// Whether a "prev" action is shown.
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.current_step().is_some() && self.active_index > 0
    }

    /// Whether a "next" action is shown.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_step().is_some() && self.active_index + 1 < self.props.steps.len()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.root_marker.is_some()
    }

    /// Resolve a logical class name through this tour's resolver.
    #[must_use]
    pub fn resolve_class(&self, logical: &str) -> String {
        self.class_names.resolve(logical)
    }

    /// Resolved class marking the active step target.
    #[must_use]
    pub fn active_target_class(&self) -> String {
        self.class_names.resolve(STEP_TARGET_ACTIVE)
    }

    /// Resolved class marking the document while mounted.
    #[must_use]
    pub fn root_marker_class(&self) -> String {
        self.class_names.resolve(ROOT_NODE_ACTIVE)
    }

    /// Handle a message from the view.
    pub fn update(&mut self, msg: TourMsg) -> Option<TourEvent> {
        match msg {
            TourMsg::Prev => self.retreat(),
            TourMsg::Next => self.advance(),
            TourMsg::Close => Some(self.close()),
        }
    }

    /// Move to the next step. No-op unless a next step is shown.
    pub fn advance(&mut self) -> Option<TourEvent> {
        if !self.has_next() {
            return None;
        }
        Some(self.go_to(self.active_index + 1, "next"))
    }

    /// Move to the previous step. No-op unless a previous step is shown.
    pub fn retreat(&mut self) -> Option<TourEvent> {
        if !self.has_prev() {
            return None;
        }
        Some(self.go_to(self.active_index - 1, "prev"))
    }

    /// Reset to step 0, then invoke the caller's close callback.
    pub fn close(&mut self) -> TourEvent {
        let from = self.active_index;
        self.set_index(0);
        #[cfg(feature = "tracing")]
        tracing::info!(message = "tour.close", from);
        if let Some(on_close) = self.props.on_close.as_mut() {
            on_close();
        }
        TourEvent::Closed { from }
    }

    fn go_to(&mut self, to: usize, _reason: &'static str) -> TourEvent {
        let from = self.active_index;
        self.set_index(to);
        #[cfg(feature = "tracing")]
        tracing::info!(message = "tour.step", from, to, reason = _reason);
        TourEvent::StepChanged { from, to }
    }

    fn set_index(&mut self, index: usize) {
        let previous = self.active_index;
        self.active_index = index;
        let previous_target = self.props.steps.get(previous).and_then(Step::target_element);
        self.after_update(previous_target, previous);
        self.reconcile();
    }

    /// Replace all props. The active index is kept as is, so no target
    /// sync runs until the next index change.
    pub fn set_props(&mut self, props: TourProps) {
        self.props = props;
        self.reconcile();
    }

    /// Replace the step list. The active index is kept as is.
    pub fn set_steps(&mut self, steps: Vec<Step>) {
        self.props.steps = steps;
        self.reconcile();
    }

    pub fn set_open(&mut self, is_open: bool) {
        self.props.is_open = is_open;
        self.reconcile();
    }

    /// Post-update target sync from the previous step's target to the
    /// current one. Any other element still marked is cleared as well.
    ///
    /// Skipped when the index did not change or the tour is not mounted.
    fn after_update(&mut self, previous_target: Option<Element>, previous_index: usize) {
        if previous_index == self.active_index || !self.is_mounted() {
            return;
        }
        let class = self.active_target_class();
        let current = self.current_step().and_then(Step::target_element);
        let _outcome = sync_targets(previous_target.as_ref(), current.as_ref(), &class);
        if let Some(stale) = self.marked.take().filter(|el| current.as_ref() != Some(el)) {
            stale.remove_class(&class);
        }
        self.marked = current;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "tour.sync",
            from = previous_index,
            to = self.active_index,
            previous_resolved = _outcome.previous_resolved,
            current_resolved = _outcome.current_resolved,
        );
    }

    fn scrim_visible(&self) -> bool {
        self.props.is_open && self.props.show_scrim && self.current_step().is_some()
    }

    /// Mark the current target the first time the tour is seen open.
    fn mark_current(&mut self) {
        if self.marked.is_some() {
            return;
        }
        if let Some(target) = self.current_step().and_then(Step::target_element) {
            target.add_class(&self.active_target_class());
            self.marked = Some(target);
        }
    }

    fn reconcile(&mut self) {
        if self.is_mounted() && self.props.is_open {
            self.mark_current();
        }
        self.reconcile_scrim();
    }

    fn reconcile_scrim(&mut self) {
        let wanted = self.is_mounted() && self.scrim_visible();
        match (wanted, self.scrim_guard.is_some()) {
            (true, false) => {
                self.scrim_guard = Some(ScrimGuard::acquire(&self.props.get_application_element));
            }
            (false, true) => self.scrim_guard = None,
            _ => {}
        }
    }

    /// Build the view for the current state.
    #[must_use]
    pub fn view(&self) -> Node<TourMsg> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("tour.view", index = self.active_index).entered();

        let Some(step) = self.current_step() else {
            return Node::Empty;
        };
        let has_prev = self.has_prev();
        let has_next = self.has_next();
        let cx = &self.class_names;

        let scrim = self.scrim_visible().then(|| {
            Scrim::new(self.props.get_application_element.clone(), TourMsg::Close).view()
        });

        let prev = has_prev.then(|| {
            Button::new(self.props.prev_button_label.clone())
                .variant(ButtonVariant::Link)
                .on_click(TourMsg::Prev)
                .class_name(cx.class_name(&[
                    Some(BUTTON_PREV),
                    has_next.then_some(BUTTON_PREV_HAS_NEXT),
                ]))
                .view()
        });
        let separator = (has_prev && has_next).then(|| Node::text(SEPARATOR));
        let next = has_next.then(|| {
            Button::new(self.props.next_button_label.clone())
                .variant(ButtonVariant::Link)
                .on_click(TourMsg::Next)
                .class_name(cx.class_name(&[
                    Some(BUTTON_NEXT),
                    has_prev.then_some(BUTTON_NEXT_HAS_PREV),
                ]))
                .view()
        });
        let footer = Node::element("footer")
            .class(cx.resolve(FOOTER))
            .child(prev)
            .child(separator)
            .child(next);

        let popover = Popover::new(POPOVER_ID, TourMsg::Close)
            .open(self.props.is_open)
            .target(step.target.clone())
            .render_target(Locator::by_id(&self.document, POPOVER_CONTAINER_ID))
            .label(step.label.clone())
            .label_as_title(true)
            .close_button_text(self.props.close_button_text.clone())
            .class_name(cx.resolve(POPOVER))
            .portal_class_name(cx.resolve(PORTAL))
            .content(step.content.clone())
            .footer(footer)
            .view();

        Node::element("div")
            .id(POPOVER_CONTAINER_ID)
            .child(scrim)
            .child(popover)
            .into()
    }
}

impl Lifecycle for TourController {
    fn mount(&mut self) {
        if self.is_mounted() {
            return;
        }
        self.root_marker = Some(DocumentMarker::acquire(
            &self.document,
            self.root_marker_class(),
        ));
        self.container = Some(PopoverContainer::acquire(
            &self.document,
            POPOVER_CONTAINER_ID,
        ));
        self.reconcile();
        #[cfg(feature = "tracing")]
        tracing::info!(message = "tour.mount", steps = self.props.steps.len());
    }

    fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        if let Some(target) = self.marked.take() {
            target.remove_class(&self.active_target_class());
        }
        self.scrim_guard = None;
        self.container = None;
        self.root_marker = None;
        #[cfg(feature = "tracing")]
        tracing::info!(message = "tour.unmount");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bpk_dom::Element;
    use bpk_widgets::{EventKind, Mounted};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Page {
        doc: Document,
        targets: Vec<Element>,
    }

    fn page(n: usize) -> Page {
        let doc = Document::new();
        let root = doc.create_element("div").with_id("root");
        doc.body().append_child(&root);
        let targets = (1..=n)
            .map(|i| {
                let el = doc.create_element("div").with_id(format!("step-{i}"));
                root.append_child(&el);
                el
            })
            .collect();
        Page { doc, targets }
    }

    fn steps(doc: &Document, n: usize) -> Vec<Step> {
        (1..=n)
            .map(|i| {
                Step::new(Locator::by_id(doc, format!("step-{i}")), format!("Step {i}"))
                    .content(format!("Body {i}"))
            })
            .collect()
    }

    fn tour(page: &Page, n: usize) -> TourController {
        TourController::new(
            &page.doc,
            TourProps::new(true, steps(&page.doc, n), Locator::by_id(&page.doc, "root")),
        )
    }

    fn active(page: &Page) -> Vec<usize> {
        page.targets
            .iter()
            .enumerate()
            .filter(|(_, el)| el.has_class(STEP_TARGET_ACTIVE))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn advance_and_retreat_clamp() {
        let page = page(2);
        let mut tour = tour(&page, 2);
        assert_eq!(tour.retreat(), None);
        assert_eq!(tour.advance(), Some(TourEvent::StepChanged { from: 0, to: 1 }));
        assert_eq!(tour.advance(), None);
        assert_eq!(tour.active_index(), 1);
        assert_eq!(tour.retreat(), Some(TourEvent::StepChanged { from: 1, to: 0 }));
    }

    #[test]
    fn update_dispatches_messages() {
        let page = page(3);
        let mut tour = tour(&page, 3);
        tour.update(TourMsg::Next);
        tour.update(TourMsg::Next);
        tour.update(TourMsg::Prev);
        assert_eq!(tour.active_index(), 1);
        assert_eq!(tour.update(TourMsg::Close), Some(TourEvent::Closed { from: 1 }));
        assert_eq!(tour.active_index(), 0);
    }

    #[test]
    fn close_resets_before_callback() {
        let page = page(3);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let probe = page.targets[0].clone();
        let props = TourProps::new(true, steps(&page.doc, 3), Locator::none()).with_on_close(
            move || sink.borrow_mut().push(probe.has_class(STEP_TARGET_ACTIVE)),
        );
        let mut tour = Mounted::new(TourController::new(&page.doc, props));
        tour.advance();
        tour.advance();
        tour.close();
        assert_eq!(tour.active_index(), 0);
        // The first target is already re-marked when the callback runs.
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn close_without_callback_is_silent() {
        let page = page(2);
        let mut tour = tour(&page, 2);
        tour.advance();
        assert_eq!(tour.close(), TourEvent::Closed { from: 1 });
        assert_eq!(tour.active_index(), 0);
    }

    #[test]
    fn unmounted_controller_leaves_document_alone() {
        let page = page(2);
        let mut tour = tour(&page, 2);
        tour.advance();
        assert!(active(&page).is_empty());
        assert!(page.doc.document_element().class_list().is_empty());
    }

    #[test]
    fn mount_marks_document_and_first_target() {
        let page = page(2);
        let tour = Mounted::new(tour(&page, 2));
        assert!(page.doc.document_element().has_class(ROOT_NODE_ACTIVE));
        assert_eq!(active(&page), vec![0]);
        assert!(page.doc.get_element_by_id(POPOVER_CONTAINER_ID).is_some());
        drop(tour);
        assert!(!page.doc.document_element().has_class(ROOT_NODE_ACTIVE));
        assert!(active(&page).is_empty());
        assert!(page.doc.get_element_by_id(POPOVER_CONTAINER_ID).is_none());
    }

    #[test]
    fn closed_mount_marks_no_target_until_opened() {
        let page = page(2);
        let props = TourProps::new(false, steps(&page.doc, 2), Locator::none());
        let mut tour = Mounted::new(TourController::new(&page.doc, props));
        assert!(page.doc.document_element().has_class(ROOT_NODE_ACTIVE));
        assert!(active(&page).is_empty());
        tour.set_open(true);
        assert_eq!(active(&page), vec![0]);
        tour.set_open(false);
        assert_eq!(active(&page), vec![0]);
        tour.unmount();
        assert!(active(&page).is_empty());
    }

    #[test]
    fn mark_from_a_longer_list_is_cleared() {
        let page = page(3);
        let mut tour = Mounted::new(tour(&page, 3));
        tour.advance();
        tour.advance();
        tour.set_steps(steps(&page.doc, 1));
        assert_eq!(active(&page), vec![2]);
        tour.close();
        assert_eq!(active(&page), vec![0]);

        tour.set_steps(Vec::new());
        drop(tour);
        assert!(active(&page).is_empty());
    }

    #[test]
    fn unmount_clears_mark_left_by_shrunk_list() {
        let page = page(3);
        let mut tour = Mounted::new(tour(&page, 3));
        tour.advance();
        tour.advance();
        tour.set_steps(steps(&page.doc, 1));
        tour.unmount();
        assert!(active(&page).is_empty());
    }

    #[test]
    fn marker_tracks_mount_not_open_state() {
        let page = page(1);
        let mut tour = Mounted::new(tour(&page, 1));
        tour.set_open(false);
        assert!(page.doc.document_element().has_class(ROOT_NODE_ACTIVE));
        assert!(tour.view().find_by_id(POPOVER_ID).is_none());
    }

    #[test]
    fn scrim_hides_application_while_open() {
        let page = page(2);
        let root = page.doc.get_element_by_id("root").unwrap();
        let mut tour = Mounted::new(tour(&page, 2));
        assert_eq!(root.attribute("aria-hidden").as_deref(), Some("true"));
        tour.set_open(false);
        assert!(root.attribute("aria-hidden").is_none());
        tour.set_open(true);
        assert_eq!(root.attribute("aria-hidden").as_deref(), Some("true"));
        drop(tour);
        assert!(root.attribute("aria-hidden").is_none());
    }

    #[test]
    fn scrim_disabled_renders_no_scrim() {
        let page = page(2);
        let props = TourProps::new(true, steps(&page.doc, 2), Locator::by_id(&page.doc, "root"))
            .with_show_scrim(false);
        let tour = Mounted::new(TourController::new(&page.doc, props));
        assert!(tour.view().find_by_class("bpk-scrim").is_none());
        let root = page.doc.get_element_by_id("root").unwrap();
        assert!(root.attribute("aria-hidden").is_none());
    }

    #[test]
    fn scrim_and_popover_close_through_controller() {
        let page = page(2);
        let tour = Mounted::new(tour(&page, 2));
        let view = tour.view();
        let scrim = view.find_by_class("bpk-scrim").unwrap();
        assert_eq!(scrim.handler(EventKind::Click), Some(&TourMsg::Close));
        let popover = view.find_by_id(POPOVER_ID).unwrap();
        assert_eq!(popover.handler(EventKind::Dismiss), Some(&TourMsg::Close));
    }

    #[test]
    fn footer_class_variants() {
        let page = page(3);
        let mut tour = Mounted::new(tour(&page, 3));
        tour.advance();
        let view = tour.view();
        let prev = view.find_by_class(BUTTON_PREV).unwrap();
        assert!(prev.has_class(BUTTON_PREV_HAS_NEXT));
        let next = view.find_by_class(BUTTON_NEXT).unwrap();
        assert!(next.has_class(BUTTON_NEXT_HAS_PREV));
        assert!(view.find_by_class(FOOTER).unwrap().text_content().contains(SEPARATOR));

        tour.advance();
        let view = tour.view();
        let prev = view.find_by_class(BUTTON_PREV).unwrap();
        assert!(!prev.has_class(BUTTON_PREV_HAS_NEXT));
        assert!(view.find_by_class(BUTTON_NEXT).is_none());
        assert!(!view.find_by_class(FOOTER).unwrap().text_content().contains(SEPARATOR));
    }

    #[test]
    fn scoped_class_names_flow_through() {
        let page = page(2);
        let cx = ClassNameResolver::scoped("BpkTour");
        let active_class = cx.resolve(STEP_TARGET_ACTIVE);
        let root_class = cx.resolve(ROOT_NODE_ACTIVE);
        let mut tour = Mounted::new(tour(&page, 2).with_class_names(cx.clone()));
        assert!(page.doc.document_element().has_class(&root_class));
        tour.advance();
        assert!(page.targets[1].has_class(&active_class));
        assert!(!page.targets[1].has_class(STEP_TARGET_ACTIVE));
        let view = tour.view();
        assert!(view.find_by_class(&cx.resolve(POPOVER)).is_some());
    }

    #[test]
    fn stale_messages_after_shrink_are_ignored() {
        let page = page(3);
        let mut tour = Mounted::new(tour(&page, 3));
        tour.advance();
        tour.advance();
        tour.set_steps(steps(&page.doc, 1));
        assert!(tour.view().is_empty());
        assert_eq!(tour.update(TourMsg::Prev), None);
        assert_eq!(tour.update(TourMsg::Next), None);
        assert_eq!(tour.active_index(), 2);
    }

    #[test]
    fn absent_target_is_tolerated() {
        let page = page(2);
        page.targets[1].remove();
        let mut tour = Mounted::new(tour(&page, 2));
        tour.advance();
        assert!(active(&page).is_empty());
        // Popover defers while its target is missing.
        assert!(tour.view().find_by_id(POPOVER_ID).is_none());
        tour.retreat();
        assert_eq!(active(&page), vec![0]);
    }

    #[cfg(feature = "tracing")]
    mod trace {
        use super::*;
        use std::sync::{Arc, Mutex};
        use tracing::Subscriber;
        use tracing_subscriber::Layer;
        use tracing_subscriber::layer::{Context, SubscriberExt};

        #[derive(Default)]
        struct TourTraceState {
            messages: Vec<String>,
            saw_view_span: bool,
        }

        struct TourTraceCapture {
            state: Arc<Mutex<TourTraceState>>,
        }

        impl<S> Layer<S> for TourTraceCapture
        where
            S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
        {
            fn on_new_span(
                &self,
                attrs: &tracing::span::Attributes<'_>,
                _id: &tracing::Id,
                _ctx: Context<'_, S>,
            ) {
                if attrs.metadata().name() == "tour.view" {
                    self.state.lock().expect("tour trace lock").saw_view_span = true;
                }
            }

            fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                struct Msg {
                    message: Option<String>,
                }
                impl tracing::field::Visit for Msg {
                    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                        if field.name() == "message" {
                            self.message = Some(value.to_string());
                        }
                    }

                    fn record_debug(
                        &mut self,
                        field: &tracing::field::Field,
                        value: &dyn std::fmt::Debug,
                    ) {
                        if field.name() == "message" {
                            self.message = Some(format!("{value:?}").trim_matches('"').to_string());
                        }
                    }
                }
                let mut visitor = Msg { message: None };
                event.record(&mut visitor);
                if let Some(message) = visitor.message {
                    self.state
                        .lock()
                        .expect("tour trace lock")
                        .messages
                        .push(message);
                }
            }
        }

        #[test]
        fn lifecycle_and_navigation_are_logged() {
            let state = Arc::new(Mutex::new(TourTraceState::default()));
            let subscriber = tracing_subscriber::registry().with(TourTraceCapture {
                state: Arc::clone(&state),
            });
            let _guard = tracing::subscriber::set_default(subscriber);
            tracing::callsite::rebuild_interest_cache();

            let page = page(2);
            let mut tour = Mounted::new(tour(&page, 2));
            tour.advance();
            let _ = tour.view();
            tour.close();
            drop(tour);

            let state = state.lock().expect("tour trace lock");
            for expected in ["tour.mount", "tour.sync", "tour.step", "tour.close", "tour.unmount"] {
                assert!(
                    state.messages.iter().any(|m| m == expected),
                    "missing {expected} in {:?}",
                    state.messages
                );
            }
            assert!(state.saw_view_span);
        }
    }
}
