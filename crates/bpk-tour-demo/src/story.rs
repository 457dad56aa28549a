#![forbid(unsafe_code)]

//! The sample page the demo tours: a small "Fancy App" with three targets.

use std::cell::Cell;
use std::rc::Rc;

use bpk_dom::{Document, Element, Locator};
use bpk_tour::{
    BUTTON_NEXT, BUTTON_PREV, Step, TourConfig, TourController, TourEvent, TourMsg, TourProps,
};
use bpk_widgets::{EventKind, Mounted, Node};

const CLOSE_BUTTON: &str = "bpk-popover__close-button";
const SCRIM: &str = "bpk-scrim";
const TOGGLED_CONTENT_ID: &str = "toggled-content";

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Next,
    Prev,
    Close,
    Scrim,
    Toggle,
    Help,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "o" | "open" | "start" => Some(Self::Start),
            "n" | "next" => Some(Self::Next),
            "p" | "prev" => Some(Self::Prev),
            "c" | "close" => Some(Self::Close),
            "s" | "scrim" => Some(Self::Scrim),
            "t" | "toggle" => Some(Self::Toggle),
            "h" | "help" | "?" => Some(Self::Help),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

pub const HELP: &str = "\
commands:
  o  start the tour
  n  click Next
  p  click Prev
  c  click Close
  s  click the scrim
  t  toggle the step-1 content
  q  quit";

/// Scripted walkthrough used by `--script`.
pub const SCRIPT: &[Command] = &[
    Command::Start,
    Command::Next,
    Command::Next,
    Command::Prev,
    Command::Close,
    Command::Toggle,
    Command::Start,
    Command::Scrim,
    Command::Quit,
];

fn tour_steps(doc: &Document) -> Vec<Step> {
    vec![
        Step::new(Locator::by_id(doc, "step-1"), "Toggle content")
            .content("This feature will toggle some content. Click on the button to view."),
        Step::new(Locator::by_id(doc, "step-2"), "Text info").content("Some help on this text"),
        Step::new(Locator::by_id(doc, "step-3"), "Second button")
            .content("Some help on this second button"),
    ]
}

fn build_page(doc: &Document) -> Element {
    let root = doc.create_element("div").with_id("root");
    doc.body().append_child(&root);
    root.append_child(&doc.create_element("h1").with_id("title"));
    let start = doc.create_element("button").with_id("start-tour");
    start.add_class("bpk-button bpk-button--large");
    root.append_child(&start);

    let step_one = doc.create_element("div").with_id("step-1");
    step_one.append_child(&doc.create_element("button"));
    root.append_child(&step_one);
    root.append_child(&doc.create_element("span").with_id("step-2"));
    root.append_child(&doc.create_element("div"));
    root.append_child(&doc.create_element("button").with_id("step-3"));
    step_one
}

/// The page plus its mounted tour.
pub struct Story {
    doc: Document,
    step_one: Element,
    show_tour: Rc<Cell<bool>>,
    tour: Mounted<TourController>,
}

impl Story {
    pub fn new(config: &TourConfig) -> Self {
        let doc = Document::new();
        let step_one = build_page(&doc);
        let show_tour = Rc::new(Cell::new(false));
        let on_close = Rc::clone(&show_tour);
        let props = TourProps::new(false, tour_steps(&doc), Locator::by_id(&doc, "root"))
            .apply_config(config)
            .with_on_close(move || on_close.set(false));
        let tour = Mounted::new(
            TourController::new(&doc, props).with_class_names(config.class_name_resolver()),
        );
        Self {
            doc,
            step_one,
            show_tour,
            tour,
        }
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    #[must_use]
    pub fn tour(&self) -> &TourController {
        &self.tour
    }

    #[must_use]
    pub fn view(&self) -> Node<TourMsg> {
        self.tour.view()
    }

    /// Apply a command. Returns `false` once the user quits.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start => self.start_tour(),
            Command::Next => self.log_click(self.tour.resolve_class(BUTTON_NEXT)),
            Command::Prev => self.log_click(self.tour.resolve_class(BUTTON_PREV)),
            Command::Close => self.log_click(CLOSE_BUTTON.to_owned()),
            Command::Scrim => self.log_click(SCRIM.to_owned()),
            Command::Toggle => self.toggle_content(),
            Command::Help => println!("{HELP}"),
            Command::Quit => return false,
        }
        true
    }

    pub fn start_tour(&mut self) {
        self.show_tour.set(true);
        self.tour.set_open(true);
        tracing::info!(message = "story.start");
    }

    /// Show or hide the extra content under the first target.
    pub fn toggle_content(&mut self) {
        match self.doc.get_element_by_id(TOGGLED_CONTENT_ID) {
            Some(content) => {
                content.remove();
            }
            None => {
                let content = self.doc.create_element("div").with_id(TOGGLED_CONTENT_ID);
                self.step_one.append_child(&content);
            }
        }
        tracing::info!(message = "story.toggle", shown = self.content_shown());
    }

    #[must_use]
    pub fn content_shown(&self) -> bool {
        self.doc.get_element_by_id(TOGGLED_CONTENT_ID).is_some()
    }

    /// Dispatch the click handler of the first rendered element with `class`.
    pub fn click(&mut self, class: &str) -> Option<TourEvent> {
        let msg = self
            .tour
            .view()
            .find_by_class(class)
            .and_then(|el| el.handler(EventKind::Click).copied())?;
        let event = self.tour.update(msg);
        if self.tour.props().is_open != self.show_tour.get() {
            self.tour.set_open(self.show_tour.get());
        }
        event
    }

    fn log_click(&mut self, class: String) {
        match self.click(&class) {
            Some(event) => tracing::info!(message = "story.click", class = %class, ?event),
            None => tracing::warn!(message = "story.click.ignored", class = %class),
        }
    }

    /// One-line summary of the page state.
    #[must_use]
    pub fn status(&self) -> String {
        let tour = &*self.tour;
        let target = tour
            .current_step()
            .and_then(Step::target_element)
            .and_then(|el| el.id())
            .unwrap_or_else(|| "-".to_owned());
        let hidden = self
            .doc
            .get_element_by_id("root")
            .and_then(|root| root.attribute("aria-hidden"))
            .is_some();
        format!(
            "tour={} step={}/{} target=#{} content={} app-hidden={}",
            if tour.props().is_open { "open" } else { "closed" },
            tour.active_index() + 1,
            tour.props().steps.len(),
            target,
            if self.content_shown() { "shown" } else { "hidden" },
            hidden,
        )
    }
}
