#![forbid(unsafe_code)]

//! Declarative view tree.
//!
//! Components describe their output as a [`Node`] tree. Interactive elements
//! carry *messages* rather than callbacks: a host that receives a click on an
//! element looks up the element's handler for [`EventKind::Click`] and feeds
//! the message back into the owning component's `update`. This keeps the
//! tree plain data (comparable, printable) and keeps all state transitions
//! inside the component.
//!
//! # Example
//!
//! ```
//! use bpk_widgets::node::{EventKind, Node};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Msg { Next }
//!
//! let view: Node<Msg> = Node::element("footer")
//!     .class("footer")
//!     .child(Node::element("button").class("next").on(EventKind::Click, Msg::Next).child("Next"))
//!     .into();
//!
//! let next = view.find_by_class("next").unwrap();
//! assert_eq!(next.handler(EventKind::Click), Some(&Msg::Next));
//! assert_eq!(view.to_markup(), r#"<footer class="footer"><button class="next">Next</button></footer>"#);
//! ```

use bpk_dom::Element;

/// User interactions a node can respond to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Pointer activation or Enter/Space on a focused control.
    Click,
    /// Escape key or a click outside the node.
    Dismiss,
}

/// A node in a view tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<M> {
    /// Renders nothing.
    Empty,
    /// Escaped text.
    Text(String),
    /// Sibling nodes without a wrapper.
    Fragment(Vec<Node<M>>),
    Element(ElementNode<M>),
    /// Content rendered into a different host element.
    Portal(PortalNode<M>),
}

impl<M> Default for Node<M> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<M> From<&str> for Node<M> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl<M> From<String> for Node<M> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<M> From<ElementNode<M>> for Node<M> {
    fn from(element: ElementNode<M>) -> Self {
        Self::Element(element)
    }
}

impl<M> From<PortalNode<M>> for Node<M> {
    fn from(portal: PortalNode<M>) -> Self {
        Self::Portal(portal)
    }
}

impl<M> From<Option<Node<M>>> for Node<M> {
    fn from(node: Option<Node<M>>) -> Self {
        node.unwrap_or(Self::Empty)
    }
}

/// A tagged element with attributes, handlers and children.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode<M> {
    pub tag: String,
    pub id: Option<String>,
    /// Space-separated, already resolved class names.
    pub class_name: String,
    pub attributes: Vec<(String, String)>,
    pub handlers: Vec<(EventKind, M)>,
    pub children: Vec<Node<M>>,
}

impl<M> ElementNode<M> {
    /// Create an element with no attributes.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            class_name: String::new(),
            attributes: Vec::new(),
            handlers: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append class names. Blank input is ignored.
    #[must_use]
    pub fn class(mut self, class_name: impl AsRef<str>) -> Self {
        for token in class_name.as_ref().split_whitespace() {
            if !self.has_class(token) {
                if !self.class_name.is_empty() {
                    self.class_name.push(' ');
                }
                self.class_name.push_str(token);
            }
        }
        self
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Register the message emitted for `kind`. Later registrations win.
    #[must_use]
    pub fn on(mut self, kind: EventKind, msg: M) -> Self {
        self.handlers.retain(|(k, _)| *k != kind);
        self.handlers.push((kind, msg));
        self
    }

    /// Append a child. [`Node::Empty`] children are dropped.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node<M>>) -> Self {
        let child = child.into();
        if !matches!(child, Node::Empty) {
            self.children.push(child);
        }
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node<M>>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    #[must_use]
    pub fn has_class(&self, token: &str) -> bool {
        self.class_name.split_whitespace().any(|t| t == token)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Message emitted for `kind`, if the element handles it.
    #[must_use]
    pub fn handler(&self, kind: EventKind) -> Option<&M> {
        self.handlers
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, msg)| msg)
    }

    /// Concatenated text of all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

/// Content rendered into `host` instead of in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PortalNode<M> {
    pub host: Element,
    pub class_name: String,
    pub child: Box<Node<M>>,
}

impl<M> Node<M> {
    /// Start building an element.
    #[must_use]
    pub fn element(tag: impl Into<String>) -> ElementNode<M> {
        ElementNode::new(tag)
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Whether the node renders nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Fragment(children) => children.iter().all(Node::is_empty),
            Self::Text(_) | Self::Element(_) | Self::Portal(_) => false,
        }
    }

    /// Depth-first search for the first element matching `pred`.
    pub fn find(&self, pred: &impl Fn(&ElementNode<M>) -> bool) -> Option<&ElementNode<M>> {
        match self {
            Self::Empty | Self::Text(_) => None,
            Self::Fragment(children) => children.iter().find_map(|c| c.find(pred)),
            Self::Element(el) => {
                if pred(el) {
                    Some(el)
                } else {
                    el.children.iter().find_map(|c| c.find(pred))
                }
            }
            Self::Portal(portal) => portal.child.find(pred),
        }
    }

    /// Every element matching `pred`, in document order.
    pub fn find_all(&self, pred: &impl Fn(&ElementNode<M>) -> bool) -> Vec<&ElementNode<M>> {
        let mut out = Vec::new();
        self.collect_matches(pred, &mut out);
        out
    }

    fn collect_matches<'a>(
        &'a self,
        pred: &impl Fn(&ElementNode<M>) -> bool,
        out: &mut Vec<&'a ElementNode<M>>,
    ) {
        match self {
            Self::Empty | Self::Text(_) => {}
            Self::Fragment(children) => {
                for child in children {
                    child.collect_matches(pred, out);
                }
            }
            Self::Element(el) => {
                if pred(el) {
                    out.push(el);
                }
                for child in &el.children {
                    child.collect_matches(pred, out);
                }
            }
            Self::Portal(portal) => portal.child.collect_matches(pred, out),
        }
    }

    #[must_use]
    pub fn find_by_class(&self, token: &str) -> Option<&ElementNode<M>> {
        self.find(&|el| el.has_class(token))
    }

    #[must_use]
    pub fn find_all_by_class(&self, token: &str) -> Vec<&ElementNode<M>> {
        self.find_all(&|el| el.has_class(token))
    }

    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&ElementNode<M>> {
        self.find(&|el| el.id.as_deref() == Some(id))
    }

    /// The first portal in the tree.
    #[must_use]
    pub fn portal(&self) -> Option<&PortalNode<M>> {
        match self {
            Self::Empty | Self::Text(_) => None,
            Self::Fragment(children) => children.iter().find_map(Node::portal),
            Self::Element(el) => el.children.iter().find_map(Node::portal),
            Self::Portal(portal) => Some(portal),
        }
    }

    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Empty => {}
            Self::Text(text) => out.push_str(text),
            Self::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Self::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
            Self::Portal(portal) => portal.child.collect_text(out),
        }
    }

    /// Deterministic HTML-like markup.
    ///
    /// Handlers are not rendered. Portals render as a `<portal>` element
    /// naming their host by id (or tag when the host has no id).
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        match self {
            Self::Empty => {}
            Self::Text(text) => escape_into(text, out),
            Self::Fragment(children) => {
                for child in children {
                    child.write_markup(out);
                }
            }
            Self::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                if let Some(id) = &el.id {
                    write_attr(out, "id", id);
                }
                if !el.class_name.is_empty() {
                    write_attr(out, "class", &el.class_name);
                }
                for (name, value) in &el.attributes {
                    write_attr(out, name, value);
                }
                out.push('>');
                for child in &el.children {
                    child.write_markup(out);
                }
                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
            Self::Portal(portal) => {
                let host = portal
                    .host
                    .id()
                    .map(|id| format!("#{id}"))
                    .unwrap_or_else(|| portal.host.tag());
                out.push_str("<portal");
                write_attr(out, "host", &host);
                if !portal.class_name.is_empty() {
                    write_attr(out, "class", &portal.class_name);
                }
                out.push('>');
                portal.child.write_markup(out);
                out.push_str("</portal>");
            }
        }
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    escape_into(value, out);
    out.push('"');
}

fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
