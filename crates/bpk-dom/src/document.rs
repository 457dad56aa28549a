#![forbid(unsafe_code)]

//! Shared element tree.
//!
//! # Design
//!
//! [`Element`] wraps its data in shared, reference-counted storage
//! (`Rc<RefCell<..>>`). Cloning an element hands out another handle to the
//! **same** node; equality is identity, not structure. Parents are held
//! weakly so detached subtrees are freed once the last handle goes away.
//!
//! # Failure Modes
//!
//! - **Cycles**: appending an ancestor under one of its descendants is
//!   rejected (the call returns `false`) rather than building a cycle.
//! - **Re-entrancy**: no method hands out a `RefCell` borrow across a
//!   callback, so mutations from inside [`Locator`](crate::Locator) closures
//!   are safe.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::class_list::ClassList;

struct ElementData {
    tag: String,
    id: Option<String>,
    attributes: Vec<(String, String)>,
    classes: ClassList,
    parent: Weak<RefCell<ElementData>>,
    children: Vec<Element>,
}

/// Handle to a node in a [`Document`].
pub struct Element {
    inner: Rc<RefCell<ElementData>>,
}

// Manual Clone: shares the same Rc.
impl Clone for Element {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Element")
            .field("tag", &inner.tag)
            .field("id", &inner.id)
            .field("class", &inner.classes.to_class_string())
            .field("children", &inner.children.len())
            .finish()
    }
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ElementData {
                tag: tag.to_ascii_lowercase(),
                id: None,
                attributes: Vec::new(),
                classes: ClassList::new(),
                parent: Weak::new(),
                children: Vec::new(),
            })),
        }
    }

    /// Lower-cased tag name.
    #[must_use]
    pub fn tag(&self) -> String {
        self.inner.borrow().tag.clone()
    }

    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.inner.borrow().id.clone()
    }

    /// Set or clear the element id. Blank ids clear it.
    pub fn set_id(&self, id: impl Into<String>) {
        let id = id.into();
        self.inner.borrow_mut().id = if id.trim().is_empty() { None } else { Some(id) };
    }

    /// Builder-style [`set_id`](Self::set_id).
    #[must_use]
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner
            .borrow()
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    pub fn set_attribute(&self, name: &str, value: impl Into<String>) {
        let value = value.into();
        let mut inner = self.inner.borrow_mut();
        match inner.attributes.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => inner.attributes.push((name.to_owned(), value)),
        }
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&self, name: &str) -> Option<String> {
        let mut inner = self.inner.borrow_mut();
        let pos = inner.attributes.iter().position(|(k, _)| k == name)?;
        Some(inner.attributes.remove(pos).1)
    }

    /// Snapshot of the element's classes.
    #[must_use]
    pub fn class_list(&self) -> ClassList {
        self.inner.borrow().classes.clone()
    }

    /// The `class` attribute value.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.inner.borrow().classes.to_class_string()
    }

    pub fn add_class(&self, value: &str) -> bool {
        self.inner.borrow_mut().classes.add(value)
    }

    pub fn remove_class(&self, value: &str) -> bool {
        self.inner.borrow_mut().classes.remove(value)
    }

    pub fn toggle_class(&self, token: &str) -> bool {
        self.inner.borrow_mut().classes.toggle(token)
    }

    #[must_use]
    pub fn has_class(&self, token: &str) -> bool {
        self.inner.borrow().classes.contains(token)
    }

    #[must_use]
    pub fn parent(&self) -> Option<Element> {
        self.inner
            .borrow()
            .parent
            .upgrade()
            .map(|inner| Element { inner })
    }

    #[must_use]
    pub fn children(&self) -> Vec<Element> {
        self.inner.borrow().children.clone()
    }

    /// Whether `self` is `other` or one of its ancestors.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Element) -> bool {
        let mut cursor = Some(other.clone());
        while let Some(node) = cursor {
            if node == *self {
                return true;
            }
            cursor = node.parent();
        }
        false
    }

    /// Append `child` as the last child, detaching it from any previous parent.
    ///
    /// Returns `false` (and leaves the tree untouched) if `child` is `self` or
    /// one of its ancestors.
    pub fn append_child(&self, child: &Element) -> bool {
        if child.is_ancestor_of(self) {
            return false;
        }
        child.remove();
        child.inner.borrow_mut().parent = Rc::downgrade(&self.inner);
        self.inner.borrow_mut().children.push(child.clone());
        true
    }

    /// Detach from the parent. Returns `false` if already detached.
    pub fn remove(&self) -> bool {
        let Some(parent) = self.parent() else {
            return false;
        };
        parent.inner.borrow_mut().children.retain(|c| c != self);
        self.inner.borrow_mut().parent = Weak::new();
        true
    }

    /// Depth-first search of this subtree (including `self`) by id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<Element> {
        if self.inner.borrow().id.as_deref() == Some(id) {
            return Some(self.clone());
        }
        self.children()
            .into_iter()
            .find_map(|child| child.find_by_id(id))
    }
}

/// A document: a `<html>` root element holding a `<body>`.
///
/// Cloning a `Document` shares the same tree.
#[derive(Clone, Debug)]
pub struct Document {
    root: Element,
    body: Element,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        let root = Element::new("html");
        let body = Element::new("body");
        root.append_child(&body);
        Self { root, body }
    }

    /// The root `<html>` element.
    #[must_use]
    pub fn document_element(&self) -> Element {
        self.root.clone()
    }

    #[must_use]
    pub fn body(&self) -> Element {
        self.body.clone()
    }

    /// Create a detached element owned by this document.
    #[must_use]
    pub fn create_element(&self, tag: &str) -> Element {
        Element::new(tag)
    }

    /// Look up an attached element by id.
    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
        if id.is_empty() {
            return None;
        }
        self.root.find_by_id(id)
    }

    /// Whether `element` is attached to this document.
    #[must_use]
    pub fn contains(&self, element: &Element) -> bool {
        self.root.is_ancestor_of(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_has_html_and_body() {
        let doc = Document::new();
        assert_eq!(doc.document_element().tag(), "html");
        assert_eq!(doc.body().tag(), "body");
        assert_eq!(doc.body().parent(), Some(doc.document_element()));
    }

    #[test]
    fn lookup_only_sees_attached_elements() {
        let doc = Document::new();
        let el = doc.create_element("div").with_id("step-1");
        assert!(doc.get_element_by_id("step-1").is_none());
        doc.body().append_child(&el);
        assert_eq!(doc.get_element_by_id("step-1"), Some(el.clone()));
        el.remove();
        assert!(doc.get_element_by_id("step-1").is_none());
        assert!(!doc.contains(&el));
    }

    #[test]
    fn append_rejects_cycles() {
        let doc = Document::new();
        let outer = doc.create_element("div");
        let inner = doc.create_element("span");
        outer.append_child(&inner);
        assert!(!inner.append_child(&outer));
        assert!(!outer.append_child(&outer));
        assert_eq!(inner.parent(), Some(outer));
    }

    #[test]
    fn append_moves_between_parents() {
        let doc = Document::new();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        let child = doc.create_element("p");
        a.append_child(&child);
        b.append_child(&child);
        assert!(a.children().is_empty());
        assert_eq!(b.children(), vec![child]);
    }

    #[test]
    fn attributes_replace_and_remove() {
        let doc = Document::new();
        let el = doc.create_element("div");
        el.set_attribute("aria-hidden", "false");
        el.set_attribute("aria-hidden", "true");
        assert_eq!(el.attribute("aria-hidden").as_deref(), Some("true"));
        assert_eq!(el.remove_attribute("aria-hidden").as_deref(), Some("true"));
        assert!(el.attribute("aria-hidden").is_none());
    }

    #[test]
    fn clones_share_identity() {
        let doc = Document::new();
        let el = doc.create_element("div");
        let alias = el.clone();
        alias.add_class("x");
        assert!(el.has_class("x"));
        assert_ne!(el, doc.create_element("div"));
    }
}
