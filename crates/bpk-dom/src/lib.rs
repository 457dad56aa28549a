#![forbid(unsafe_code)]

//! Document model for Backpack components.
//!
//! Components in this workspace never own the page they decorate. They reach
//! into it through three small abstractions:
//!
//! - [`Document`] / [`Element`]: a shared, single-threaded element tree with
//!   ids, attributes and class lists. Handles are cheap to clone and compare
//!   by identity.
//! - [`Locator`]: a resolvable reference to an element. It is invoked every
//!   time a component needs the element, so it tolerates elements that are
//!   not attached yet or have been replaced since the last lookup.
//! - [`ClassNameResolver`]: maps logical style names onto the scoped names a
//!   stylesheet build produced.

pub mod class_list;
pub mod class_name;
pub mod document;
pub mod locator;

pub use class_list::ClassList;
pub use class_name::ClassNameResolver;
pub use document::{Document, Element};
pub use locator::Locator;
