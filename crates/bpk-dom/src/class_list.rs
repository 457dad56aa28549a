#![forbid(unsafe_code)]

//! Ordered, duplicate-free set of class tokens.
//!
//! Mirrors the semantics of a browser `DOMTokenList`: adding a present token
//! and removing an absent one are both no-ops, and iteration follows
//! insertion order.

use smallvec::SmallVec;

/// Class tokens attached to a single element.
///
/// Most elements carry a handful of classes, so tokens are stored inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: SmallVec<[String; 4]>,
}

impl ClassList {
    /// Create an empty class list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a space-separated class attribute value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        list.add(value);
        list
    }

    /// Add every whitespace-separated token in `value`.
    ///
    /// Returns `true` if at least one token was not already present.
    pub fn add(&mut self, value: &str) -> bool {
        let mut changed = false;
        for token in value.split_whitespace() {
            if !self.contains(token) {
                self.tokens.push(token.to_owned());
                changed = true;
            }
        }
        changed
    }

    /// Remove every whitespace-separated token in `value`.
    ///
    /// Returns `true` if at least one token was present.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.tokens.len();
        for token in value.split_whitespace() {
            self.tokens.retain(|t| t != token);
        }
        self.tokens.len() != before
    }

    /// Whether `token` is present. Blank tokens are never present.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        let token = token.trim();
        !token.is_empty() && self.tokens.iter().any(|t| t == token)
    }

    /// Toggle a single token. Returns whether it is present afterwards.
    pub fn toggle(&mut self, token: &str) -> bool {
        if self.contains(token) {
            self.remove(token);
            false
        } else {
            self.add(token)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Space-joined representation, as it would appear in a `class` attribute.
    #[must_use]
    pub fn to_class_string(&self) -> String {
        self.tokens.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent() {
        let mut list = ClassList::new();
        assert!(list.add("a"));
        assert!(!list.add("a"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut list = ClassList::parse("a b");
        assert!(!list.remove("c"));
        assert_eq!(list.to_class_string(), "a b");
    }

    #[test]
    fn multi_token_values_split() {
        let mut list = ClassList::parse("  a   b a ");
        assert_eq!(list.to_class_string(), "a b");
        assert!(list.remove("a b"));
        assert!(list.is_empty());
    }

    #[test]
    fn blank_tokens_ignored() {
        let mut list = ClassList::new();
        assert!(!list.add("   "));
        assert!(!list.contains(""));
        assert!(list.is_empty());
    }

    #[test]
    fn toggle_flips_presence() {
        let mut list = ClassList::new();
        assert!(list.toggle("x"));
        assert!(list.contains("x"));
        assert!(!list.toggle("x"));
        assert!(!list.contains("x"));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let list = ClassList::parse("c a b");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }
}
