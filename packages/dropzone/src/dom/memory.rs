//! An in-process document, used for headless runs and tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{Document, DropElement};

/// A leaf element created by [`DropElement::append_text_child`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryNode {
    pub tag: String,
    pub text: String,
}

#[derive(Debug, Default)]
struct ElementData {
    classes: Vec<String>,
    children: Vec<MemoryNode>,
}

/// A shared handle to an element of a [`MemoryDocument`].
///
/// Clones point at the same element, like handles into a real DOM.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    data: Rc<RefCell<ElementData>>,
}

impl MemoryElement {
    pub fn has_class(&self, class: &str) -> bool {
        self.data.borrow().classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.data.borrow().classes.clone()
    }

    pub fn children(&self) -> Vec<MemoryNode> {
        self.data.borrow().children.clone()
    }

    /// The text of every child, in document order.
    pub fn child_texts(&self) -> Vec<String> {
        self.data
            .borrow()
            .children
            .iter()
            .map(|node| node.text.clone())
            .collect()
    }
}

impl DropElement for MemoryElement {
    fn add_class(&self, class: &str) {
        let mut data = self.data.borrow_mut();
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.data.borrow_mut().classes.retain(|c| c != class);
    }

    fn clear_children(&self) {
        self.data.borrow_mut().children.clear();
    }

    fn append_text_child(&self, tag: &str, text: &str) {
        self.data.borrow_mut().children.push(MemoryNode {
            tag: tag.to_string(),
            text: text.to_string(),
        });
    }
}

/// A document whose elements are registered by selector.
///
/// Selectors are matched verbatim, there is no CSS engine behind them.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: Rc<RefCell<HashMap<String, MemoryElement>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh element under `selector`, replacing any previous one, and return a handle to it.
    pub fn insert(&self, selector: impl Into<String>) -> MemoryElement {
        let element = MemoryElement::default();
        self.elements
            .borrow_mut()
            .insert(selector.into(), element.clone());
        element
    }

    /// Detach the element registered under `selector`. Handles already given out stay usable.
    pub fn remove(&self, selector: &str) -> Option<MemoryElement> {
        self.elements.borrow_mut().remove(selector)
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn query_selector(&self, selector: &str) -> Option<MemoryElement> {
        self.elements.borrow().get(selector).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_is_a_set() {
        let doc = MemoryDocument::new();
        let el = doc.insert("#zone");
        el.add_class("a");
        el.add_class("a");
        el.add_class("b");
        assert_eq!(el.classes(), vec!["a", "b"]);

        el.remove_class("a");
        el.remove_class("missing");
        assert_eq!(el.classes(), vec!["b"]);
    }

    #[test]
    fn handles_share_state() {
        let doc = MemoryDocument::new();
        let el = doc.insert("#list");
        let found = doc.query_selector("#list").unwrap();

        found.append_text_child("li", "one");
        assert_eq!(el.child_texts(), vec!["one"]);
        assert_eq!(el.children()[0].tag, "li");

        el.clear_children();
        assert!(found.children().is_empty());
    }

    #[test]
    fn missing_selector_is_none() {
        let doc = MemoryDocument::new();
        doc.insert("#a");
        assert!(doc.query_selector("#b").is_none());
        assert!(doc.remove("#a").is_some());
        assert!(doc.query_selector("#a").is_none());
    }
}
