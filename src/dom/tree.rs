//! Host document abstraction and the in-memory headless document.

use std::any::Any;

use slotmap::SlotMap;

use super::node::{ElementId, StyleElement};

/// The part of a host document the style engine writes to.
///
/// Implementations append new style elements to the document head and grow
/// their text in place. Nothing is ever removed.
pub trait Document {
    /// Create a `<style>` element with the given attributes and append it to
    /// the head.
    fn create_style_element(&mut self, attributes: &[(&str, &str)]) -> ElementId;

    /// Append CSS text to an existing style element. Unknown ids are ignored.
    fn append_text(&mut self, element: ElementId, text: &str);

    /// Current text of a style element.
    fn text_content(&self, element: ElementId) -> Option<&str>;

    /// Access to the concrete document, for hosts and tests that need it.
    fn as_any(&self) -> &dyn Any;
}

/// A slotmap-backed document with only a head, for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct HeadlessDocument {
    pub(crate) elements: SlotMap<ElementId, StyleElement>,
    head: Vec<ElementId>,
    append_calls: usize,
}

impl HeadlessDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Head children in insertion order.
    pub fn head(&self) -> &[ElementId] {
        &self.head
    }

    /// Immutable access to an element.
    pub fn get(&self, id: ElementId) -> Option<&StyleElement> {
        self.elements.get(id)
    }

    /// Number of elements in the document.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Total number of [`Document::append_text`] calls that hit an element.
    pub fn append_calls(&self) -> usize {
        self.append_calls
    }

    /// All head CSS, concatenated in head order.
    pub fn head_css(&self) -> String {
        self.head
            .iter()
            .filter_map(|id| self.elements.get(*id))
            .map(|el| el.text.as_str())
            .collect()
    }
}

impl Document for HeadlessDocument {
    fn create_style_element(&mut self, attributes: &[(&str, &str)]) -> ElementId {
        let element = attributes
            .iter()
            .fold(StyleElement::new(), |el, (name, value)| {
                el.with_attribute(*name, *value)
            });
        let id = self.elements.insert(element);
        self.head.push(id);
        id
    }

    fn append_text(&mut self, element: ElementId, text: &str) {
        if let Some(el) = self.elements.get_mut(element) {
            el.text.push_str(text);
            self.append_calls += 1;
        }
    }

    fn text_content(&self, element: ElementId) -> Option<&str> {
        self.elements.get(element).map(|el| el.text.as_str())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
