//! Node types: ElementId, StyleElement.

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a document element. Copy, lightweight (u64).
    pub struct ElementId;
}

/// A `<style>` element living in the document head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleElement {
    /// Attributes in insertion order.
    pub attributes: Vec<(String, String)>,
    /// Accumulated CSS text.
    pub text: String,
}

impl StyleElement {
    /// Create an empty style element.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute (builder). Replaces an existing value.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set an attribute, replacing an existing value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Look up an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The element's `id` attribute.
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }
}
