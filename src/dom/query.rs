//! Document queries: by id, by attribute, generic predicate matching.

use super::node::{ElementId, StyleElement};
use super::tree::HeadlessDocument;

impl HeadlessDocument {
    /// Find the first element whose `id` attribute matches.
    pub fn query_by_id(&self, id: &str) -> Option<ElementId> {
        self.iter_head().find(|(_, el)| el.id() == Some(id)).map(|(eid, _)| eid)
    }

    /// Find all elements carrying `name`, in head order.
    pub fn query_by_attribute(&self, name: &str) -> Vec<ElementId> {
        self.query_all(|el| el.attribute(name).is_some())
    }

    /// Find all elements matching an arbitrary predicate, in head order.
    pub fn query_all(&self, predicate: impl Fn(&StyleElement) -> bool) -> Vec<ElementId> {
        self.iter_head()
            .filter(|(_, el)| predicate(el))
            .map(|(eid, _)| eid)
            .collect()
    }

    fn iter_head(&self) -> impl Iterator<Item = (ElementId, &StyleElement)> {
        self.head()
            .iter()
            .filter_map(|id| self.elements.get(*id).map(|el| (*id, el)))
    }
}
