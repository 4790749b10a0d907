//! Style definitions, generated class maps and caller overrides.

use std::collections::BTreeMap;

use crate::color::DynamicColorPalette;
use crate::theme::Theme;

/// What a style definition function receives.
#[derive(Debug, Clone, Copy)]
pub struct StyleArgs<'a> {
    /// Palette derived from the instance's color intent pair.
    pub color: &'a DynamicColorPalette,
    /// The theme in effect for this render.
    pub theme: &'a Theme,
}

/// Raw, uncompiled style templates keyed by slot name, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyleDefinition {
    slots: Vec<(String, String)>,
}

impl StyleDefinition {
    /// Create an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a slot (builder).
    pub fn slot(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        let name = name.into();
        let template = template.into();
        match self.slots.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = template,
            None => self.slots.push((name, template)),
        }
        self
    }

    /// Template of a slot.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t.as_str())
    }

    /// Iterate `(slot, template)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots.iter().map(|(n, t)| (n.as_str(), t.as_str()))
    }

    /// Slot names in declaration order.
    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<N: Into<String>, T: Into<String>> FromIterator<(N, T)> for StyleDefinition {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(StyleDefinition::new(), |def, (n, t)| def.slot(n, t))
    }
}

/// Class names keyed by slot name, in slot order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassMap {
    entries: Vec<(String, String)>,
}

impl ClassMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slot. Callers insert each slot once.
    pub fn insert(&mut self, slot: impl Into<String>, class_name: impl Into<String>) {
        self.entries.push((slot.into(), class_name.into()));
    }

    /// Class name for a slot.
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| s == slot)
            .map(|(_, c)| c.as_str())
    }

    /// Class name for the `root` slot, or `""` when the definition has none.
    pub fn root(&self) -> &str {
        self.get("root").unwrap_or("")
    }

    /// Iterate `(slot, class)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, c)| (s.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>, C: Into<String>> FromIterator<(S, C)> for ClassMap {
    fn from_iter<I: IntoIterator<Item = (S, C)>>(iter: I) -> Self {
        let mut map = ClassMap::new();
        for (slot, class_name) in iter {
            map.insert(slot, class_name);
        }
        map
    }
}

impl std::ops::Index<&str> for ClassMap {
    type Output = str;

    fn index(&self, slot: &str) -> &str {
        self.get(slot).unwrap_or("")
    }
}

/// Caller-supplied extra class names per slot (the `styles` prop).
///
/// Typically rebuilt on every render, so caches compare it by value, never
/// by identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SlotOverrides(BTreeMap<String, String>);

impl SlotOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override (builder).
    pub fn with(mut self, slot: impl Into<String>, class_name: impl Into<String>) -> Self {
        self.0.insert(slot.into(), class_name.into());
        self
    }

    pub fn get(&self, slot: &str) -> Option<&str> {
        self.0.get(slot).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>, C: Into<String>> FromIterator<(S, C)> for SlotOverrides {
    fn from_iter<I: IntoIterator<Item = (S, C)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(s, c)| (s.into(), c.into())).collect())
    }
}
