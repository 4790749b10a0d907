//! The props surface a styled component accepts.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use super::definition::SlotOverrides;

/// Element or component type a root renders as.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// A host element such as `div` or `button`.
    Intrinsic(Cow<'static, str>),
    /// A named library or application component.
    Component(Cow<'static, str>),
}

impl ElementType {
    /// Host element by tag name.
    pub fn intrinsic(tag: impl Into<Cow<'static, str>>) -> Self {
        ElementType::Intrinsic(tag.into())
    }

    /// Component by name.
    pub fn component(name: impl Into<Cow<'static, str>>) -> Self {
        ElementType::Component(name.into())
    }

    /// Tag or component name.
    pub fn name(&self) -> &str {
        match self {
            ElementType::Intrinsic(tag) | ElementType::Component(tag) => tag.as_ref(),
        }
    }
}

impl Default for ElementType {
    fn default() -> Self {
        ElementType::Intrinsic(Cow::Borrowed("div"))
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inline style declarations, ordered by property name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct InlineStyle(BTreeMap<String, String>);

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property (builder).
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(property.into(), value.into());
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `self` overlaid with `other`; `other` wins on conflicting properties.
    pub fn merged(&self, other: &InlineStyle) -> InlineStyle {
        let mut out = self.clone();
        out.0
            .extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InlineStyle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Style-related props plus the component's own props in `rest`.
///
/// Every field is optional; missing values fall back to theme colors, an
/// empty override map and the component's default element type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleProps<P = ()> {
    /// Background intent (the surface the component sits on).
    pub on: Option<String>,
    /// Foreground intent.
    pub color: Option<String>,
    /// Inline style applied to the root.
    pub style: Option<InlineStyle>,
    /// Extra class names per slot.
    pub styles: Option<SlotOverrides>,
    /// Extra class name for the root.
    pub class_name: Option<String>,
    /// Element type override for the root.
    pub component: Option<ElementType>,
    /// Props passed through untouched.
    pub rest: P,
}

impl<P> StyleProps<P> {
    /// Wrap passthrough props with no style props set.
    pub fn new(rest: P) -> Self {
        Self {
            on: None,
            color: None,
            style: None,
            styles: None,
            class_name: None,
            component: None,
            rest,
        }
    }

    /// Set the background intent (builder).
    pub fn on(mut self, on: impl Into<String>) -> Self {
        self.on = Some(on.into());
        self
    }

    /// Set the foreground intent (builder).
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the root inline style (builder).
    pub fn style(mut self, style: InlineStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the per-slot class overrides (builder).
    pub fn styles(mut self, styles: SlotOverrides) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Set the root class override (builder).
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the root element type (builder).
    pub fn component(mut self, component: ElementType) -> Self {
        self.component = Some(component);
        self
    }
}
