//! Root element factory: renders the resolved element type with the merged
//! root class and inline style, forwarding everything else.

use std::cell::Cell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::props::{ElementType, InlineStyle};
use crate::util::class_names;

/// Untyped passthrough attributes.
pub type Attributes = BTreeMap<String, String>;

/// Handle a host fills in with the rendered element's identity.
///
/// Clones share the same slot, so a handle passed down through a root
/// reaches the element the host eventually creates.
#[derive(Clone, Default)]
pub struct NodeRef(Rc<Cell<Option<u64>>>);

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the host's element id.
    pub fn set(&self, id: u64) {
        self.0.set(Some(id));
    }

    /// The attached host element id, if any.
    pub fn get(&self) -> Option<u64> {
        self.0.get()
    }

    /// Whether two handles share the same slot.
    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.get()).finish()
    }
}

/// Props given to [`Root::render`] at the call site.
#[derive(Debug, Clone, Default)]
pub struct RootProps<A = Attributes> {
    pub class_name: Option<String>,
    pub style: Option<InlineStyle>,
    pub node_ref: Option<NodeRef>,
    /// Forwarded untouched.
    pub attributes: A,
}

impl<A> RootProps<A> {
    pub fn new(attributes: A) -> Self {
        Self {
            class_name: None,
            style: None,
            node_ref: None,
            attributes,
        }
    }

    /// Set the invocation class name (builder).
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the invocation inline style (builder).
    pub fn style(mut self, style: InlineStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Forward a node handle (builder).
    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }
}

/// What a root renders: a description for the host rendering system.
#[derive(Debug, Clone)]
pub struct Element<A = Attributes> {
    pub element_type: ElementType,
    pub class_name: String,
    pub style: InlineStyle,
    pub node_ref: Option<NodeRef>,
    pub attributes: A,
}

/// Factory bound to one resolved element type, root class and the
/// component-level `class_name`/`style` props.
#[derive(Debug, Clone, PartialEq)]
pub struct Root {
    element_type: ElementType,
    root_class: String,
    class_name: Option<String>,
    style: InlineStyle,
}

impl Root {
    pub fn new(
        element_type: ElementType,
        root_class: impl Into<String>,
        class_name: Option<String>,
        style: InlineStyle,
    ) -> Self {
        Self {
            element_type,
            root_class: root_class.into(),
            class_name,
            style,
        }
    }

    /// The element type this root renders.
    pub fn element_type(&self) -> &ElementType {
        &self.element_type
    }

    /// The merged class of the `root` slot.
    pub fn root_class(&self) -> &str {
        &self.root_class
    }

    /// Render with call-site props.
    ///
    /// Classes join as generated root, component-level override, call-site
    /// override. Inline styles overlay in the same order, so call-site
    /// properties win.
    pub fn render<A>(&self, props: RootProps<A>) -> Element<A> {
        let class_name = class_names([
            Some(self.root_class.as_str()),
            self.class_name.as_deref(),
            props.class_name.as_deref(),
        ]);
        let style = match &props.style {
            Some(style) => self.style.merged(style),
            None => self.style.clone(),
        };
        Element {
            element_type: self.element_type.clone(),
            class_name,
            style,
            node_ref: props.node_ref,
            attributes: props.attributes,
        }
    }
}
