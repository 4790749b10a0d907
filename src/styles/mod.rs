//! Style resolution: definitions, props, per-instance caches and the root
//! element factory.

pub mod definition;
pub mod memo;
pub mod props;
pub mod resolver;
pub mod root;

pub use definition::{ClassMap, SlotOverrides, StyleArgs, StyleDefinition};
pub use props::{ElementType, InlineStyle, StyleProps};
pub use resolver::{RenderStats, StyleInstance, StyleOutput, StylesFn, UseStyles};
pub use root::{Attributes, Element, NodeRef, Root, RootProps};
