//! Button components built on the style resolver.
//!
//! Each component registers its style site once per engine with
//! [`register`](BaseButton::register) and hands out one instance per mounted
//! button. Instances follow the resolver's two phases: `render` builds an
//! [`Element`], `commit` mounts pending CSS.

pub mod base_button;
pub mod filled_button;
pub mod outline_button;

pub use base_button::{BaseButton, BaseButtonInstance};
pub use filled_button::{FilledButton, FilledButtonInstance};
pub use outline_button::{OutlineButton, OutlineButtonInstance};

use std::rc::Rc;

use crate::styles::{Attributes, Element, ElementType, StyleProps};
use crate::theme::Theme;

/// Props every button accepts: style props plus forwarded attributes.
pub type ButtonProps = StyleProps<Attributes>;

/// Element type name [`BaseButton`] renders through when used as a component.
pub const BASE_BUTTON: &str = "BaseButton";

/// Feed an element that renders as [`BASE_BUTTON`] through `base`. Elements
/// whose type was overridden by the caller are returned unchanged.
fn through_base(element: Element, base: &mut BaseButtonInstance, theme: &Rc<Theme>) -> Element {
    if element.element_type != ElementType::component(BASE_BUTTON) {
        return element;
    }
    let mut props = ButtonProps::new(element.attributes).class_name(element.class_name);
    if !element.style.is_empty() {
        props = props.style(element.style);
    }
    let mut rendered = base.render(props, theme);
    rendered.node_ref = element.node_ref;
    rendered
}
