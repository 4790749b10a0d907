//! BaseButton: the unstyled-looking button every other button renders through.

use std::rc::Rc;

use super::ButtonProps;
use crate::engine::StyleEngine;
use crate::styles::{
    Element, ElementType, RenderStats, RootProps, StyleDefinition, StyleInstance, UseStyles,
};
use crate::theme::Theme;

/// Registered BaseButton styles.
#[derive(Debug, Clone)]
pub struct BaseButton {
    use_styles: UseStyles,
}

impl BaseButton {
    /// Register the BaseButton style site with `engine`.
    pub fn register(engine: &StyleEngine) -> Self {
        let use_styles = engine.create_styles(|args| {
            let theme = args.theme;
            StyleDefinition::new().slot(
                "root",
                crate::css!(
                    "
                    {font}
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    padding: {pad_y} {pad_x};
                    border: none;
                    border-radius: 0;
                    background-color: transparent;
                    cursor: pointer;
                    outline: none;
                    user-select: none;
                    text-transform: uppercase;

                    &:disabled {{
                        cursor: not-allowed;
                    }}
                    ",
                    font = theme.fonts.body1,
                    pad_y = theme.space(0.5),
                    pad_x = theme.space(1.0),
                ),
            )
        });
        Self { use_styles }
    }

    /// Per-button resolver state.
    pub fn instance(&self) -> BaseButtonInstance {
        BaseButtonInstance {
            styles: self.use_styles.instance(),
        }
    }

    pub fn use_styles(&self) -> &UseStyles {
        &self.use_styles
    }
}

/// One mounted BaseButton.
#[derive(Debug)]
pub struct BaseButtonInstance {
    styles: StyleInstance,
}

impl BaseButtonInstance {
    /// Render into a `button` element (or whatever `props.component` names).
    ///
    /// Sets `type="button"` unless the caller passed a type.
    pub fn render(&mut self, props: ButtonProps, theme: &Rc<Theme>) -> Element {
        let out = self
            .styles
            .render(props, theme, Some(ElementType::intrinsic("button")));
        let mut attributes = out.rest;
        attributes
            .entry("type".to_owned())
            .or_insert_with(|| "button".to_owned());
        out.root.render(RootProps::new(attributes))
    }

    /// Mount pending CSS. Returns the number of mount calls.
    pub fn commit(&mut self) -> usize {
        self.styles.commit()
    }

    pub fn stats(&self) -> RenderStats {
        self.styles.stats()
    }
}
