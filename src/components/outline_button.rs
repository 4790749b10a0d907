//! OutlineButton: a bordered button tinted by its color intent.

use std::rc::Rc;

use super::{through_base, BaseButton, BaseButtonInstance, ButtonProps, BASE_BUTTON};
use crate::color::transparentize;
use crate::engine::StyleEngine;
use crate::styles::{Element, ElementType, RenderStats, RootProps, StyleDefinition, StyleInstance, UseStyles};
use crate::theme::Theme;

/// Registered OutlineButton styles.
#[derive(Debug, Clone)]
pub struct OutlineButton {
    use_styles: UseStyles,
    base: BaseButton,
}

impl OutlineButton {
    /// Register the OutlineButton style site with `engine`. Rendering goes
    /// through `base`.
    pub fn register(engine: &StyleEngine, base: &BaseButton) -> Self {
        let use_styles = engine.create_styles(|args| {
            let color = args.color;
            let standard = args.theme.durations.standard;
            StyleDefinition::new().slot(
                "root",
                crate::css!(
                    "
                    border: 1px solid {on_surface};
                    color: {on_surface};

                    transition: background-color {standard}ms,
                      border {standard}ms;

                    &:focus {{
                        background-color: {focus};
                    }}
                    &:hover {{
                        background-color: {hover};
                    }}
                    &:active {{
                        background-color: {active};
                    }}
                    &:disabled {{
                        color: {disabled};
                        background-color: transparent;
                    }}
                    ",
                    on_surface = color.on_surface,
                    focus = transparentize(0.92, &color.as_background),
                    hover = transparentize(0.9, &color.as_background),
                    active = transparentize(0.8, &color.as_background),
                    disabled = transparentize(0.4, &color.on_surface),
                ),
            )
        });
        Self {
            use_styles,
            base: base.clone(),
        }
    }

    pub fn instance(&self) -> OutlineButtonInstance {
        OutlineButtonInstance {
            styles: self.use_styles.instance(),
            base: self.base.instance(),
        }
    }

    pub fn use_styles(&self) -> &UseStyles {
        &self.use_styles
    }
}

/// One mounted OutlineButton.
#[derive(Debug)]
pub struct OutlineButtonInstance {
    styles: StyleInstance,
    base: BaseButtonInstance,
}

impl OutlineButtonInstance {
    pub fn render(&mut self, props: ButtonProps, theme: &Rc<Theme>) -> Element {
        let out = self
            .styles
            .render(props, theme, Some(ElementType::component(BASE_BUTTON)));
        let element = out.root.render(RootProps::new(out.rest));
        through_base(element, &mut self.base, theme)
    }

    /// Mount pending CSS for this button and its base.
    pub fn commit(&mut self) -> usize {
        self.styles.commit() + self.base.commit()
    }

    pub fn stats(&self) -> RenderStats {
        self.styles.stats()
    }
}
