//! FilledButton: a solid button filled with its color intent.

use std::rc::Rc;

use super::{through_base, BaseButton, BaseButtonInstance, ButtonProps, BASE_BUTTON};
use crate::color::{mix, transparentize};
use crate::engine::StyleEngine;
use crate::styles::{Element, ElementType, RenderStats, RootProps, StyleDefinition, StyleInstance, UseStyles};
use crate::theme::Theme;

/// Registered FilledButton styles.
#[derive(Debug, Clone)]
pub struct FilledButton {
    use_styles: UseStyles,
    base: BaseButton,
}

impl FilledButton {
    /// Register the FilledButton style site with `engine`. Rendering goes
    /// through `base`.
    pub fn register(engine: &StyleEngine, base: &BaseButton) -> Self {
        let use_styles = engine.create_styles(|args| {
            let color = args.color;
            let standard = args.theme.durations.standard;
            StyleDefinition::new().slot(
                "root",
                crate::css!(
                    "
                    background-color: {fill};
                    color: {text};
                    transition: background-color {standard}ms;

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
                        background-color: {disabled};
                        color: {disabled_text};
                    }}
                    ",
                    fill = color.as_background,
                    text = color.bg_contrast,
                    focus = mix(0.92, &color.as_background, &color.bg_contrast),
                    hover = mix(0.9, &color.as_background, &color.bg_contrast),
                    active = mix(0.8, &color.as_background, &color.bg_contrast),
                    disabled = transparentize(0.6, &color.as_background),
                    disabled_text = transparentize(0.4, &color.bg_contrast),
                ),
            )
        });
        Self {
            use_styles,
            base: base.clone(),
        }
    }

    pub fn instance(&self) -> FilledButtonInstance {
        FilledButtonInstance {
            styles: self.use_styles.instance(),
            base: self.base.instance(),
        }
    }

    pub fn use_styles(&self) -> &UseStyles {
        &self.use_styles
    }
}

/// One mounted FilledButton.
#[derive(Debug)]
pub struct FilledButtonInstance {
    styles: StyleInstance,
    base: BaseButtonInstance,
}

impl FilledButtonInstance {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::HeadlessDocument;
    use crate::engine::EngineConfig;
    use crate::sheet::SequenceTokens;
    use crate::styles::{Attributes, InlineStyle, StyleProps};

    #[test]
    fn filled_uses_contrast_text() {
        let engine =
            StyleEngine::with_parts(HeadlessDocument::new(), SequenceTokens::new(), EngineConfig::new());
        let base = BaseButton::register(&engine);
        let filled = FilledButton::register(&engine, &base);
        let mut button = filled.instance();
        let el = button.render(
            StyleProps::new(Attributes::new())
                .color("#ffffff")
                .style(InlineStyle::new().with("width", "100%")),
            &Theme::new().shared(),
        );
        assert_eq!(el.style.get("width"), Some("100%"));
        assert_eq!(el.element_type.name(), "button");
        button.commit();
        let css = engine.sheet_text(filled.use_styles().site());
        assert!(css.starts_with(".filled_button_root_t1_t2{background-color:#ffffff;color:#000000;"));
    }

    #[test]
    fn instances_with_same_colors_share_keys() {
        let engine = StyleEngine::headless();
        let base = BaseButton::register(&engine);
        let filled = FilledButton::register(&engine, &base);
        let theme = Theme::new().shared();
        let mut a = filled.instance();
        let mut b = filled.instance();
        let ea = a.render(StyleProps::new(Attributes::new()), &theme);
        let eb = b.render(StyleProps::new(Attributes::new()), &theme);
        assert_eq!(ea.class_name, eb.class_name);
        assert_eq!(a.commit(), 2);
        assert_eq!(b.commit(), 0);
    }
}
