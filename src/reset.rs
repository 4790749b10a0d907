//! Global CSS reset, installed once per engine.

use crate::css::compile_global;
use crate::engine::StyleEngine;
use crate::theme::Theme;

fn reset_template(theme: &Theme) -> String {
    crate::css!(
        r#"
        *, *::before, *::after {{
            box-sizing: border-box;
        }}
        html, body {{
            margin: 0;
            padding: 0;
        }}
        body {{
            background-color: {surface};
            color: {brand};
            {body1}
        }}
        h1, h2, h3, h4, p {{
            margin: 0;
        }}
        button, input, textarea {{
            font: inherit;
            color: inherit;
        }}
        "#,
        surface = theme.colors.surface,
        brand = theme.colors.brand,
        body1 = theme.fonts.body1,
    )
}

impl StyleEngine {
    /// Mount the global reset sheet into its own style element.
    ///
    /// Only the first call has an effect; returns whether this call
    /// installed it.
    pub fn install_css_reset(&self, theme: &Theme) -> bool {
        if self.state().reset_site.is_some() {
            return false;
        }
        let css = match compile_global(&reset_template(theme)) {
            Ok(css) => css,
            Err(err) => {
                tracing::warn!(%err, "css reset failed to compile");
                return false;
            }
        };
        let site = self.create_site("reset");
        let mut state = self.state_mut();
        state.registry.mount(site, &css);
        state.registry.record_mounted(site, "reset");
        state.reset_site = Some(site);
        tracing::debug!(?site, "installed css reset");
        true
    }
}
