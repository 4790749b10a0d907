//! Dynamic color palette: turns a (color, surface) intent pair into the fixed
//! set of shades style definitions are written against.

use super::model::Rgba;

/// Opacity removed from `as_background` for the focus tint.
const FOCUS_TINT: f64 = 0.92;
/// Opacity removed from `as_background` for the hover tint.
const HOVER_TINT: f64 = 0.9;
/// Opacity removed from `as_background` for the active tint.
const ACTIVE_TINT: f64 = 0.8;
/// Opacity removed from `on_surface` for disabled content.
const DISABLED_FADE: f64 = 0.4;

/// Palette derived from a foreground color and the surface it sits on.
///
/// The shape is fixed so style definitions can reference any field without
/// checking for presence. Every field is a ready-to-use CSS color string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DynamicColorPalette {
    /// The foreground intent, exactly as supplied.
    pub original: String,
    /// The background intent, exactly as supplied.
    pub surface: String,
    /// The foreground, adjusted to stay legible on `surface`.
    pub on_surface: String,
    /// The foreground used as a fill.
    pub as_background: String,
    /// Black or white, whichever reads better on `as_background`.
    pub bg_contrast: String,
    /// Translucent `as_background` tint for focused elements.
    pub focus: String,
    /// Translucent `as_background` tint for hovered elements.
    pub hover: String,
    /// Translucent `as_background` tint for pressed elements.
    pub active: String,
    /// Faded `on_surface` for disabled content.
    pub disabled: String,
}

/// Derive the palette for `color` drawn on `on`.
///
/// Pure: identical inputs always produce identical palettes, which is what
/// lets the resolver cache on the inputs instead of the output. Inputs that
/// are not valid CSS colors pass through unchanged.
pub fn create_dynamic_color_palette(color: &str, on: &str) -> DynamicColorPalette {
    match (Rgba::parse(color), Rgba::parse(on)) {
        (Some(fg), Some(surface)) => {
            let on_surface = fg.legible_on(&surface);
            DynamicColorPalette {
                original: color.to_owned(),
                surface: on.to_owned(),
                on_surface: on_surface.to_css(),
                as_background: color.to_owned(),
                bg_contrast: fg.readable().to_css(),
                focus: fg.transparentize(FOCUS_TINT).to_css(),
                hover: fg.transparentize(HOVER_TINT).to_css(),
                active: fg.transparentize(ACTIVE_TINT).to_css(),
                disabled: on_surface.transparentize(DISABLED_FADE).to_css(),
            }
        }
        _ => {
            tracing::warn!(color, on, "unrecognized color intent, passing through");
            DynamicColorPalette {
                original: color.to_owned(),
                surface: on.to_owned(),
                on_surface: color.to_owned(),
                as_background: color.to_owned(),
                bg_contrast: super::readable_color(color),
                focus: super::transparentize(FOCUS_TINT, color),
                hover: super::transparentize(HOVER_TINT, color),
                active: super::transparentize(ACTIVE_TINT, color),
                disabled: super::transparentize(DISABLED_FADE, color),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn palette_is_deterministic() {
        let pairs = [
            ("#fff", "#000"),
            ("#0088ff", "white"),
            ("rgb(10, 200, 30)", "#222"),
            ("hsl(300, 50%, 50%)", "#fafafa"),
        ];
        for (color, on) in pairs {
            assert_eq!(
                create_dynamic_color_palette(color, on),
                create_dynamic_color_palette(color, on)
            );
        }
    }

    #[test]
    fn white_on_black() {
        let palette = create_dynamic_color_palette("#fff", "#000");
        assert_eq!(palette.original, "#fff");
        assert_eq!(palette.surface, "#000");
        assert_eq!(palette.on_surface, "#ffffff");
        assert_eq!(palette.as_background, "#fff");
        assert_eq!(palette.bg_contrast, "#000000");
        assert_eq!(palette.focus, "rgba(255, 255, 255, 0.08)");
        assert_eq!(palette.hover, "rgba(255, 255, 255, 0.1)");
        assert_eq!(palette.active, "rgba(255, 255, 255, 0.2)");
        assert_eq!(palette.disabled, "rgba(255, 255, 255, 0.6)");
    }

    #[test]
    fn pale_foreground_is_darkened_on_white() {
        let palette = create_dynamic_color_palette("#ffff00", "#ffffff");
        assert_ne!(palette.on_surface, "#ffff00");
        let adjusted = Rgba::parse(&palette.on_surface).unwrap();
        assert!(adjusted.contrast(&Rgba::WHITE) >= crate::color::MIN_CONTRAST);
        // The fill keeps the raw intent.
        assert_eq!(palette.as_background, "#ffff00");
        assert_eq!(palette.bg_contrast, "#000000");
    }

    #[test]
    fn different_colors_give_different_palettes() {
        let a = create_dynamic_color_palette("#ff0000", "#fff");
        let b = create_dynamic_color_palette("#0000ff", "#fff");
        assert_ne!(a, b);
    }

    #[test]
    fn unparseable_intent_passes_through() {
        let palette = create_dynamic_color_palette("var(--brand)", "#fff");
        assert_eq!(palette.original, "var(--brand)");
        assert_eq!(palette.on_surface, "var(--brand)");
        assert_eq!(palette.as_background, "var(--brand)");
        assert_eq!(palette.hover, "var(--brand)");
        assert_eq!(palette.bg_contrast, "var(--brand)");
    }
}
