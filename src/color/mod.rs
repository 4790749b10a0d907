//! Color derivation: RGBA model, string helpers, dynamic palettes.
//!
//! The string helpers mirror what style templates need inline
//! (`transparentize(0.9, &color.as_background)`). They never fail: input that
//! is not a CSS color comes back unchanged, so a bad color degrades to a
//! wrong-looking rule instead of a panic.

pub mod model;
pub mod palette;

pub use model::{Rgba, MIN_CONTRAST};
pub use palette::{create_dynamic_color_palette, DynamicColorPalette};

/// Reduce the opacity of `color` by `amount` (`0.0..=1.0`).
pub fn transparentize(amount: f64, color: &str) -> String {
    match Rgba::parse(color) {
        Some(c) => c.transparentize(amount).to_css(),
        None => color.to_owned(),
    }
}

/// Blend `weight` of `color` with `1 - weight` of `other`.
pub fn mix(weight: f64, color: &str, other: &str) -> String {
    match (Rgba::parse(color), Rgba::parse(other)) {
        (Some(a), Some(b)) => a.mix(weight, &b).to_css(),
        _ => color.to_owned(),
    }
}

/// Black or white, whichever is more legible on `color`.
pub fn readable_color(color: &str) -> String {
    match Rgba::parse(color) {
        Some(c) => c.readable().to_css(),
        None => color.to_owned(),
    }
}

/// WCAG contrast ratio between two colors, if both parse.
pub fn contrast_ratio(a: &str, b: &str) -> Option<f64> {
    Some(Rgba::parse(a)?.contrast(&Rgba::parse(b)?))
}

/// WCAG relative luminance of `color`, if it parses.
pub fn luminance(color: &str) -> Option<f64> {
    Rgba::parse(color).map(|c| c.luminance())
}
