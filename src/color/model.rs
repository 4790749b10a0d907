//! RGBA color model: parsing, formatting, luminance, blending.
//!
//! Parsing is delegated to [`csscolorparser`], which understands named colors,
//! hex forms and the functional notations (`rgb()`, `hsl()`, `hwb()`, ...).
//! Everything downstream works on normalized `0.0..=1.0` channels.

use csscolorparser::Color;

/// Contrast ratio a foreground must reach against its surface to be legible.
pub const MIN_CONTRAST: f64 = 3.0;

/// A color with channels and alpha normalized to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::opaque(1.0, 1.0, 1.0);

    /// Build an opaque color from normalized channels.
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse any CSS color string. Returns `None` for unrecognized input.
    pub fn parse(input: &str) -> Option<Self> {
        let parsed: Color = input.trim().parse().ok()?;
        Some(Self {
            r: f64::from(parsed.r).clamp(0.0, 1.0),
            g: f64::from(parsed.g).clamp(0.0, 1.0),
            b: f64::from(parsed.b).clamp(0.0, 1.0),
            a: f64::from(parsed.a).clamp(0.0, 1.0),
        })
    }

    /// Render as CSS: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    pub fn to_css(&self) -> String {
        let [r, g, b] = [self.r, self.g, self.b].map(to_byte);
        let alpha = round3(self.a);
        if alpha >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("rgba({r}, {g}, {b}, {alpha})")
        }
    }

    /// WCAG relative luminance, `0.0` (black) to `1.0` (white).
    pub fn luminance(&self) -> f64 {
        fn linear(c: f64) -> f64 {
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// WCAG contrast ratio between two colors, `1.0..=21.0`. Alpha is ignored.
    pub fn contrast(&self, other: &Rgba) -> f64 {
        let (a, b) = (self.luminance(), other.luminance());
        let (light, dark) = if a >= b { (a, b) } else { (b, a) };
        (light + 0.05) / (dark + 0.05)
    }

    /// Linear blend: `weight` of `self`, `1 - weight` of `other`.
    pub fn mix(&self, weight: f64, other: &Rgba) -> Rgba {
        let w = weight.clamp(0.0, 1.0);
        let blend = |x: f64, y: f64| x * w + y * (1.0 - w);
        Rgba {
            r: blend(self.r, other.r),
            g: blend(self.g, other.g),
            b: blend(self.b, other.b),
            a: blend(self.a, other.a),
        }
    }

    /// Decrease opacity by `amount` (clamped to `0.0..=1.0`).
    pub fn transparentize(&self, amount: f64) -> Rgba {
        Rgba {
            a: round3((self.a - amount).clamp(0.0, 1.0)),
            ..*self
        }
    }

    /// Black or white, whichever contrasts better against `self`.
    pub fn readable(&self) -> Rgba {
        if self.contrast(&Rgba::BLACK) >= self.contrast(&Rgba::WHITE) {
            Rgba::BLACK
        } else {
            Rgba::WHITE
        }
    }

    /// Move `self` toward black or white (whichever suits `surface`) in 10%
    /// steps until it reaches [`MIN_CONTRAST`] against `surface`.
    pub fn legible_on(&self, surface: &Rgba) -> Rgba {
        if self.contrast(surface) >= MIN_CONTRAST {
            return *self;
        }
        let target = surface.readable();
        let mut candidate = *self;
        for step in 1..=10 {
            candidate = target.mix(f64::from(step) / 10.0, self);
            if candidate.contrast(surface) >= MIN_CONTRAST {
                break;
            }
        }
        candidate
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
