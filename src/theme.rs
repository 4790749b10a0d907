//! Theme: the read-only configuration record style definitions are written against.
//!
//! The engine itself only reads `colors.brand` and `colors.surface` (the
//! default color intent pair). Everything else exists for style definitions.

use std::rc::Rc;

/// Named theme colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
    /// Default foreground intent.
    pub brand: String,
    /// Default background intent.
    pub surface: String,
    /// Neutral color for de-emphasized chrome.
    pub bland: String,
    pub accent: String,
    pub danger: String,
    pub warning: String,
    pub info: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            brand: "#00c853".into(),
            surface: "#000000".into(),
            bland: "#9e9e9e".into(),
            accent: "#2979ff".into(),
            danger: "#ff1744".into(),
            warning: "#ffc400".into(),
            info: "#00b0ff".into(),
        }
    }
}

/// Animation durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub short: u32,
    pub standard: u32,
    pub long: u32,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            short: 150,
            standard: 250,
            long: 400,
        }
    }
}

/// Font definitions, each a block of CSS declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct Fonts {
    pub h1: String,
    pub h2: String,
    pub h3: String,
    pub h4: String,
    pub body1: String,
    pub body2: String,
    pub caption: String,
}

impl Default for Fonts {
    fn default() -> Self {
        fn font(size: f32, weight: u16) -> String {
            format!(
                "font-family: 'Fira Code', monospace; font-size: {size}rem; font-weight: {weight}; line-height: 1.5;"
            )
        }
        Self {
            h1: font(2.0, 700),
            h2: font(1.5, 700),
            h3: font(1.25, 700),
            h4: font(1.125, 700),
            body1: font(1.0, 400),
            body2: font(0.875, 400),
            caption: font(0.75, 400),
        }
    }
}

/// The theme record.
///
/// Shared as `Rc<Theme>`; caches treat two themes as the same when they are
/// the same allocation or compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub colors: ThemeColors,
    pub durations: Durations,
    pub fonts: Fonts,
    /// Base spacing unit in pixels.
    pub space_unit: f32,
    /// Base gap unit in pixels.
    pub gap_unit: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: ThemeColors::default(),
            durations: Durations::default(),
            fonts: Fonts::default(),
            space_unit: 16.0,
            gap_unit: 24.0,
        }
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Padding/margin length for `n` spacing units, e.g. `"8px"`.
    pub fn space(&self, n: f32) -> String {
        format!("{}px", self.space_unit * n)
    }

    /// Gap length between stacked blocks for `n` gap units.
    pub fn gap(&self, n: f32) -> String {
        format!("{}px", self.gap_unit * n)
    }

    /// Set the brand color (builder).
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.colors.brand = brand.into();
        self
    }

    /// Set the surface color (builder).
    pub fn with_surface(mut self, surface: impl Into<String>) -> Self {
        self.colors.surface = surface.into();
        self
    }

    /// Set the spacing unit (builder).
    pub fn with_space_unit(mut self, px: f32) -> Self {
        self.space_unit = px;
        self
    }

    /// Set the gap unit (builder).
    pub fn with_gap_unit(mut self, px: f32) -> Self {
        self.gap_unit = px;
        self
    }

    /// Set the durations (builder).
    pub fn with_durations(mut self, durations: Durations) -> Self {
        self.durations = durations;
        self
    }

    /// Wrap in an `Rc` for sharing across a render tree.
    pub fn shared(self) -> Rc<Theme> {
        Rc::new(self)
    }
}

/// Whether two theme handles denote the same theme: same allocation, or equal.
pub(crate) fn same_theme(a: &Rc<Theme>, b: &Rc<Theme>) -> bool {
    Rc::ptr_eq(a, b) || a == b
}
