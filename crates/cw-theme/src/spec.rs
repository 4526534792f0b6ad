//! Synthesis inputs: the four base colors and the generation options.

use std::fmt;

use cw_color::{Hsl, Rgb, parse_css_color};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// ColorwaySpec
// ---------------------------------------------------------------------------

/// The four base colors of a colorway.
///
/// - `accent` drives the brand ramp.
/// - `primary` is the main chat surface.
/// - `secondary` is the sidebar/channel list surface.
/// - `tertiary` is the server rail and window chrome.
///
/// `Default` is Discord's stock dark theme with a white accent, the values
/// the plugin falls back to when a slot is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorwaySpec {
    pub accent: Rgb,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub tertiary: Rgb,
}

impl Default for ColorwaySpec {
    fn default() -> Self {
        Self {
            accent: Rgb::WHITE,
            primary: Rgb::new(0x31, 0x33, 0x38),
            secondary: Rgb::new(0x2b, 0x2d, 0x31),
            tertiary: Rgb::new(0x1e, 0x1f, 0x22),
        }
    }
}

impl ColorwaySpec {
    #[must_use]
    pub const fn new(accent: Rgb, primary: Rgb, secondary: Rgb, tertiary: Rgb) -> Self {
        Self {
            accent,
            primary,
            secondary,
            tertiary,
        }
    }

    #[must_use]
    pub const fn with_accent(mut self, color: Rgb) -> Self {
        self.accent = color;
        self
    }

    #[must_use]
    pub const fn with_primary(mut self, color: Rgb) -> Self {
        self.primary = color;
        self
    }

    #[must_use]
    pub const fn with_secondary(mut self, color: Rgb) -> Self {
        self.secondary = color;
        self
    }

    #[must_use]
    pub const fn with_tertiary(mut self, color: Rgb) -> Self {
        self.tertiary = color;
        self
    }

    /// Read all four colors from CSS color strings (hex, `rgb()`, `hsl()`).
    ///
    /// # Errors
    ///
    /// Fails on the first color that does not parse; no partial spec is built.
    pub fn parse(accent: &str, primary: &str, secondary: &str, tertiary: &str) -> Result<Self> {
        Ok(Self {
            accent: parse_css_color(accent)?,
            primary: parse_css_color(primary)?,
            secondary: parse_css_color(secondary)?,
            tertiary: parse_css_color(tertiary)?,
        })
    }

    /// HSL form of every slot, converted once per synthesis.
    #[must_use]
    pub fn hsl(&self) -> SpecHsl {
        SpecHsl {
            accent: self.accent.to_hsl(),
            primary: self.primary.to_hsl(),
            secondary: self.secondary.to_hsl(),
            tertiary: self.tertiary.to_hsl(),
        }
    }
}

impl fmt::Display for ColorwaySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.accent, self.primary, self.secondary, self.tertiary
        )
    }
}

/// [`ColorwaySpec`] in HSL, as every generator consumes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecHsl {
    pub accent: Hsl,
    pub primary: Hsl,
    pub secondary: Hsl,
    pub tertiary: Hsl,
}

// ---------------------------------------------------------------------------
// SynthesisOptions
// ---------------------------------------------------------------------------

/// Version stamped into the stylesheet header.
pub const CSS_VERSION: &str = "1.21";

/// Metadata for the optional `/** @name … */` stylesheet header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleHeader {
    pub name: String,
    pub author: String,
    pub author_id: String,
}

impl StyleHeader {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            author_id: author_id.into(),
        }
    }
}

/// Flags that shape the generated stylesheet.
///
/// Defaults match the plugin: tinted text on, Discord saturation
/// correction on, no muted-text override, no header.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisOptions {
    /// Emit the tinted text shades derived from the secondary color.
    pub tinted_text: bool,
    /// Apply the per-step saturation diffs instead of copying the base
    /// saturation onto every step.
    pub discord_saturation: bool,
    /// Lightness (0–100) for `--primary-500-hsl`, the muted text color.
    /// `None` and `Some(0.0)` both fall back to the computed value.
    pub muted_text_brightness: Option<f64>,
    pub header: Option<StyleHeader>,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            tinted_text: true,
            discord_saturation: true,
            muted_text_brightness: None,
            header: None,
        }
    }
}

impl SynthesisOptions {
    #[must_use]
    pub const fn with_tinted_text(mut self, enable: bool) -> Self {
        self.tinted_text = enable;
        self
    }

    #[must_use]
    pub const fn with_discord_saturation(mut self, enable: bool) -> Self {
        self.discord_saturation = enable;
        self
    }

    #[must_use]
    pub const fn with_muted_text_brightness(mut self, brightness: Option<f64>) -> Self {
        self.muted_text_brightness = brightness;
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: Option<StyleHeader>) -> Self {
        self.header = header;
        self
    }

    /// Check numeric options.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `muted_text_brightness` is outside 0–100
    /// or not a finite number.
    pub fn validate(&self) -> Result<()> {
        match self.muted_text_brightness {
            Some(v) if !(0.0..=100.0).contains(&v) => Err(Error::OutOfRange {
                what: "muted text brightness",
                value: v,
                min: 0.0,
                max: 100.0,
            }),
            _ => Ok(()),
        }
    }

    /// The muted-text lightness to use, if it overrides the computed one.
    #[must_use]
    pub(crate) fn muted_override(&self) -> Option<f64> {
        self.muted_text_brightness.filter(|v| *v != 0.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
