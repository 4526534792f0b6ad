//! Auto presets: whole colorways derived from a single accent color.
//!
//! Each recipe keeps (or recolors) the accent and fills the three
//! backgrounds from fixed HSL values, so a user can pick one color and
//! get a complete colorway.

use std::fmt;

use cw_color::{Hsl, Rgb};

use crate::spec::ColorwaySpec;

/// Colors an auto preset fills in, as CSS strings for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculated {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
}

/// An accent-only colorway recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoPreset {
    /// Backgrounds in the accent hue, dark and desaturated.
    HueRotation,
    /// Discord's stock backgrounds, only the accent changes.
    AccentSwap,
    /// Pure black backgrounds.
    Amoled,
    /// Material You style: a deep accent over tinted backgrounds.
    MaterialYou,
}

/// Discord's stock dark backgrounds.
const STOCK: [Rgb; 3] = [
    Rgb::new(0x31, 0x33, 0x38),
    Rgb::new(0x2b, 0x2d, 0x31),
    Rgb::new(0x1e, 0x1f, 0x22),
];

impl AutoPreset {
    pub const ALL: [Self; 4] = [
        Self::HueRotation,
        Self::AccentSwap,
        Self::Amoled,
        Self::MaterialYou,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::HueRotation => "hueRotation",
            Self::AccentSwap => "accentSwap",
            Self::Amoled => "AMOLED",
            Self::MaterialYou => "materialYou",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HueRotation => "Hue Rotation",
            Self::AccentSwap => "Accent Swap",
            Self::Amoled => "AMOLED",
            Self::MaterialYou => "Material You",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    /// Background recipe as `(saturation, lightness)` per slot, in the
    /// accent hue. `None` for recipes with fixed backgrounds.
    const fn recipe(self) -> Option<[(f64, f64); 3]> {
        match self {
            Self::HueRotation => Some([(11.0, 21.0), (11.0, 18.0), (10.0, 13.0)]),
            Self::MaterialYou => Some([(12.0, 12.0), (12.0, 16.0), (16.0, 18.0)]),
            Self::AccentSwap | Self::Amoled => None,
        }
    }

    /// The complete colorway this recipe derives from `accent`.
    #[must_use]
    pub fn derive(self, accent: Rgb) -> ColorwaySpec {
        let hue = accent.to_hsl().h;
        let [primary, secondary, tertiary] = match self {
            Self::AccentSwap => STOCK,
            Self::Amoled => [Rgb::BLACK; 3],
            Self::HueRotation | Self::MaterialYou => self
                .recipe()
                .unwrap_or_default()
                .map(|(s, l)| Hsl::new(hue, s, l).to_rgb()),
        };
        let accent = if self == Self::MaterialYou {
            Hsl::new(hue, 100.0, 23.0).to_rgb()
        } else {
            accent
        };
        ColorwaySpec::new(accent, primary, secondary, tertiary)
    }

    /// The derived backgrounds in display form, for recipes that compute
    /// them. Accent Swap reuses stock colors and reports nothing.
    #[must_use]
    pub fn calculated(self, accent: Rgb) -> Option<Calculated> {
        let hue = accent.to_hsl().h;
        let css = |(s, l): (f64, f64)| format!("hsl({hue} {s}% {l}%)");
        match self {
            Self::HueRotation | Self::MaterialYou => self.recipe().map(|[p, s, t]| Calculated {
                primary: css(p),
                secondary: css(s),
                tertiary: css(t),
            }),
            Self::Amoled => Some(Calculated {
                primary: "#000000".to_owned(),
                secondary: "#000000".to_owned(),
                tertiary: "#000000".to_owned(),
            }),
            Self::AccentSwap => None,
        }
    }
}

impl fmt::Display for AutoPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
