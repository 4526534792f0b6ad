// SPDX-License-Identifier: MIT
//
// RGB and HSL color values.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) are the
// standard convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Conversion pipeline:
//
//   "#rrggbb" ↔ Rgb ↔ Hsl
//
// `Rgb` is the storage form: colorways persist and share colors as six hex
// digits. `Hsl` is the generation form: every ramp step is an HSL triple
// written into a CSS custom property. The RGB → HSL direction rounds
// saturation and lightness to one decimal (the value the stylesheet
// prints), so HSL → RGB → HSL is not the identity; hex → HSL → hex is within
// one unit per channel.

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};
use crate::num::{round_half_up, to_fixed_1};
use crate::parse::parse_css_color;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color.
///
/// # Examples
///
/// ```
/// use cw_color::Rgb;
///
/// let blurple = Rgb::from_hex("#5865f2").unwrap();
/// assert_eq!(blurple.to_hex(), "5865f2");
/// assert_eq!(blurple.to_string(), "#5865f2");
///
/// let short = Rgb::from_hex("fff").unwrap();
/// assert_eq!(short, Rgb::WHITE);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (the `#` is optional, digits are
    /// case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] for any other digit count
    /// or a non-hex digit.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.trim().strip_prefix('#').unwrap_or_else(|| s.trim());
        let bytes = digits.as_bytes();
        match bytes.len() {
            3 => {
                let r = nibble(bytes[0]).ok_or_else(|| ColorError::invalid(s, "non-hex digit"))?;
                let g = nibble(bytes[1]).ok_or_else(|| ColorError::invalid(s, "non-hex digit"))?;
                let b = nibble(bytes[2]).ok_or_else(|| ColorError::invalid(s, "non-hex digit"))?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            6 => {
                let byte = |i: usize| {
                    let hi = nibble(bytes[i])
                        .ok_or_else(|| ColorError::invalid(s, "non-hex digit"))?;
                    let lo = nibble(bytes[i + 1])
                        .ok_or_else(|| ColorError::invalid(s, "non-hex digit"))?;
                    Ok::<u8, ColorError>((hi << 4) | lo)
                };
                Ok(Self::new(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => Err(ColorError::invalid(s, "hex colors need 3 or 6 digits")),
        }
    }

    /// Canonical storage form: six lowercase hex digits, no `#`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL with one-decimal saturation and lightness.
    #[inline]
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        Hsl::from_rgb(self)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb(#{})", self.to_hex())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Accepts any form [`parse_css_color`] does.
    fn from_str(s: &str) -> Result<Self> {
        parse_css_color(s)
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color in HSL space, in the units CSS uses.
///
/// - `h`: hue in whole degrees, `0..=359` when produced by [`Hsl::from_rgb`]
/// - `s`: saturation percentage, `0.0..=100.0`
/// - `l`: lightness percentage, `0.0..=100.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert from RGB.
    ///
    /// Standard min/max/delta conversion. The hue is rounded to a whole
    /// degree and folded into `[0, 360)`; saturation and lightness are
    /// rounded to one decimal with `toFixed(1)` semantics. Callers that
    /// compare against integer thresholds may round again, and that second
    /// rounding is part of the output contract.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;

        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        let delta = max - min;

        // `%` on f64 keeps the sign of the dividend, like JavaScript.
        let sector = if delta == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta) % 6.0
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        let mut h = round_half_up(sector * 60.0);
        if h < 0.0 {
            h += 360.0;
        }
        // Normalize -0 so the hue prints and compares as a plain zero.
        let h = h + 0.0;

        let l = (max + min) / 2.0;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - 2.0f64.mul_add(l, -1.0).abs())
        };

        Self {
            h,
            s: to_fixed_1(s * 100.0),
            l: to_fixed_1(l * 100.0),
        }
    }

    /// Convert to RGB using the `hue2rgb` sector construction.
    ///
    /// Hue wraps around 360°. Saturation and lightness are expected in
    /// `0..=100`; values outside that range are a caller bug, and the
    /// resulting channels saturate at 0 and 255.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0f64.mul_add(l, -q);
            (
                hue_to_rgb(p, q, h + 1.0 / 3.0),
                hue_to_rgb(p, q, h),
                hue_to_rgb(p, q, h - 1.0 / 3.0),
            )
        };

        Rgb::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Lightness rounded to a whole percent, as the plugin's integer
    /// threshold checks see it.
    #[inline]
    #[must_use]
    pub fn rounded_lightness(self) -> f64 {
        round_half_up(self.l)
    }
}

// ─── Free-function API ───────────────────────────────────────────────────────

/// `#rgb` / `#rrggbb` → HSL.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] when `hex` is not a 3- or
/// 6-digit hex color.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Rgb::from_hex(hex).map(Hsl::from_rgb)
}

/// HSL (degrees, percent, percent) → six lowercase hex digits, no `#`.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_rgb().to_hex()
}

/// 8-bit channels → six lowercase hex digits, no `#`.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    Rgb::new(r, g, b).to_hex()
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// One of the six linear pieces of the HSL → RGB hue curve.
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

/// Unit channel → byte, rounding halves up.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    round_half_up(v * 255.0).clamp(0.0, 255.0) as u8
}

const fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
