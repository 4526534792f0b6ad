//! Channel diff tables.
//!
//! Discord's own palette was measured step by step against its `500` anchor;
//! these are the measured offsets. Brand steps carry a saturation delta (in
//! percent of the anchor's saturation) and a lightness delta (in lightness
//! points). Background steps carry only a saturation delta; their lightness
//! offsets are fixed multiples of 3.6 applied in [`crate::palette`].

/// Offsets of one brand ramp step relative to the accent anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrandDiff {
    pub step: u16,
    /// Relative saturation change in percent: `s' = s * (100 + saturation) / 100`.
    pub saturation: f64,
    /// Absolute lightness change in percentage points.
    pub lightness: f64,
}

const fn brand(step: u16, saturation: f64, lightness: f64) -> BrandDiff {
    BrandDiff {
        step,
        saturation,
        lightness,
    }
}

/// Step that receives the accent color unmodified.
pub const BRAND_ANCHOR: u16 = 500;

/// Brand ramp offsets, lightest step first. The anchor step is not listed.
pub const BRAND_DIFFS: [BrandDiff; 25] = [
    brand(100, -9.54712, 33.5),
    brand(130, 2.19526, 32.2),
    brand(160, -1.17509, 30.2),
    brand(200, -2.72351, 28.2),
    brand(230, 1.62225, 26.2999),
    brand(260, 0.698487, 23.8999),
    brand(300, 0.582411, 21.2),
    brand(330, -0.585823, 16.8999),
    brand(345, -0.468384, 14.0999),
    brand(360, 0.582411, 12.7999),
    brand(400, 0.582411, 7.0999),
    brand(430, 0.116754, 5.0999),
    brand(460, -0.116891, 2.7999),
    brand(530, -24.8194, -5.9),
    brand(560, -49.927, -12.3),
    brand(600, -58.8057, -20.6),
    brand(630, -58.8057, -26.5),
    brand(660, -58.0256, -31.4),
    brand(700, -58.2202, -38.8),
    brand(730, -58.6103, -40.4),
    brand(760, -58.4151, -42.5),
    brand(800, -57.2502, -45.3),
    brand(830, -57.4436, -49.8),
    brand(860, -58.4151, -55.1),
    brand(900, -52.5074, -61.6),
];

/// Background ("primary" scale) saturation offsets by step.
pub const PRIMARY_SATURATION_DIFFS: [(u16, f64); 18] = [
    (130, 63.9594),
    (160, 49.4382),
    (200, 37.5758),
    (230, 30.3797),
    (260, 22.5166),
    (300, 32.5),
    (330, 27.0968),
    (345, 22.5166),
    (360, 18.9189),
    (400, -14.4),
    (430, -33.0435),
    (460, 25.2101),
    (500, -11.0236),
    (530, -3.0303),
    (645, 7.40741),
    (660, 3.0303),
    (730, 11.9403),
    (800, 25.0),
];

/// Saturation delta of a background step.
///
/// Only steps present in [`PRIMARY_SATURATION_DIFFS`] are ever requested by
/// the generators; anything else is a programming error and yields `0.0`.
#[must_use]
pub fn primary_saturation_diff(step: u16) -> f64 {
    PRIMARY_SATURATION_DIFFS
        .iter()
        .find(|(s, _)| *s == step)
        .map_or(0.0, |(_, diff)| *diff)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
