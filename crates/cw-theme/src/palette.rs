//! Palette expansion from four base colors to Discord's color scales.
//!
//! Discord styles itself through numbered HSL custom properties
//! (`--brand-500-hsl`, `--primary-630-hsl`, …). A colorway overrides them by
//! expanding each base color into the steps around its anchor:
//!
//! ```text
//! accent    → brand 100 … 900          (anchor 500, measured diffs)
//! tertiary  → primary 800, 730, 700    (anchor 700)
//! secondary → primary 660, 645, 630    (anchor 630)
//! primary   → primary 600, 560, 530, 500 (anchor 600)
//! ```
//!
//! Background steps move lightness in multiples of 3.6 points and are not
//! re-rounded after the offset, so a value such as `24.200000000000003` is
//! emitted as-is. Brand steps are rounded to one decimal.

use std::fmt;

use cw_color::num::round_tenth;
use cw_color::{Hsl, Num};

use crate::sheet::Declaration;
use crate::spec::SpecHsl;
use crate::tables::{BRAND_ANCHOR, BRAND_DIFFS, primary_saturation_diff};

/// Lightness distance between neighbouring background steps.
pub const LIGHTNESS_STEP: f64 = 3.6;

// ---------------------------------------------------------------------------
// Shade
// ---------------------------------------------------------------------------

/// A Discord color scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Brand,
    Primary,
    White,
}

impl Scale {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Primary => "primary",
            Self::White => "white",
        }
    }
}

/// One step of a scale, ready to be written as `--<scale>-<step>-hsl`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shade {
    pub scale: Scale,
    pub step: u16,
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Shade {
    #[must_use]
    pub const fn new(scale: Scale, step: u16, h: f64, s: f64, l: f64) -> Self {
        Self { scale, step, h, s, l }
    }

    /// Custom property name, e.g. `--brand-500-hsl`.
    #[must_use]
    pub fn property(&self) -> String {
        format!("--{}-{}-hsl", self.scale.name(), self.step)
    }

    /// Space-separated HSL channels with the saturation-factor indirection.
    #[must_use]
    pub fn channels(&self) -> String {
        hsl_channels(self.h, self.s, self.l)
    }

    #[must_use]
    pub fn declaration(&self) -> Declaration {
        Declaration::new(self.property(), self.channels())
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property(), self.channels())
    }
}

/// `H calc(var(--saturation-factor, 1)*S%) L%`.
///
/// Discord multiplies every saturation by `--saturation-factor` for its
/// reduced-saturation accessibility setting; the indirection keeps that
/// setting working with a colorway applied.
#[must_use]
pub fn hsl_channels(h: f64, s: f64, l: f64) -> String {
    format!(
        "{} calc(var(--saturation-factor, 1)*{}%) {}%",
        Num(h),
        Num(s),
        Num(l)
    )
}

/// `hsl(<channels>)`, optionally with an alpha suffix such as `/60%`.
#[must_use]
pub fn hsl_function(h: f64, s: f64, l: f64, alpha: Option<&str>) -> String {
    match alpha {
        Some(alpha) => format!("hsl({}/{alpha})", hsl_channels(h, s, l)),
        None => format!("hsl({})", hsl_channels(h, s, l)),
    }
}

/// Scale `s` by a relative saturation diff, or keep it as-is when Discord
/// saturation correction is off.
#[must_use]
pub fn adjust_saturation(s: f64, diff: f64, discord_saturation: bool) -> f64 {
    if discord_saturation {
        round_tenth((s / 100.0) * (100.0 + diff))
    } else {
        s
    }
}

// ---------------------------------------------------------------------------
// Brand ramp
// ---------------------------------------------------------------------------

/// Expand the accent into the 26-step brand ramp, lightest step first.
///
/// Step 500 is the accent itself. Every other step applies its measured
/// diffs; lightness is rounded to one decimal and clamped to `0..=100`.
#[must_use]
pub fn brand_ramp(accent: Hsl, discord_saturation: bool) -> Vec<Shade> {
    let mut ramp: Vec<Shade> = BRAND_DIFFS
        .iter()
        .map(|diff| {
            Shade::new(
                Scale::Brand,
                diff.step,
                accent.h,
                adjust_saturation(accent.s, diff.saturation, discord_saturation),
                round_tenth(accent.l + diff.lightness).clamp(0.0, 100.0),
            )
        })
        .collect();
    ramp.insert(
        anchor_index(),
        Shade::new(Scale::Brand, BRAND_ANCHOR, accent.h, accent.s, accent.l),
    );
    ramp
}

/// Position of the anchor inside the brand ramp.
fn anchor_index() -> usize {
    BRAND_DIFFS
        .iter()
        .take_while(|d| d.step < BRAND_ANCHOR)
        .count()
}

// ---------------------------------------------------------------------------
// Background ramp
// ---------------------------------------------------------------------------

/// Which base color a background step is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Primary,
    Secondary,
    Tertiary,
}

/// How a background step derives its saturation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Saturation {
    /// The base saturation, untouched.
    Base,
    /// The base saturation adjusted by the diff of this step.
    Diff,
}

struct BackgroundStep {
    step: u16,
    source: Source,
    saturation: Saturation,
    /// Lightness offset in multiples of [`LIGHTNESS_STEP`], or `None` for
    /// the 645 step which sits 1.1 below its anchor.
    offset: Option<f64>,
}

const fn bg(
    step: u16,
    source: Source,
    saturation: Saturation,
    offset: Option<f64>,
) -> BackgroundStep {
    BackgroundStep {
        step,
        source,
        saturation,
        offset,
    }
}

/// The dark-theme background slots, darkest first.
const BACKGROUND_STEPS: [BackgroundStep; 10] = [
    bg(800, Source::Tertiary, Saturation::Diff, Some(-2.0)),
    bg(730, Source::Tertiary, Saturation::Diff, Some(-1.0)),
    bg(700, Source::Tertiary, Saturation::Base, Some(0.0)),
    bg(660, Source::Secondary, Saturation::Diff, Some(-1.0)),
    bg(645, Source::Secondary, Saturation::Diff, None),
    bg(630, Source::Secondary, Saturation::Base, Some(0.0)),
    bg(600, Source::Primary, Saturation::Base, Some(0.0)),
    bg(560, Source::Primary, Saturation::Base, Some(1.0)),
    bg(530, Source::Primary, Saturation::Diff, Some(2.0)),
    bg(500, Source::Primary, Saturation::Diff, Some(3.0)),
];

/// Lightness offset of the 645 step below the secondary anchor.
const STEP_645_OFFSET: f64 = 1.1;

/// Expand primary, secondary and tertiary into the ten dark-theme background
/// steps, `800` first.
///
/// `muted_text_brightness` replaces the lightness of step 500 (the muted
/// text color) when given.
#[must_use]
pub fn background_ramp(
    spec: &SpecHsl,
    discord_saturation: bool,
    muted_text_brightness: Option<f64>,
) -> Vec<Shade> {
    BACKGROUND_STEPS
        .iter()
        .map(|slot| {
            let base = match slot.source {
                Source::Primary => spec.primary,
                Source::Secondary => spec.secondary,
                Source::Tertiary => spec.tertiary,
            };
            let s = match slot.saturation {
                Saturation::Base => base.s,
                Saturation::Diff => adjust_saturation(
                    base.s,
                    primary_saturation_diff(slot.step),
                    discord_saturation,
                ),
            };
            let l = match (slot.step, muted_text_brightness, slot.offset) {
                (500, Some(muted), _) => muted,
                (_, _, Some(n)) => (base.l + LIGHTNESS_STEP * n).clamp(0.0, 100.0),
                (_, _, None) => (base.l - STEP_645_OFFSET).clamp(0.0, 100.0),
            };
            Shade::new(Scale::Primary, slot.step, base.h, s, l)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Light theme and text shades
// ---------------------------------------------------------------------------

/// The four `.theme-light` overrides, each brightened and capped.
#[must_use]
pub fn light_shades(spec: &SpecHsl, discord_saturation: bool) -> Vec<Shade> {
    let p = spec.primary;
    let s = spec.secondary;
    let t = spec.tertiary;
    vec![
        Shade::new(Scale::White, 500, p.h, p.s, (p.l + 80.0).min(90.0)),
        Shade::new(Scale::Primary, 130, s.h, s.s, (s.l + 80.0).min(85.0)),
        Shade::new(
            Scale::Primary,
            160,
            s.h,
            adjust_saturation(s.s, primary_saturation_diff(660), discord_saturation),
            (s.l + 76.4).min(82.5),
        ),
        Shade::new(Scale::Primary, 200, t.h, t.s, (t.l + 80.0).min(80.0)),
    ]
}

/// `--interactive-muted`: the primary hue at half saturation, never darker
/// than 45%.
#[must_use]
pub fn interactive_muted(primary: Hsl) -> String {
    format!(
        "hsl({} {}% {}%)",
        Num(primary.h),
        Num(primary.s / 2.0),
        Num((primary.l - 5.0).min(100.0).max(45.0))
    )
}

/// A text color tinted with the secondary hue.
///
/// Gray when the secondary color has no hue; a light tint over dark
/// secondaries; a dark, fully saturated tint over light ones.
#[must_use]
pub fn tinted_text(secondary: Hsl, saturation: f64) -> String {
    if secondary.h == 0.0 {
        "gray".to_owned()
    } else if secondary.l < 80.0 {
        format!(
            "hsl({}, calc(var(--saturation-factor, 1)*{}%), 90%)",
            Num(secondary.h),
            Num(saturation)
        )
    } else {
        format!(
            "hsl({}, calc(var(--saturation-factor, 1)*100%), 20%)",
            Num(secondary.h)
        )
    }
}

/// `--primary-<step>` as a tinted text color: secondary hue, primary
/// saturation adjusted by the step's diff.
#[must_use]
pub fn tinted_step(spec: &SpecHsl, step: u16, discord_saturation: bool) -> Declaration {
    let saturation = adjust_saturation(
        spec.primary.s,
        primary_saturation_diff(step),
        discord_saturation,
    );
    Declaration::new(
        format!("--primary-{step}"),
        tinted_text(spec.secondary, saturation),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use cw_color::hex_to_hsl;
    use pretty_assertions::assert_eq;

    use crate::spec::ColorwaySpec;

    fn stock() -> SpecHsl {
        ColorwaySpec::default().hsl()
    }

    #[test]
    fn brand_ramp_has_every_step_in_order() {
        let ramp = brand_ramp(hex_to_hsl("5865f2").unwrap(), true);
        assert_eq!(ramp.len(), 26);
        assert!(ramp.windows(2).all(|w| w[0].step < w[1].step));
        assert_eq!(ramp[13].step, 500);
    }

    #[test]
    fn brand_anchor_is_accent_verbatim() {
        let accent = hex_to_hsl("5865f2").unwrap();
        let anchor = brand_ramp(accent, true)
            .into_iter()
            .find(|s| s.step == 500)
            .unwrap();
        assert_eq!(
            anchor.to_string(),
            "--brand-500-hsl: 235 calc(var(--saturation-factor, 1)*85.6%) 64.7%"
        );
    }

    #[test]
    fn brand_steps_apply_diffs() {
        let ramp = brand_ramp(hex_to_hsl("5865f2").unwrap(), true);
        let step = |n: u16| ramp.iter().find(|s| s.step == n).copied().unwrap();
        // 85.6 * (100 - 9.54712) / 100 = 77.427…, 64.7 + 33.5 = 98.2
        assert_eq!(step(100).channels(), "235 calc(var(--saturation-factor, 1)*77.4%) 98.2%");
        // 85.6 * (100 - 52.5074) / 100 = 40.654…, 64.7 - 61.6 = 3.1
        assert_eq!(step(900).channels(), "235 calc(var(--saturation-factor, 1)*40.7%) 3.1%");
    }

    #[test]
    fn brand_without_discord_saturation_copies_saturation() {
        let ramp = brand_ramp(hex_to_hsl("5865f2").unwrap(), false);
        assert!(ramp.iter().all(|s| s.s == 85.6));
    }

    #[test]
    fn brand_lightness_is_clamped() {
        let ramp = brand_ramp(hex_to_hsl("fafafa").unwrap(), true);
        assert!(ramp.iter().all(|s| (0.0..=100.0).contains(&s.l)));
        assert_eq!(ramp[0].l, 100.0);

        let ramp = brand_ramp(hex_to_hsl("050505").unwrap(), true);
        assert_eq!(ramp.last().unwrap().l, 0.0);
    }

    #[test]
    fn background_anchors_copy_base_colors() {
        let spec = stock();
        let ramp = background_ramp(&spec, true, None);
        let find = |n: u16| {
            let shade = ramp.iter().find(|s| s.step == n).copied().unwrap();
            (shade.h, shade.s, shade.l)
        };
        let channels = |hsl: Hsl| (hsl.h, hsl.s, hsl.l);
        assert_eq!(find(700), channels(spec.tertiary));
        assert_eq!(find(630), channels(spec.secondary));
        assert_eq!(find(600), channels(spec.primary));
    }

    #[test]
    fn background_offsets_are_not_rerounded() {
        let ramp = background_ramp(&stock(), true, None);
        let lines: Vec<String> = ramp.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            [
                "--primary-800-hsl: 225 calc(var(--saturation-factor, 1)*7.9%) 5.3%",
                "--primary-730-hsl: 225 calc(var(--saturation-factor, 1)*7.1%) 8.9%",
                "--primary-700-hsl: 225 calc(var(--saturation-factor, 1)*6.3%) 12.5%",
                "--primary-660-hsl: 220 calc(var(--saturation-factor, 1)*6.7%) 14.4%",
                "--primary-645-hsl: 220 calc(var(--saturation-factor, 1)*7%) 16.9%",
                "--primary-630-hsl: 220 calc(var(--saturation-factor, 1)*6.5%) 18%",
                "--primary-600-hsl: 223 calc(var(--saturation-factor, 1)*6.7%) 20.6%",
                "--primary-560-hsl: 223 calc(var(--saturation-factor, 1)*6.7%) 24.200000000000003%",
                "--primary-530-hsl: 223 calc(var(--saturation-factor, 1)*6.5%) 27.8%",
                "--primary-500-hsl: 223 calc(var(--saturation-factor, 1)*6%) 31.400000000000002%",
            ]
        );
    }

    #[test]
    fn muted_brightness_replaces_step_500() {
        let ramp = background_ramp(&stock(), true, Some(42.0));
        assert_eq!(ramp.last().unwrap().l, 42.0);
    }

    #[test]
    fn light_shades_are_capped() {
        let lines: Vec<String> = light_shades(&stock(), true)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            lines,
            [
                "--white-500-hsl: 223 calc(var(--saturation-factor, 1)*6.7%) 90%",
                "--primary-130-hsl: 220 calc(var(--saturation-factor, 1)*6.5%) 85%",
                "--primary-160-hsl: 220 calc(var(--saturation-factor, 1)*6.7%) 82.5%",
                "--primary-200-hsl: 225 calc(var(--saturation-factor, 1)*6.3%) 80%",
            ]
        );
    }

    #[test]
    fn interactive_muted_floor() {
        assert_eq!(interactive_muted(stock().primary), "hsl(223 3.35% 45%)");
    }

    #[test]
    fn tinted_text_variants() {
        let dark = hex_to_hsl("2b2d31").unwrap();
        assert_eq!(tinted_text(dark, 4.5), "hsl(220, calc(var(--saturation-factor, 1)*4.5%), 90%)");

        let light = hex_to_hsl("f2f3f5").unwrap();
        assert_eq!(
            tinted_text(light, 4.5),
            "hsl(220, calc(var(--saturation-factor, 1)*100%), 20%)"
        );

        let gray = hex_to_hsl("777777").unwrap();
        assert_eq!(tinted_text(gray, 4.5), "gray");
    }
}
