//! Named presets: alternate generators for third-party themes.
//!
//! Each preset turns a [`ColorwaySpec`] into the variables one theme
//! expects. The registry is a static table; lookups are by the preset id
//! colorways store and share (`p:<id>` in a Colorway ID).

use std::fmt;

use bitflags::bitflags;
use cw_color::Num;
use tracing::debug;

use crate::auto::AutoPreset;
use crate::error::{Error, Result};
use crate::generate::generate_css;
use crate::gradient::{custom_background, gradient_base};
use crate::palette::{adjust_saturation, background_ramp, hsl_channels, hsl_function, tinted_step};
use crate::sheet::{Declaration, Rule, StyleSheet};
use crate::spec::{ColorwaySpec, SpecHsl, SynthesisOptions};
use crate::tables::primary_saturation_diff;

bitflags! {
    /// Base color slots a preset reads.
    ///
    /// Changing a slot outside this set never changes the preset's output.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct ColorSlots: u8 {
        const ACCENT    = 1 << 0;
        const PRIMARY   = 1 << 1;
        const SECONDARY = 1 << 2;
        const TERTIARY  = 1 << 3;
    }
}

impl ColorSlots {
    /// Slot names in the order the plugin lists them.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        [
            (Self::ACCENT, "accent"),
            (Self::PRIMARY, "primary"),
            (Self::SECONDARY, "secondary"),
            (Self::TERTIARY, "tertiary"),
        ]
        .into_iter()
        .filter(|(slot, _)| self.contains(*slot))
        .map(|(_, name)| name)
        .collect()
    }
}

// ---------------------------------------------------------------------------
// CssText
// ---------------------------------------------------------------------------

/// Generated stylesheet text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssText {
    Plain(String),
    /// A gradient colorway: the complete stylesheet, plus the bare
    /// `linear-gradient` stop list for previews and storage.
    Gradient { full: String, base: String },
}

impl CssText {
    /// The stylesheet to apply.
    #[must_use]
    pub fn full(&self) -> &str {
        match self {
            Self::Plain(css) | Self::Gradient { full: css, .. } => css,
        }
    }

    /// The gradient stop list, for gradient presets.
    #[must_use]
    pub fn gradient(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Gradient { base, .. } => Some(base),
        }
    }

    #[must_use]
    pub fn into_full(self) -> String {
        match self {
            Self::Plain(css) | Self::Gradient { full: css, .. } => css,
        }
    }
}

impl fmt::Display for CssText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full())
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Generator {
    Default,
    Cyan,
    CyanLegacy,
    NexusRemastered,
    VirtualBoy,
    Modular,
    Solana,
    GradientType1,
    GradientType2,
    Auto(AutoPreset),
}

/// A registered preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: ColorSlots,
    generator: Generator,
}

const ALL_SLOTS: ColorSlots = ColorSlots::all();

const fn preset(
    id: &'static str,
    name: &'static str,
    colors: ColorSlots,
    generator: Generator,
) -> Preset {
    Preset {
        id,
        name,
        colors,
        generator,
    }
}

/// Every preset, in menu order.
pub static PRESETS: [Preset; 13] = [
    preset("default", "Default", ALL_SLOTS, Generator::Default),
    preset(
        "cyan",
        "Cyan",
        ColorSlots::ACCENT.union(ColorSlots::PRIMARY).union(ColorSlots::TERTIARY),
        Generator::Cyan,
    ),
    preset(
        "cyanLegacy",
        "Cyan 1 (Legacy)",
        ColorSlots::ACCENT.union(ColorSlots::PRIMARY).union(ColorSlots::TERTIARY),
        Generator::CyanLegacy,
    ),
    preset("nexusRemastered", "Nexus Remastered", ALL_SLOTS, Generator::NexusRemastered),
    preset(
        "virtualBoy",
        "Virtual Boy",
        ColorSlots::ACCENT.union(ColorSlots::TERTIARY),
        Generator::VirtualBoy,
    ),
    preset("modular", "Modular", ALL_SLOTS, Generator::Modular),
    preset(
        "solana",
        "Solana",
        ColorSlots::ACCENT.union(ColorSlots::PRIMARY),
        Generator::Solana,
    ),
    preset("gradientType1", "Gradient Type 1", ALL_SLOTS, Generator::GradientType1),
    preset(
        "gradientType2",
        "Gradient Type 2",
        ColorSlots::ACCENT.union(ColorSlots::PRIMARY).union(ColorSlots::SECONDARY),
        Generator::GradientType2,
    ),
    preset(
        "hueRotation",
        "Hue Rotation",
        ColorSlots::ACCENT,
        Generator::Auto(AutoPreset::HueRotation),
    ),
    preset(
        "accentSwap",
        "Accent Swap",
        ColorSlots::ACCENT,
        Generator::Auto(AutoPreset::AccentSwap),
    ),
    preset(
        "materialYou",
        "Material You",
        ColorSlots::ACCENT,
        Generator::Auto(AutoPreset::MaterialYou),
    ),
    preset("AMOLED", "AMOLED", ColorSlots::ACCENT, Generator::Auto(AutoPreset::Amoled)),
];

/// Look up a preset by id. Ids are case-sensitive.
#[must_use]
pub fn find_preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

/// Ids of every registered preset.
pub fn preset_ids() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.id)
}

/// Generate the stylesheet of `preset_id` for `spec`.
///
/// # Errors
///
/// - [`Error::UnknownPreset`] when no preset has this id.
/// - [`Error::OutOfRange`] when the options fail validation.
pub fn synthesize(
    spec: &ColorwaySpec,
    preset_id: &str,
    options: &SynthesisOptions,
) -> Result<CssText> {
    let preset = find_preset(preset_id).ok_or_else(|| Error::UnknownPreset(preset_id.to_owned()))?;
    preset.generate(spec, options)
}

impl Preset {
    /// Whether this preset renders a gradient background.
    #[must_use]
    pub const fn is_gradient(&self) -> bool {
        matches!(self.generator, Generator::GradientType1 | Generator::GradientType2)
    }

    /// The auto recipe behind this preset, if it derives its backgrounds.
    #[must_use]
    pub const fn auto(&self) -> Option<AutoPreset> {
        match self.generator {
            Generator::Auto(auto) => Some(auto),
            _ => None,
        }
    }

    /// Generate this preset's stylesheet.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when the options fail validation.
    pub fn generate(&self, spec: &ColorwaySpec, options: &SynthesisOptions) -> Result<CssText> {
        options.validate()?;
        debug!(preset = self.id, %spec, "synthesizing preset");
        let hsl = spec.hsl();
        let discord = options.discord_saturation;

        let css = match self.generator {
            Generator::Default => CssText::Plain(generate_css(spec, options)?.to_string()),
            Generator::Auto(auto) => {
                // Auto presets always render with tinted text, saturation
                // correction and the computed muted text. Only the header
                // carries over from the caller.
                let forced = SynthesisOptions::default()
                    .with_tinted_text(true)
                    .with_discord_saturation(true)
                    .with_header(options.header.clone());
                CssText::Plain(generate_css(&auto.derive(spec.accent), &forced)?.to_string())
            }
            Generator::Cyan => CssText::Plain(single_root(cyan(spec, &hsl, false))),
            Generator::CyanLegacy => CssText::Plain(single_root(cyan(spec, &hsl, true))),
            Generator::NexusRemastered => {
                CssText::Plain(nexus_remastered(spec, &hsl, discord).to_string())
            }
            Generator::VirtualBoy => CssText::Plain(single_root(virtual_boy(&hsl))),
            Generator::Modular => CssText::Plain(single_root(modular(spec, &hsl, discord))),
            Generator::Solana => CssText::Plain(single_root(solana(&hsl))),
            Generator::GradientType1 | Generator::GradientType2 => {
                let base = if self.generator == Generator::GradientType1 {
                    gradient_type_1(spec, &hsl)
                } else {
                    gradient_type_2(spec)
                };
                let mut sheet = gradient_base(hsl.accent, discord);
                sheet.rule(custom_background(&base));
                CssText::Gradient {
                    full: sheet.to_string(),
                    base,
                }
            }
        };
        Ok(css)
    }
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn single_root(rule: Rule) -> String {
    let mut sheet = StyleSheet::new();
    sheet.rule(rule);
    sheet.to_string()
}

fn cyan(spec: &ColorwaySpec, hsl: &SpecHsl, legacy: bool) -> Rule {
    let p = hsl.primary;
    let t = hsl.tertiary;
    let layer_l = (t.l + 3.6 * 2.0).min(100.0);
    let rule = Rule::new([":root:root"]).decl("--cyan-accent-color", spec.accent.to_string());
    if legacy {
        rule.decl("--cyan-background-primary", hsl_function(p.h, p.s, p.l, Some("40%")))
            .decl("--cyan-background-secondary", hsl_function(t.h, t.s, layer_l, None))
    } else {
        rule.decl("--cyan-background-primary", hsl_function(p.h, p.s, p.l, Some("60%")))
            .decl("--cyan-second-layer", hsl_function(t.h, t.s, layer_l, Some("60%")))
    }
}

fn nexus_remastered(spec: &ColorwaySpec, hsl: &SpecHsl, discord: bool) -> StyleSheet {
    let t = hsl.tertiary;
    let p = hsl.primary;
    let floating = hsl_function(
        t.h,
        adjust_saturation(t.s, primary_saturation_diff(800), discord),
        (t.l - 3.6 * 2.0).max(0.0),
        None,
    );
    let root = Rule::new([":root:root"])
        .decl("--nexus-accent-color", spec.accent.to_string())
        .decl("--nexus-background-secondary", floating.clone())
        .decl("--nexus-background-elevated", floating.clone())
        .decl("--nexus-background-floating", floating)
        .decl("--nexus-background-tertiary", hsl_function(t.h, t.s, t.l, None))
        .decl("--home-background", hsl_function(t.h, t.s, t.l, None))
        .decl("--nexus-background-primary", hsl_function(p.h, p.s, p.l, None))
        .with(
            background_ramp(hsl, discord, None)
                .iter()
                .map(|shade| shade.declaration()),
        )
        .with([tinted_step(hsl, 200, discord)]);

    let mut sheet = StyleSheet::new();
    sheet
        .rule(root)
        .rule(Rule::new([".theme-dark"]).important("--background-tertiary", "var(--primary-700)"))
        .rule(Rule::new([".theme-light"]).important("--background-tertiary", "var(--primary-200)"));
    sheet
}

fn virtual_boy(hsl: &SpecHsl) -> Rule {
    let a = hsl.accent;
    let t = hsl.tertiary;
    Rule::new([":root:root"])
        .decl("--VBaccent", hsl_channels(a.h, a.s, a.l))
        .decl("--VBaccent-muted", hsl_channels(t.h, t.s, (t.l - 10.0).max(0.0)))
        .decl(
            "--VBaccent-dimmest",
            hsl_channels(t.h, t.s, (t.l + 3.6 * 5.0 - 3.0).min(100.0)),
        )
}

fn modular(spec: &ColorwaySpec, hsl: &SpecHsl, discord: bool) -> Rule {
    let ramp = background_ramp(hsl, discord, None).into_iter().map(|shade| {
        let decl = shade.declaration();
        // The two lightest steps must beat the theme's own values.
        if matches!(shade.step, 530 | 500) {
            Declaration::important(decl.property, decl.value)
        } else {
            decl
        }
    });
    Rule::new([":root:root"])
        .decl("--brand-experiment", spec.accent.to_string())
        .with(ramp)
        .with([330, 360, 400].map(|step| tinted_step(hsl, step, discord)))
}

fn solana(hsl: &SpecHsl) -> Rule {
    let a = hsl.accent;
    let p = hsl.primary;
    let saturation = |s: f64| format!("calc(var(--saturation-factor, 1)*{}%)", Num(s));
    Rule::new([":root:root"])
        .decl("--accent-hue", Num(a.h).to_string())
        .decl("--accent-saturation", saturation(a.s))
        .decl("--accent-brightness", format!("{}%", Num(a.l)))
        .decl("--background-accent-hue", Num(p.h).to_string())
        .decl("--background-accent-saturation", saturation(p.s))
        .decl("--background-accent-brightness", format!("{}%", Num(p.l)))
        .decl("--background-overlay-opacity", "0%")
}

fn gradient_type_1(spec: &ColorwaySpec, hsl: &SpecHsl) -> String {
    let s = hsl.secondary;
    format!(
        "239.16deg, {p} 10.39%, {sec} 26.87%, {t} 48.31%, hsl({mid}) 64.98%, {p} 92.5%",
        p = spec.primary,
        sec = spec.secondary,
        t = spec.tertiary,
        mid = hsl_channels(s.h, s.s, (s.l + 3.6).min(100.0)),
    )
}

fn gradient_type_2(spec: &ColorwaySpec) -> String {
    format!(
        "48.17deg, {} 11.21%, {} 61.92%",
        spec.primary, spec.secondary
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
