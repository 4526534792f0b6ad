//! End-to-end stylesheet synthesis through the public API.

use cw_color::Rgb;
use cw_theme::{ColorwaySpec, Error, PRESETS, SynthesisOptions, synthesize};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn spec(accent: &str, primary: &str, secondary: &str, tertiary: &str) -> ColorwaySpec {
    ColorwaySpec::parse(accent, primary, secondary, tertiary).unwrap()
}

fn default_css(spec: &ColorwaySpec) -> String {
    synthesize(spec, "default", &SynthesisOptions::default())
        .unwrap()
        .into_full()
}

#[test]
fn blurple_brand_anchor() {
    let css = default_css(&spec("#5865f2", "#313338", "#2b2d31", "#1e1f22"));
    assert!(css.contains(
        "    --brand-500-hsl: 235 calc(var(--saturation-factor, 1)*85.6%) 64.7%;\n"
    ));
    assert!(!css.contains("/*Primary*/"));
    assert!(!css.contains("/*Secondary*/"));
    assert!(!css.contains("/*Tertiary*/"));
    assert!(!css.contains("/*Accent*/"));
}

#[test]
fn light_primary_adds_primary_block() {
    let css = default_css(&spec("#5865f2", "#f2f3f5", "#2b2d31", "#1e1f22"));
    let start = css.find("\n/*Primary*/\n").unwrap();
    let end = css.find("\n/*End Primary*/").unwrap();
    let block = &css[start..end];
    assert!(block.contains("    --text-normal: black !important;\n"));
    assert!(block.contains("    --interactive-normal: black !important;\n"));
    // The text area test reads primary lightness + 3.6.
    assert!(block.contains(".theme-dark .channelTextArea_a7d72e {\n    --text-normal: black;\n}"));
    assert!(!css.contains("/*Secondary*/"));
}

#[test]
fn contrast_boundary_is_strict() {
    for (slot, name) in [(0, "Accent"), (1, "Primary"), (2, "Secondary"), (3, "Tertiary")] {
        let mut colors = ["#5865f2", "#313338", "#2b2d31", "#1e1f22"];
        let marker = format!("/*{name}*/");

        colors[slot] = "#cccccc";
        let css = default_css(&spec(colors[0], colors[1], colors[2], colors[3]));
        assert!(!css.contains(&marker), "{name} block at lightness 80");

        colors[slot] = "#cfcfcf";
        let css = default_css(&spec(colors[0], colors[1], colors[2], colors[3]));
        assert!(css.contains(&marker), "{name} block missing at lightness 81.2");
    }
}

#[test]
fn blocks_keep_emission_order() {
    let css = default_css(&spec("#ffffff", "#ffffff", "#ffffff", "#ffffff"));
    let positions: Vec<usize> = ["Primary", "Secondary", "Tertiary", "Accent"]
        .iter()
        .map(|name| css.find(&format!("/*{name}*/")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn discord_saturation_corrects_background_steps() {
    let stock = ColorwaySpec::default();
    let corrected = default_css(&stock);
    let base = synthesize(
        &stock,
        "default",
        &SynthesisOptions::default().with_discord_saturation(false),
    )
    .unwrap()
    .into_full();

    // 600 is the primary anchor and keeps the base saturation either way.
    let anchor = "    --primary-600-hsl: 223 calc(var(--saturation-factor, 1)*6.7%) 20.6%;\n";
    assert!(corrected.contains(anchor));
    assert!(base.contains(anchor));

    // 530 applies its saturation diff only when correction is on.
    assert!(corrected.contains(
        "    --primary-530-hsl: 223 calc(var(--saturation-factor, 1)*6.5%) 27.8%;\n"
    ));
    assert!(base.contains(
        "    --primary-530-hsl: 223 calc(var(--saturation-factor, 1)*6.7%) 27.8%;\n"
    ));
}

#[test]
fn extreme_bases_stay_in_range() {
    for color in ["#000000", "#ffffff"] {
        let css = default_css(&spec(color, color, color, color));
        for line in css.lines().filter(|l| l.contains("-hsl: ")) {
            let lightness = line
                .trim_end_matches(';')
                .rsplit(' ')
                .next()
                .and_then(|l| l.strip_suffix('%'))
                .and_then(|l| l.parse::<f64>().ok())
                .unwrap();
            assert!((0.0..=100.0).contains(&lightness), "{line}");
        }
    }
}

#[test]
fn unknown_preset_does_not_fall_back() {
    let options = SynthesisOptions::default();
    let err = synthesize(&ColorwaySpec::default(), "gradient", &options).unwrap_err();
    assert_eq!(err.to_string(), "unknown preset 'gradient'");
    assert!(matches!(err, Error::UnknownPreset(_)));
}

#[test]
fn gradient_presets_return_stops() {
    for preset in PRESETS.iter().filter(|p| p.is_gradient()) {
        let options = SynthesisOptions::default();
        let css = synthesize(&ColorwaySpec::default(), preset.id, &options).unwrap();
        let stops = css.gradient().unwrap();
        assert!(css.full().contains(&format!("linear-gradient({stops})")));
        assert!(css.full().starts_with(
            "@import url(//dablulite.github.io/css-snippets/NitroThemesFix/import.css);"
        ));
    }
}

proptest! {
    #[test]
    fn synthesis_is_deterministic(colors in any::<[u8; 12]>(), preset in 0..PRESETS.len()) {
        let rgb = |i: usize| Rgb::new(colors[i], colors[i + 1], colors[i + 2]);
        let spec = ColorwaySpec::new(rgb(0), rgb(3), rgb(6), rgb(9));
        let id = PRESETS[preset].id;
        let opts = SynthesisOptions::default();
        let first = synthesize(&spec, id, &opts).unwrap();
        prop_assert_eq!(first, synthesize(&spec, id, &opts).unwrap());
    }

    #[test]
    fn brand_anchor_is_accent(r: u8, g: u8, b: u8) {
        let accent = Rgb::new(r, g, b);
        let hsl = accent.to_hsl();
        let css = default_css(&ColorwaySpec::default().with_accent(accent));
        let expected = format!(
            "    --brand-500-hsl: {} calc(var(--saturation-factor, 1)*{}%) {}%;\n",
            cw_color::Num(hsl.h),
            cw_color::Num(hsl.s),
            cw_color::Num(hsl.l)
        );
        prop_assert!(css.contains(&expected));
    }
}
