//! Contrast-conditional overrides for light base colors.
//!
//! Discord's dark theme paints white text on every surface. When a base
//! color is light enough that white text would vanish, the colorway flips
//! the affected text and icon variables to black for the elements sitting on
//! that surface. Each base color has its own block:
//!
//! - Primary: chat area, message list, toolbars. Triggered by the
//!   whole-percent rounded lightness, so 80.5% already counts as light.
//! - Secondary: channel list, member list, user panel.
//! - Tertiary: window chrome, search bar, popouts, tooltips.
//! - Accent: selected items and brand-colored buttons.
//!
//! Blocks are independent and emitted in that order. The test is strict:
//! a lightness of exactly 80 is still dark.

use cw_color::Hsl;
use tracing::trace;

use crate::palette::tinted_text;
use crate::sheet::Rule;
use crate::spec::SpecHsl;

/// Lightness above which a surface counts as light.
pub const LIGHT_THRESHOLD: f64 = 80.0;

/// Whether white text would be unreadable on `color`.
#[must_use]
pub fn is_light(color: Hsl) -> bool {
    color.l > LIGHT_THRESHOLD
}

const fn black_or_white(light: bool) -> &'static str {
    if light { "black" } else { "white" }
}

// ---------------------------------------------------------------------------
// ContrastBlock
// ---------------------------------------------------------------------------

/// One of the four override blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContrastBlock {
    Primary,
    Secondary,
    Tertiary,
    Accent,
}

impl ContrastBlock {
    /// Emission order.
    pub const ALL: [Self; 4] = [Self::Primary, Self::Secondary, Self::Tertiary, Self::Accent];

    /// Section name used in the `/*Name*/ … /*End Name*/` markers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Tertiary => "Tertiary",
            Self::Accent => "Accent",
        }
    }

    /// Whether this block applies to the given colors.
    #[must_use]
    pub fn triggered(self, spec: &SpecHsl) -> bool {
        match self {
            Self::Primary => spec.primary.rounded_lightness() > LIGHT_THRESHOLD,
            Self::Secondary => is_light(spec.secondary),
            Self::Tertiary => is_light(spec.tertiary),
            Self::Accent => is_light(spec.accent),
        }
    }

    /// The block's rules. Inner element tests read the other colors of
    /// `spec`, so the rules depend on more than the triggering color.
    #[must_use]
    pub fn rules(self, spec: &SpecHsl) -> Vec<Rule> {
        match self {
            Self::Primary => primary_rules(spec),
            Self::Secondary => secondary_rules(spec),
            Self::Tertiary => tertiary_rules(spec),
            Self::Accent => accent_rules(),
        }
    }
}

/// The triggered blocks with their rules, in emission order.
#[must_use]
pub fn contrast_overrides(spec: &SpecHsl) -> Vec<(ContrastBlock, Vec<Rule>)> {
    ContrastBlock::ALL
        .into_iter()
        .filter(|block| {
            let on = block.triggered(spec);
            trace!(block = block.name(), triggered = on, "contrast block");
            on
        })
        .map(|block| (block, block.rules(spec)))
        .collect()
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

fn primary_rules(spec: &SpecHsl) -> Vec<Rule> {
    let text_area_light = spec.primary.l + 3.6 > LIGHT_THRESHOLD;
    vec![
        Rule::new([
            ".theme-dark .container_c2739c",
            ".theme-dark .body_cd82a7",
            ".theme-dark .toolbar_fc4f04",
            ".theme-dark .container_f0fccd",
            ".theme-dark .messageContent_f9f2ca",
            ".theme-dark .attachButtonPlus_f298d4",
            ".theme-dark .username_f9f2ca:not([style])",
            ".theme-dark .children_fc4f04",
            ".theme-dark .buttonContainer_f9f2ca",
            ".theme-dark .listItem_c96c45",
            ".theme-dark .body_cd82a7 .caret_fc4f04",
            ".theme-dark .body_cd82a7 .titleWrapper_fc4f04 > h1",
            ".theme-dark .body_cd82a7 .icon_fc4f04",
        ])
        .important("--white-500", "black")
        .important("--interactive-normal", "black")
        .important("--text-normal", "black")
        .important("--text-muted", "black")
        .important("--header-primary", "black")
        .important("--header-secondary", "black"),
        Rule::new([
            ".theme-dark .contentRegionScroller_c25c6d :not(.mtk1,.mtk2,.mtk3,.mtk4,.mtk5,.mtk6,.mtk7,.mtk8,.mtk9,.monaco-editor .line-numbers)",
        ])
        .important("--white-500", "black"),
        Rule::new([".theme-dark .container_fc4f04"]).decl("--channel-icon", "black"),
        Rule::new([".theme-dark .callContainer_d880dc"])
            .important("--white-500", black_or_white(is_light(spec.tertiary))),
        Rule::new([".theme-dark .channelTextArea_a7d72e"])
            .decl("--text-normal", black_or_white(text_area_light)),
        Rule::new([".theme-dark .placeholder_a552a6"])
            .decl("--channel-text-area-placeholder", black_or_white(text_area_light))
            .decl("opacity", ".6"),
        Rule::new([".theme-dark .colorwaySelectorIcon"]).decl("background-color", "black"),
        Rule::new([".theme-dark .root_f9a4c9 > .header_f9a4c9 > h1"]).decl("color", "black"),
    ]
}

fn secondary_rules(spec: &SpecHsl) -> Vec<Rule> {
    vec![
        Rule::new([
            ".theme-dark .wrapper_cd82a7 *",
            ".theme-dark .sidebar_a4d4d9 *:not(.hasBanner_fd6364 *)",
            ".theme-dark .members_cbd271 *:not([style])",
            ".theme-dark .sidebarRegionScroller_c25c6d *",
            ".theme-dark .header_e06857",
            ".theme-dark .lookFilled_dd4f85.colorPrimary_dd4f85",
        ])
        .important("--white-500", "black")
        .important("--channels-default", "black")
        .important("--channel-icon", "black")
        .decl("--interactive-normal", "var(--white-500)")
        .decl("--interactive-hover", "var(--white-500)")
        .decl("--interactive-active", "var(--white-500)"),
        Rule::new([".theme-dark .channelRow_f04d06"])
            .decl("background-color", "var(--background-secondary)"),
        Rule::new([".theme-dark .channelRow_f04d06 *"]).decl("--channel-icon", "black"),
        Rule::new([".theme-dark #app-mount .activity_a31c43"])
            .important("--channels-default", "var(--white-500)"),
        Rule::new([".theme-dark .nameTag_b2ca13"])
            .important("--header-primary", "black")
            .important("--header-secondary", tinted_text(spec.secondary, 100.0)),
        Rule::new([".theme-dark .bannerVisible_fd6364 .headerContent_fd6364"])
            .decl("color", "#fff"),
        Rule::new([".theme-dark .embedFull_b0068a"]).decl("--text-normal", "black"),
    ]
}

fn tertiary_rules(spec: &SpecHsl) -> Vec<Rule> {
    vec![
        Rule::new([
            ".theme-dark .winButton_a934d8",
            ".theme-dark .searchBar_e0840f *",
            ".theme-dark .wordmarkWindows_a934d8",
            ".theme-dark .searchBar_a46bef *",
            ".theme-dark .searchBarComponent_f0963d",
        ])
        .important("--white-500", "black"),
        Rule::new([r#".theme-dark [style="background-color: var(--background-secondary);"]"#])
            .decl("color", black_or_white(is_light(spec.secondary))),
        Rule::new([".theme-dark .popout_c5b389 > *"])
            .important("--interactive-normal", "black")
            .important("--header-secondary", "black"),
        Rule::new([".theme-dark .tooltip_b6c360"]).important("--text-normal", "black"),
        Rule::new([".theme-dark .children_fc4f04 .icon_fc4f04"])
            .important("color", "var(--interactive-active)"),
    ]
}

fn accent_rules() -> Vec<Rule> {
    vec![
        Rule::new([
            ".selected_db6521 *",
            ".selected_ae80f7 *",
            "#app-mount .lookFilled_dd4f85.colorBrand_dd4f85:not(.buttonColor_adcaac)",
            ".colorDefault_d90b3d.focused_d90b3d",
            ".row_c5b389:hover",
            ".colorwayInfoIcon",
            ".checkmarkCircle_cb7c27 > circle",
        ])
        .important("--white-500", "black"),
        Rule::new([".ColorwaySelectorBtn:hover .vc-pallete-icon"]).important("color", "#000"),
        Rule::new([":root:root"]).important("--mention-foreground", "black"),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use cw_color::Rgb;

    use crate::spec::ColorwaySpec;

    fn gray(level: u8) -> Rgb {
        Rgb::new(level, level, level)
    }

    fn blocks(spec: &ColorwaySpec) -> Vec<ContrastBlock> {
        contrast_overrides(&spec.hsl())
            .into_iter()
            .map(|(block, _)| block)
            .collect()
    }

    #[test]
    fn stock_dark_triggers_nothing() {
        let blurple = ColorwaySpec::default().with_accent(Rgb::new(0x58, 0x65, 0xf2));
        assert!(blocks(&blurple).is_empty());
    }

    #[test]
    fn white_accent_triggers_accent_block() {
        assert_eq!(blocks(&ColorwaySpec::default()), [ContrastBlock::Accent]);
    }

    #[test]
    fn all_light_triggers_all_in_order() {
        let light = gray(0xf0);
        let spec = ColorwaySpec::new(light, light, light, light);
        assert_eq!(blocks(&spec), ContrastBlock::ALL);
    }

    #[test]
    fn primary_uses_rounded_lightness() {
        let mut spec = ColorwaySpec::default().hsl();
        spec.primary = Hsl::new(0.0, 0.0, 80.5);
        assert!(ContrastBlock::Primary.triggered(&spec));
        spec.primary = Hsl::new(0.0, 0.0, 80.4);
        assert!(!ContrastBlock::Primary.triggered(&spec));
        // The other blocks compare the raw value.
        spec.secondary = Hsl::new(0.0, 0.0, 80.4);
        assert!(ContrastBlock::Secondary.triggered(&spec));
    }

    #[test]
    fn threshold_is_strict() {
        let mut spec = ColorwaySpec::default().hsl();
        spec.tertiary = Hsl::new(0.0, 0.0, 80.0);
        assert!(!ContrastBlock::Tertiary.triggered(&spec));
        spec.tertiary = Hsl::new(0.0, 0.0, 80.1);
        assert!(ContrastBlock::Tertiary.triggered(&spec));
    }

    #[test]
    fn call_container_follows_tertiary() {
        let mut spec = ColorwaySpec::default().hsl();
        spec.primary = Hsl::new(220.0, 13.0, 95.5);
        let value = |spec: &SpecHsl| {
            primary_rules(spec)
                .iter()
                .find(|r| r.selectors[0] == ".theme-dark .callContainer_d880dc")
                .and_then(|r| r.get("--white-500").map(str::to_owned))
        };
        assert_eq!(value(&spec).as_deref(), Some("white"));
        spec.tertiary = Hsl::new(0.0, 0.0, 90.0);
        assert_eq!(value(&spec).as_deref(), Some("black"));
    }

    #[test]
    fn tertiary_secondary_background_follows_secondary() {
        let mut spec = ColorwaySpec::default().hsl();
        let color = |spec: &SpecHsl| tertiary_rules(spec)[1].get("color").map(str::to_owned);
        assert_eq!(color(&spec).as_deref(), Some("white"));
        spec.secondary = Hsl::new(0.0, 0.0, 85.0);
        assert_eq!(color(&spec).as_deref(), Some("black"));
    }

    #[test]
    fn name_tag_uses_full_saturation_tint() {
        let spec = ColorwaySpec::default().hsl();
        let rules = secondary_rules(&spec);
        let tag = rules.iter().find(|r| r.selectors[0].contains("nameTag")).unwrap();
        assert_eq!(
            tag.get("--header-secondary"),
            Some("hsl(220, calc(var(--saturation-factor, 1)*100%), 90%)")
        );
    }
}
