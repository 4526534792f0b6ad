//! Gradient backgrounds and their overlay layering.
//!
//! A gradient colorway puts one image behind the whole client and tints
//! each surface with a translucent overlay instead of a flat color. Every
//! surface variable is a stack of `linear-gradient` layers over the image:
//!
//! ```text
//! --bg-overlay-3: linear-gradient(<color>/<opacity-3>, …) fixed 0 0/cover,
//!                 var(--custom-theme-background) fixed 0 0/cover;
//! ```
//!
//! Two families exist. The `bg` family targets the live client and layers
//! over `--custom-theme-background`; the `dc` family is scoped to the
//! preview widgets and layers over `--gradient-theme-bg`. Both share the
//! dark and light opacity tables.

use cw_color::Hsl;

use crate::palette::brand_ramp;
use crate::sheet::{Declaration, Rule, StyleSheet};

/// Snippet that re-enables Nitro gradient themes on non-Nitro accounts.
pub const NITRO_THEMES_FIX: &str = "//dablulite.github.io/css-snippets/NitroThemesFix/import.css";

/// Selectors of the preview widgets the `dc` family is scoped to.
pub const PREVIEW_SELECTORS: [&str; 2] = [".colorwaysPreview-modal", ".colorwaysPreview-wrapper"];

// ---------------------------------------------------------------------------
// Overlay families
// ---------------------------------------------------------------------------

/// Which variable family and background image an overlay stack uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// `--bg-overlay-*` over `--custom-theme-background`.
    Client,
    /// `--dc-overlay-*` over `--gradient-theme-bg`.
    Preview,
}

impl Overlay {
    const fn prefix(self) -> &'static str {
        match self {
            Self::Client => "bg",
            Self::Preview => "dc",
        }
    }

    /// The variable holding the background image.
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Client => "--custom-theme-background",
            Self::Preview => "--gradient-theme-bg",
        }
    }

    fn var(self, name: &str) -> String {
        format!("--{}-overlay-{name}", self.prefix())
    }

    /// `rgb(var(--X-overlay-<tone>)/var(--X-overlay-opacity-<level>))`
    fn tint(self, tone: Tone, level: &str) -> String {
        format!(
            "rgb(var({})/var({}))",
            self.var(tone.name()),
            self.var(&format!("opacity-{level}"))
        )
    }

    /// One flat translucent layer.
    fn layer(self, tone: Tone, level: &str) -> String {
        let tint = self.tint(tone, level);
        format!("linear-gradient({tint},{tint}) fixed 0 0/cover")
    }

    /// Layers followed by the background image.
    fn stack(self, layers: &[(Tone, &str)]) -> String {
        let mut out = String::new();
        for (tone, level) in layers {
            out.push_str(&self.layer(*tone, level));
            out.push(',');
        }
        out.push_str(&format!("var({}) fixed 0 0/cover", self.background()));
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Color,
    Inverse,
}

impl Tone {
    const fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Inverse => "color-inverse",
        }
    }
}

// ---------------------------------------------------------------------------
// Opacity tables
// ---------------------------------------------------------------------------

struct OpacityTable {
    color: &'static str,
    inverse: &'static str,
    levels: [(&'static str, &'static str); 15],
    /// The numbered level the app frame reuses.
    app_frame: &'static str,
}

const DARK: OpacityTable = OpacityTable {
    color: "0 0 0",
    inverse: "255 255 255",
    levels: [
        ("1", "0.85"),
        ("2", "0.8"),
        ("3", "0.7"),
        ("4", "0.5"),
        ("5", "0.4"),
        ("6", "0.1"),
        ("hover", "0.5"),
        ("hover-inverse", "0.08"),
        ("active", "0.45"),
        ("active-inverse", "0.1"),
        ("selected", "0.4"),
        ("selected-inverse", "0.15"),
        ("chat", "0.8"),
        ("home", "0.85"),
        ("home-card", "0.8"),
    ],
    app_frame: "4",
};

const LIGHT: OpacityTable = OpacityTable {
    color: "255 255 255",
    inverse: "0 0 0",
    levels: [
        ("1", "0.9"),
        ("2", "0.8"),
        ("3", "0.7"),
        ("4", "0.6"),
        ("5", "0.3"),
        ("6", "0.15"),
        ("hover", "0.7"),
        ("hover-inverse", "0.02"),
        ("active", "0.65"),
        ("active-inverse", "0.03"),
        ("selected", "0.6"),
        ("selected-inverse", "0.04"),
        ("chat", "0.9"),
        ("home", "0.7"),
        ("home-card", "0.9"),
    ],
    app_frame: "5",
};

fn opacity_declarations(overlay: Overlay, table: &OpacityTable) -> Vec<Declaration> {
    let mut decls = vec![
        Declaration::new(overlay.var("color"), table.color),
        Declaration::new(overlay.var("color-inverse"), table.inverse),
    ];
    for (level, value) in &table.levels {
        decls.push(Declaration::new(overlay.var(&format!("opacity-{level}")), *value));
    }
    decls.push(Declaration::new(
        overlay.var("opacity-app-frame"),
        format!("var({})", overlay.var(&format!("opacity-{}", table.app_frame))),
    ));
    decls
}

/// The `--X-overlay-*` surface stacks.
fn overlay_declarations(overlay: Overlay) -> Vec<Declaration> {
    use Tone::{Color, Inverse};

    let mut decls: Vec<Declaration> = ["1", "2", "3", "4", "5"]
        .into_iter()
        .map(|n| Declaration::new(overlay.var(n), overlay.stack(&[(Color, n)])))
        .collect();
    decls.push(Declaration::new(overlay.var("6"), overlay.stack(&[(Inverse, "6")])));
    for state in ["hover", "active", "selected"] {
        let inverse = format!("{state}-inverse");
        decls.push(Declaration::new(
            overlay.var(state),
            overlay.stack(&[(Inverse, inverse.as_str()), (Color, state)]),
        ));
    }
    for surface in ["chat", "home", "home-card", "app-frame"] {
        decls.push(Declaration::new(
            overlay.var(surface),
            overlay.stack(&[(Color, surface)]),
        ));
    }
    decls
}

// ---------------------------------------------------------------------------
// Client gradient
// ---------------------------------------------------------------------------

/// Everything a gradient colorway needs except the gradient itself: the
/// Nitro fix import, both opacity tables, client fixes, and the brand ramp
/// with the overlay stacks.
#[must_use]
pub fn gradient_base(accent: Hsl, discord_saturation: bool) -> StyleSheet {
    let overlay = Overlay::Client;
    let mut sheet = StyleSheet::new();
    sheet
        .import(NITRO_THEMES_FIX)
        .rule(Rule::new([".theme-dark"]).with(opacity_declarations(overlay, &DARK)))
        .rule(Rule::new([".theme-light"]).with(opacity_declarations(overlay, &LIGHT)));
    for rule in client_fixes() {
        sheet.rule(rule);
    }
    sheet.rule(
        Rule::new([":root:root"])
            .with(
                brand_ramp(accent, discord_saturation)
                    .iter()
                    .map(|shade| shade.declaration()),
            )
            .with(overlay_declarations(overlay)),
    );
    sheet
}

/// `:root:root { --custom-theme-background: linear-gradient(<stops>); }`
#[must_use]
pub fn custom_background(stops: &str) -> Rule {
    Rule::new([":root:root"]).decl(
        Overlay::Client.background(),
        format!("linear-gradient({stops})"),
    )
}

/// Client elements that need the overlay variables wired in by hand.
fn client_fixes() -> Vec<Rule> {
    let inverse_6 = "rgb(var(--bg-overlay-color-inverse)/var(--bg-overlay-opacity-6))";
    let thumb = "rgb(var(--bg-overlay-color-inverse)/var(--bg-overlay-opacity-4))";
    let track = "rgb(var(--bg-overlay-color)/.4)";
    vec![
        Rule::new([".children_fc4f04:after", ".form_a7d72e:before"]).decl("content", "none"),
        Rule::new([".scroller_fea3ef"])
            .decl("background", "var(--bg-overlay-app-frame,var(--background-tertiary))"),
        Rule::new([".expandedFolderBackground_bc7085"]).decl("background", inverse_6),
        Rule::new([".wrapper__8436d:not(:hover):not(.selected_ae80f7) .childWrapper_a6ce15"])
            .decl("background", inverse_6),
        Rule::new([".folder_bc7085:has(.expandedFolderIconWrapper_bc7085)"])
            .decl("background", "var(--bg-overlay-6,var(--background-secondary))"),
        Rule::new([".circleIconButton_db6521:not(.selected_db6521)"]).decl("background", inverse_6),
        Rule::new([
            ".auto_eed6a8::-webkit-scrollbar-thumb",
            ".thin_eed6a8::-webkit-scrollbar-thumb",
        ])
        .decl("background-size", "200vh")
        .decl(
            "background-image",
            format!(
                "-webkit-gradient(linear,left top,left bottom,from({thumb}),to({thumb})),var(--custom-theme-background)"
            ),
        )
        .decl(
            "background-image",
            format!("linear-gradient({thumb},{thumb}),var(--custom-theme-background)"),
        ),
        Rule::new([".auto_eed6a8::-webkit-scrollbar-track"])
            .decl("background-size", "200vh")
            .decl(
                "background-image",
                format!(
                    "-webkit-gradient(linear,left top,left bottom,from({track}),to({track})),var(--custom-theme-background)"
                ),
            )
            .decl(
                "background-image",
                format!("linear-gradient({track},{track}),var(--custom-theme-background)"),
            ),
    ]
}

// ---------------------------------------------------------------------------
// Preview gradient
// ---------------------------------------------------------------------------

/// Overlay layering for the preview widgets, without a gradient.
#[must_use]
pub fn pure_gradient_base() -> StyleSheet {
    use Tone::{Color, Inverse};

    let overlay = Overlay::Preview;
    let scoped = |theme: &str| {
        format!(
            ".{theme} :is({}, {})",
            PREVIEW_SELECTORS[0], PREVIEW_SELECTORS[1]
        )
    };

    let dark = Rule::new([scoped("theme-dark")])
        .with(opacity_declarations(overlay, &DARK))
        .decl(overlay_var("guild-button"), overlay.tint(Inverse, "6"))
        .decl(overlay_var("secondary-alt"), overlay.stack(&[(Color, "3")]))
        .decl(overlay_var("chat-header"), overlay.stack(&[(Color, "2")]));
    let light = Rule::new([scoped("theme-light")])
        .with(opacity_declarations(overlay, &LIGHT))
        .decl(overlay_var("guild-button"), overlay.tint(Color, "3"))
        .decl(overlay_var("secondary-alt"), overlay.stack(&[(Color, "1")]))
        .decl(overlay_var("chat-header"), overlay.stack(&[(Color, "1")]));

    let mut sheet = StyleSheet::new();
    sheet
        .rule(dark)
        .rule(light)
        .rule(Rule::new(PREVIEW_SELECTORS).with(overlay_declarations(overlay)));
    sheet
}

/// Preview stylesheet for a gradient given as a `linear-gradient` stop list.
#[must_use]
pub fn pure_gradient(stops: &str) -> StyleSheet {
    let mut sheet = pure_gradient_base();
    sheet.rule(
        Rule::new(PREVIEW_SELECTORS).decl(
            Overlay::Preview.background(),
            format!("linear-gradient({stops})"),
        ),
    );
    sheet
}

/// Preview-only variables outside the overlay stacks.
fn overlay_var(name: &str) -> String {
    format!("--dc-{name}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
