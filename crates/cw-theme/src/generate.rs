//! The standard colorway stylesheet.
//!
//! ```text
//! header comment         (optional)
//! :root:root             brand ramp from the accent
//! .theme-dark            background ramp, muted interactive, tinted text
//! .theme-light           capped light-theme surfaces
//! reset rules            surfaces that must show the colorway background
//! /*Primary*/ …          contrast overrides, only for light base colors
//! ```

use tracing::debug;

use crate::contrast::contrast_overrides;
use crate::error::Result;
use crate::palette::{background_ramp, brand_ramp, interactive_muted, light_shades, tinted_step};
use crate::sheet::{Rule, StyleSheet};
use crate::spec::{CSS_VERSION, ColorwaySpec, StyleHeader, SynthesisOptions};

/// Steps that receive a tinted text color when tinted text is on.
const TINTED_STEPS: [u16; 3] = [430, 400, 360];

/// Build the standard colorway stylesheet.
///
/// # Errors
///
/// [`crate::Error::OutOfRange`] when the options fail validation.
pub fn generate_css(spec: &ColorwaySpec, options: &SynthesisOptions) -> Result<StyleSheet> {
    options.validate()?;
    let hsl = spec.hsl();
    debug!(
        %spec,
        tinted_text = options.tinted_text,
        discord_saturation = options.discord_saturation,
        "generating colorway css"
    );

    let mut sheet = StyleSheet::new();
    if let Some(header) = &options.header {
        sheet.comment(header_comment(header));
    }

    sheet.rule(Rule::new([":root:root"]).with(
        brand_ramp(hsl.accent, options.discord_saturation)
            .iter()
            .map(|shade| shade.declaration()),
    ));

    let mut dark = Rule::new([".theme-dark"])
        .with(
            background_ramp(&hsl, options.discord_saturation, options.muted_override())
                .iter()
                .map(|shade| shade.declaration()),
        )
        .decl("--interactive-muted", interactive_muted(hsl.primary));
    if options.tinted_text {
        dark = dark
            .decl("--primary-460-hsl", "0 calc(var(--saturation-factor, 1)*0%) 50%")
            .with(
                TINTED_STEPS
                    .iter()
                    .map(|&step| tinted_step(&hsl, step, options.discord_saturation)),
            );
    }
    sheet.rule(dark);

    sheet.rule(Rule::new([".theme-light"]).with(
        light_shades(&hsl, options.discord_saturation)
            .iter()
            .map(|shade| shade.declaration()),
    ));

    for rule in reset_rules() {
        sheet.rule(rule);
    }

    for (block, rules) in contrast_overrides(&hsl) {
        sheet.section(block.name(), rules);
    }

    Ok(sheet)
}

/// The `/** @name … */` block the client mod reads stylesheet metadata from.
#[must_use]
pub fn header_comment(header: &StyleHeader) -> String {
    format!(
        "/**\n * @name {}\n * @version {CSS_VERSION}\n * @description Automatically generated Colorway.\n * @author {}\n * @authorId {}\n */",
        header.name, header.author, header.author_id
    )
}

/// Surfaces Discord paints with a fixed color; cleared so the colorway
/// background shows through.
fn reset_rules() -> [Rule; 2] {
    [
        Rule::new([
            ".emptyPage_c6b11b",
            ".scrollerContainer_c6b11b",
            ".container_f1fd9c",
            ".header_f1fd9c",
        ])
        .important("background-color", "unset"),
        Rule::new([".container_c2efea", ".container_f1fd9c", ".header_f1fd9c"])
            .important("background", "transparent"),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
