//! The seam between synthesis and whatever hosts the stylesheet.
//!
//! The library never touches a live client. Hosts implement
//! [`ColorSource`] to report the colors currently in effect and
//! [`StyleSink`] to own the single stylesheet a colorway writes to.

use cw_color::{Rgb, parse_css_color};
use tracing::{debug, info};

use crate::colorway::Colorway;
use crate::error::{Error, Result};
use crate::generate::generate_css;
use crate::gradient::{custom_background, gradient_base};
use crate::preset::{CssText, find_preset};
use crate::spec::{ColorwaySpec, SynthesisOptions};

/// Custom properties read by [`capture_current_colors`], in
/// accent, primary, secondary, tertiary order.
pub const CAPTURED_PROPERTIES: [&str; 4] = [
    "--brand-experiment",
    "--background-primary",
    "--background-secondary",
    "--background-tertiary",
];

/// Read access to the host's computed styles.
pub trait ColorSource {
    /// The computed value of a custom property, or `None` when unset.
    fn property(&self, name: &str) -> Option<String>;
}

/// The stylesheet a colorway is applied through.
///
/// Each [`set`](StyleSink::set) replaces the previous contents in one
/// write.
pub trait StyleSink {
    fn set(&mut self, css: &str);

    /// Remove the colorway stylesheet, restoring the host's own colors.
    fn remove(&mut self);
}

/// Snapshot the colors the host currently displays as a [`ColorwaySpec`].
///
/// # Errors
///
/// - [`Error::MissingProperty`] when the host reports no value.
/// - [`Error::Color`] when a value is not a CSS color.
pub fn capture_current_colors(source: &dyn ColorSource) -> Result<ColorwaySpec> {
    let [accent, primary, secondary, tertiary] = CAPTURED_PROPERTIES;
    let read = |name: &'static str| -> Result<Rgb> {
        let value = source.property(name).ok_or(Error::MissingProperty(name))?;
        Ok(parse_css_color(&value)?)
    };
    let spec = ColorwaySpec::new(read(accent)?, read(primary)?, read(secondary)?, read(tertiary)?);
    debug!(%spec, "captured current colors");
    Ok(spec)
}

/// Generate a stored colorway with `preset_id` and hand it to the sink.
///
/// - The default preset carries a header crediting the colorway's author.
/// - Gradient presets use the colorway's own gradient when it stores one.
/// - Every other preset runs its generator.
///
/// Nothing is written unless generation succeeds.
///
/// # Errors
///
/// [`Error::UnknownPreset`], or any error from parsing the colorway's
/// colors or validating `options`.
pub fn apply_colorway(
    sink: &mut dyn StyleSink,
    colorway: &Colorway,
    preset_id: &str,
    options: &SynthesisOptions,
) -> Result<CssText> {
    let preset = find_preset(preset_id).ok_or_else(|| Error::UnknownPreset(preset_id.to_owned()))?;
    let spec = colorway.spec()?;

    let css = match (preset.id, preset.is_gradient(), &colorway.linear_gradient) {
        ("default", _, _) => {
            let options = options.clone().with_header(Some(colorway.header()));
            CssText::Plain(generate_css(&spec, &options)?.to_string())
        }
        (_, true, Some(stops)) => {
            options.validate()?;
            let mut sheet = gradient_base(spec.accent.to_hsl(), true);
            sheet.rule(custom_background(stops));
            CssText::Gradient {
                full: sheet.to_string(),
                base: stops.clone(),
            }
        }
        _ => preset.generate(&spec, options)?,
    };

    info!(colorway = %colorway.name, preset = preset.id, "applying colorway");
    sink.set(css.full());
    Ok(css)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    struct Computed(HashMap<&'static str, &'static str>);

    impl ColorSource for Computed {
        fn property(&self, name: &str) -> Option<String> {
            self.0.get(name).map(|v| (*v).to_owned())
        }
    }

    #[derive(Default)]
    struct Style(Option<String>);

    impl StyleSink for Style {
        fn set(&mut self, css: &str) {
            self.0 = Some(css.to_owned());
        }

        fn remove(&mut self) {
            self.0 = None;
        }
    }

    fn stock_client() -> Computed {
        Computed(HashMap::from([
            ("--brand-experiment", " hsl(235 calc(var(--saturation-factor, 1)*85.6%) 64.7%)"),
            ("--background-primary", "#313338"),
            ("--background-secondary", "rgb(43, 45, 49)"),
            ("--background-tertiary", "#1e1f22"),
        ]))
    }

    #[test]
    fn captures_mixed_notations() {
        let spec = capture_current_colors(&stock_client()).unwrap();
        assert_eq!(spec.to_string(), "#5865f2,#313338,#2b2d31,#1e1f22");
    }

    #[test]
    fn capture_reports_missing_property() {
        let mut client = stock_client();
        client.0.remove("--background-tertiary");
        let err = capture_current_colors(&client).unwrap_err();
        assert!(matches!(err, Error::MissingProperty("--background-tertiary")));
    }

    #[test]
    fn default_preset_credits_author() {
        let colorway = Colorway {
            author: "someone".to_owned(),
            author_id: "1234".to_owned(),
            ..Colorway::new("Stock", &ColorwaySpec::default())
        };
        let mut style = Style::default();
        apply_colorway(&mut style, &colorway, "default", &SynthesisOptions::default()).unwrap();
        let css = style.0.unwrap();
        assert!(css.starts_with("/**\n * @name Stock\n"));
        assert!(css.contains(" * @authorId 1234\n"));
    }

    #[test]
    fn gradient_preset_prefers_stored_gradient() {
        let colorway = Colorway {
            linear_gradient: Some("90deg, #000000 0%, #ffffff 100%".to_owned()),
            ..Colorway::new("Fade", &ColorwaySpec::default())
        };
        let mut style = Style::default();
        let css = apply_colorway(
            &mut style,
            &colorway,
            "gradientType1",
            &SynthesisOptions::default(),
        )
        .unwrap();
        assert_eq!(css.gradient(), Some("90deg, #000000 0%, #ffffff 100%"));
        assert!(style.0.unwrap().ends_with(
            ":root:root {\n    --custom-theme-background: linear-gradient(90deg, #000000 0%, #ffffff 100%);\n}"
        ));
    }

    #[test]
    fn failed_apply_leaves_sink_untouched() {
        let mut style = Style(Some("previous".to_owned()));
        let colorway = Colorway::new("Stock", &ColorwaySpec::default());
        let options = SynthesisOptions::default();
        assert!(apply_colorway(&mut style, &colorway, "nope", &options).is_err());

        let broken = Colorway {
            accent: "#12".to_owned(),
            ..colorway
        };
        assert!(apply_colorway(&mut style, &broken, "cyan", &options).is_err());
        assert_eq!(style.0.as_deref(), Some("previous"));

        style.remove();
        assert_eq!(style.0, None);
    }
}
