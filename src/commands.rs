// SPDX-License-Identifier: MIT
//
// Subcommand implementations. Each returns the text to print so the
// commands can be tested without capturing stdout.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use cw_theme::{
    Colorway, ColorwayId, Error, PRESETS, SourceFile, StyleSink, SynthesisOptions, apply_colorway,
    find_preset, gradient::pure_gradient, synthesize,
};
use tracing::{debug, warn};

use crate::cli::{ColorArgs, CssArgs, OptionArgs};

const DEFAULT_PRESET: &str = "default";
const DEFAULT_GRADIENT_PRESET: &str = "gradientType1";

// ─── css ────────────────────────────────────────────────────────────────────

pub fn run_css(args: &CssArgs) -> Result<String> {
    let (spec, stored_preset) = match &args.id {
        Some(id) => {
            let id = decode_any(id)?;
            (id.spec, id.preset)
        }
        None => (args.colors.spec().context("reading colors")?, None),
    };
    let preset = args
        .preset
        .clone()
        .or(stored_preset)
        .unwrap_or_else(|| DEFAULT_PRESET.to_owned());
    let options = args.options.options().with_header(args.header());

    let css = synthesize(&spec, &preset, &options)?;
    if !(args.stops || args.preview) {
        return Ok(css.into_full());
    }
    let Some(stops) = css.gradient() else {
        bail!("preset '{preset}' has no gradient stops");
    };
    if args.preview {
        Ok(pure_gradient(stops).to_string())
    } else {
        Ok(stops.to_owned())
    }
}

// ─── id ─────────────────────────────────────────────────────────────────────

pub fn run_id_encode(
    colors: &ColorArgs,
    name: Option<&str>,
    preset: Option<&str>,
) -> Result<String> {
    let mut id = ColorwayId::new(colors.spec().context("reading colors")?);
    if let Some(name) = name {
        id = id.with_name(name);
    }
    if let Some(preset) = preset {
        if find_preset(preset).is_none() {
            return Err(Error::UnknownPreset(preset.to_owned()).into());
        }
        id = id.with_preset(preset);
    }
    Ok(id.encode()?)
}

pub fn run_id_decode(input: &str) -> Result<String> {
    let id = decode_any(input)?;
    let spec = id.spec;
    let mut out = String::new();
    if let Some(name) = &id.name {
        writeln!(out, "name:      {name}")?;
    }
    if let Some(preset) = &id.preset {
        writeln!(out, "preset:    {preset}")?;
    }
    writeln!(out, "accent:    {}", spec.accent)?;
    writeln!(out, "primary:   {}", spec.primary)?;
    writeln!(out, "secondary: {}", spec.secondary)?;
    write!(out, "tertiary:  {}", spec.tertiary)?;
    Ok(out)
}

/// A bare ID, or a message carrying `colorway:<id>`.
fn decode_any(input: &str) -> cw_theme::Result<ColorwayId> {
    if input.contains(cw_theme::id::MESSAGE_PREFIX) {
        ColorwayId::parse_message(input)
    } else {
        ColorwayId::decode(input)
    }
}

// ─── presets ────────────────────────────────────────────────────────────────

pub fn run_presets(json: bool) -> Result<String> {
    if json {
        let presets: Vec<serde_json::Value> = PRESETS
            .iter()
            .map(|p| {
                serde_json::json!({
                    "id": p.id,
                    "name": p.name,
                    "colors": p.colors.names(),
                    "gradient": p.is_gradient(),
                    "auto": p.auto().is_some(),
                })
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&presets)?);
    }

    let width = PRESETS.iter().map(|p| p.id.len()).max().unwrap_or_default();
    let lines: Vec<String> = PRESETS
        .iter()
        .map(|p| format!("{:<width$}  {}", p.id, p.colors.names().join(", ")))
        .collect();
    Ok(lines.join("\n"))
}

// ─── source ─────────────────────────────────────────────────────────────────

/// Keeps the last stylesheet a colorway was applied with.
#[derive(Default)]
struct Captured(Option<String>);

impl StyleSink for Captured {
    fn set(&mut self, css: &str) {
        self.0 = Some(css.to_owned());
    }

    fn remove(&mut self) {
        self.0 = None;
    }
}

pub fn run_source(
    path: &Path,
    name: Option<&str>,
    preset: Option<&str>,
    options: &OptionArgs,
) -> Result<String> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let file = SourceFile::from_json(&text).with_context(|| format!("parsing {}", path.display()))?;
    debug!(path = %path.display(), colorways = file.colorways.len(), "loaded source");

    match name {
        Some(name) => {
            let colorway = file
                .find(name)
                .with_context(|| format!("no colorway named '{name}' in {}", path.display()))?;
            source_css(colorway, preset, &options.options())
        }
        None => Ok(list_colorways(&file)),
    }
}

fn source_css(
    colorway: &Colorway,
    preset: Option<&str>,
    options: &SynthesisOptions,
) -> Result<String> {
    let preset = preset
        .or(colorway.preset.as_deref())
        .unwrap_or(if colorway.is_gradient {
            DEFAULT_GRADIENT_PRESET
        } else {
            DEFAULT_PRESET
        });
    let mut sink = Captured::default();
    apply_colorway(&mut sink, colorway, preset, options)?;
    sink.0.context("no stylesheet was produced")
}

fn list_colorways(file: &SourceFile) -> String {
    let width = file
        .colorways
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or_default();
    file.colorways
        .iter()
        .map(|c| {
            let id = c.id().unwrap_or_else(|e| {
                warn!(colorway = %c.name, error = %e, "cannot encode colorway");
                format!("<{e}>")
            });
            format!("{:<width$}  {id}", c.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ─── Tests ──────────────────────────────────────────────────────────────────
