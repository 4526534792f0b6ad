// SPDX-License-Identifier: MIT
//
// Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use cw_color::Rgb;
use cw_theme::{ColorwaySpec, StyleHeader, SynthesisOptions};

#[derive(Parser)]
#[command(
    name = "colorways",
    version,
    about = "Generate Discord colorway stylesheets from four base colors"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Explicit log level (overrides -v).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the stylesheet for a colorway.
    Css(CssArgs),

    /// Encode or decode Colorway IDs.
    #[command(subcommand)]
    Id(IdCommand),

    /// List the registered presets and the colors each one reads.
    Presets {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List the colorways of a Project Colorway source file with their IDs.
    Source {
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Print the stylesheet of the named colorway instead of the list.
        #[arg(long, value_name = "NAME")]
        css: Option<String>,

        /// Preset for `--css` (defaults to the colorway's own preset).
        #[arg(long)]
        preset: Option<String>,

        #[command(flatten)]
        options: OptionArgs,
    },
}

#[derive(Subcommand)]
pub enum IdCommand {
    /// Encode colors, a name and a preset into a Colorway ID.
    Encode {
        #[command(flatten)]
        colors: ColorArgs,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        preset: Option<String>,
    },

    /// Decode a Colorway ID, or a message containing `colorway:<id>`.
    Decode {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Args)]
pub struct CssArgs {
    #[command(flatten)]
    pub colors: ColorArgs,

    /// Take the colors (and preset, unless --preset is given) from a
    /// Colorway ID.
    #[arg(long, conflicts_with_all = ["accent", "primary", "secondary", "tertiary"])]
    pub id: Option<String>,

    #[arg(long)]
    pub preset: Option<String>,

    /// Print only the gradient stop list (gradient presets).
    #[arg(long, conflicts_with = "preview")]
    pub stops: bool,

    /// Print the preview-widget stylesheet for the gradient (gradient
    /// presets).
    #[arg(long)]
    pub preview: bool,

    #[command(flatten)]
    pub options: OptionArgs,

    /// Stylesheet header: colorway name.
    #[arg(long, requires = "author")]
    pub name: Option<String>,

    /// Stylesheet header: author name.
    #[arg(long, requires = "name")]
    pub author: Option<String>,

    /// Stylesheet header: author id.
    #[arg(long = "author-id", default_value = "")]
    pub author_id: String,
}

impl CssArgs {
    #[must_use]
    pub fn header(&self) -> Option<StyleHeader> {
        match (&self.name, &self.author) {
            (Some(name), Some(author)) => Some(StyleHeader::new(name, author, &self.author_id)),
            _ => None,
        }
    }
}

/// The four base colors. Any CSS color notation; missing slots use
/// Discord's stock dark theme.
#[derive(Args)]
pub struct ColorArgs {
    #[arg(long)]
    pub accent: Option<String>,
    #[arg(long)]
    pub primary: Option<String>,
    #[arg(long)]
    pub secondary: Option<String>,
    #[arg(long)]
    pub tertiary: Option<String>,
}

impl ColorArgs {
    /// # Errors
    ///
    /// Fails when a given color does not parse.
    pub fn spec(&self) -> cw_theme::Result<ColorwaySpec> {
        let stock = ColorwaySpec::default();
        let pick = |arg: Option<&str>, fallback: Rgb| {
            arg.map_or(Ok(fallback), cw_color::parse_css_color)
        };
        Ok(ColorwaySpec::new(
            pick(self.accent.as_deref(), stock.accent)?,
            pick(self.primary.as_deref(), stock.primary)?,
            pick(self.secondary.as_deref(), stock.secondary)?,
            pick(self.tertiary.as_deref(), stock.tertiary)?,
        ))
    }
}

#[derive(Args)]
pub struct OptionArgs {
    /// Do not tint text with the secondary color.
    #[arg(long = "no-tinted-text")]
    pub no_tinted_text: bool,

    /// Copy base saturations instead of applying Discord's per-step diffs.
    #[arg(long = "no-discord-saturation")]
    pub no_discord_saturation: bool,

    /// Lightness (0-100) of the muted text color.
    #[arg(long = "muted-text-brightness", value_name = "PERCENT")]
    pub muted_text_brightness: Option<f64>,
}

impl OptionArgs {
    #[must_use]
    pub const fn options(&self) -> SynthesisOptions {
        SynthesisOptions {
            tinted_text: !self.no_tinted_text,
            discord_saturation: !self.no_discord_saturation,
            muted_text_brightness: self.muted_text_brightness,
            header: None,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
