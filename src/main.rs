// SPDX-License-Identifier: MIT
//
// colorways: generate Discord colorway stylesheets from the command line.
//
// This binary wires the two library crates to a small CLI:
//
//   cw-color → hex / rgb() / hsl() parsing and HSL math
//   cw-theme → presets, stylesheet synthesis, Colorway IDs, source files
//
// Every command builds its whole output before printing it. Stylesheets go
// to stdout; logs and errors go to stderr, so the output can be piped
// straight into a .css file:
//
//   colorways css --accent '#5865f2' > colorway.css
//   colorways id decode 'colorway:2335…'
//   colorways source index.json --css 'Midnight'

use std::process;

use clap::Parser;
use tracing::Level;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, Command, IdCommand, LogLevelArg};
use crate::logging::{LogConfig, init_logging};

fn main() {
    let cli = Cli::parse();
    init_logging(&log_config_from_cli(&cli));

    let output = match &cli.command {
        Command::Css(args) => commands::run_css(args),
        Command::Id(IdCommand::Encode {
            colors,
            name,
            preset,
        }) => commands::run_id_encode(colors, name.as_deref(), preset.as_deref()),
        Command::Id(IdCommand::Decode { id }) => commands::run_id_decode(id),
        Command::Presets { json } => commands::run_presets(*json),
        Command::Source {
            path,
            css,
            preset,
            options,
        } => commands::run_source(path, css.as_deref(), preset.as_deref(), options),
    };

    match output {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("colorways: {e:#}");
            process::exit(1);
        }
    }
}

/// `--log-level` wins over the `-v` count. Targets show from `-vv` on.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let config = LogConfig::from_verbosity(cli.verbose).with_target(cli.verbose >= 2);
    match cli.log_level {
        Some(level) => config.with_level(match level {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        }),
        None => config,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_level_overrides_verbosity() {
        let cli = Cli::parse_from(["colorways", "-vv", "--log-level", "error", "presets"]);
        assert_eq!(log_config_from_cli(&cli).level, Level::ERROR);

        let cli = Cli::parse_from(["colorways", "presets", "-v"]);
        assert_eq!(log_config_from_cli(&cli).level, Level::INFO);
    }

    #[test]
    fn parses_css_flags() {
        let cli = Cli::parse_from([
            "colorways",
            "css",
            "--accent",
            "#5865f2",
            "--preset",
            "cyan",
            "--no-tinted-text",
            "--muted-text-brightness",
            "55",
        ]);
        let Command::Css(args) = cli.command else {
            panic!("expected css");
        };
        let options = args.options.options();
        assert!(!options.tinted_text);
        assert_eq!(options.muted_text_brightness, Some(55.0));
        assert_eq!(args.preset.as_deref(), Some("cyan"));
    }
}
