// SPDX-License-Identifier: MIT
//
// CSS color strings.
//
// Colors reach the generator from three places: user input, stored colorway
// records, and the host's computed custom properties. The last kind comes
// back in whatever notation the host stylesheet used, including our own
// `calc(var(--saturation-factor, 1)*S%)` saturation wrapper, so the parser
// unwraps that before reading channels.
//
// Accepted forms:
//
//   #rgb  #rrggbb  rgb  rrggbb
//   rgb(r, g, b)   rgba(r, g, b, a)   rgb(r g b / a)
//   hsl(h, s%, l%) hsla(h, s%, l%, a) hsl(hdeg s% l% / a)
//
// Alpha is validated and discarded.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::{Hsl, Rgb};
use crate::error::{ColorError, Result};
use crate::num::round_half_up;

static FUNCTIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(rgba?|hsla?)\s*\((.*)\)$").expect("valid regex")
});

static ARG_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,/]+").expect("valid regex"));

static SATURATION_FACTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"calc\(\s*var\(\s*--saturation-factor\s*,\s*1\s*\)\s*\*\s*([^)]+?)\s*\)")
        .expect("valid regex")
});

/// Parse any accepted CSS color notation into an [`Rgb`].
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] when the notation is not
/// recognized, an argument is not a number, the argument count is wrong, or
/// a channel is outside its range. Out-of-range channels are rejected, never
/// clamped.
pub fn parse_css_color(input: &str) -> Result<Rgb> {
    let trimmed = input.trim();
    let unwrapped = SATURATION_FACTOR.replace_all(trimmed, "$1");

    let Some(caps) = FUNCTIONAL.captures(&unwrapped) else {
        return Rgb::from_hex(trimmed)
            .map_err(|_| ColorError::invalid(input, "not a hex, rgb() or hsl() color"));
    };

    let func = caps[1].to_ascii_lowercase();
    let args: Vec<&str> = ARG_SEPARATOR
        .split(caps[2].trim())
        .filter(|a| !a.is_empty())
        .collect();

    match args.len() {
        3 => {}
        4 => {
            let alpha = number(input, args[3].trim_end_matches('%'))?;
            let max = if args[3].ends_with('%') { 100.0 } else { 1.0 };
            if !(0.0..=max).contains(&alpha) {
                return Err(ColorError::invalid(input, "alpha out of range"));
            }
        }
        _ => {
            return Err(ColorError::invalid(
                input,
                "expected three channels and an optional alpha",
            ));
        }
    }

    if func.starts_with("rgb") {
        let channel = |arg: &str| -> Result<u8> {
            let v = number(input, arg)?;
            if !(0.0..=255.0).contains(&v) {
                return Err(ColorError::invalid(input, "rgb channel out of range"));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let byte = round_half_up(v) as u8;
            Ok(byte)
        };
        Ok(Rgb::new(channel(args[0])?, channel(args[1])?, channel(args[2])?))
    } else {
        let h = number(input, args[0].trim_end_matches("deg"))?;
        let percent = |arg: &str| -> Result<f64> {
            let v = number(input, arg.trim_end_matches('%'))?;
            if !(0.0..=100.0).contains(&v) {
                return Err(ColorError::invalid(input, "hsl percentage out of range"));
            }
            Ok(v)
        };
        Ok(Hsl::new(h, percent(args[1])?, percent(args[2])?).to_rgb())
    }
}

/// Normalize any accepted color notation to six lowercase hex digits.
///
/// Canonical hex passes through unchanged.
///
/// # Examples
///
/// ```
/// use cw_color::normalize_color_to_hex;
///
/// assert_eq!(normalize_color_to_hex("rgb(88, 101, 242)").unwrap(), "5865f2");
/// assert_eq!(normalize_color_to_hex("hsl(0 100% 50%)").unwrap(), "ff0000");
/// assert_eq!(normalize_color_to_hex("5865f2").unwrap(), "5865f2");
/// ```
///
/// # Errors
///
/// Same as [`parse_css_color`].
pub fn normalize_color_to_hex(input: &str) -> Result<String> {
    parse_css_color(input).map(Rgb::to_hex)
}

fn number(input: &str, arg: &str) -> Result<f64> {
    arg.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ColorError::invalid(input, "channel is not a number"))
}
