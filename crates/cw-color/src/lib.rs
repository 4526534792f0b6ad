// SPDX-License-Identifier: MIT
//
// cw-color: the color model behind colorway generation.
//
// Colorways are stored and shared as plain `#rrggbb` strings, but every CSS
// variable they produce is written in HSL channels. This crate owns the
// conversions between the two, and the number rules that keep generated
// stylesheets byte-compatible with the ones the browser plugin writes:
//
//   hex / rgb() / hsl() string → Rgb → Hsl (one-decimal s/l) → CSS text
//
// Rounding follows JavaScript semantics (`Math.round`, `toFixed(1)`) rather
// than Rust's, because previously shared colorways were generated that way.

pub mod color;
pub mod error;
pub mod num;
pub mod parse;

pub use color::{Hsl, Rgb, hex_to_hsl, hsl_to_hex, rgb_to_hex};
pub use error::{ColorError, Result};
pub use num::Num;
pub use parse::{normalize_color_to_hex, parse_css_color};
