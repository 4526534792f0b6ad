//! # cw-theme: Colorway Stylesheet Synthesis
//!
//! Turns four base colors into the stylesheet that recolors Discord.
//! Discord paints itself through numbered HSL custom properties; a
//! colorway overrides them all from an accent and three background colors.
//!
//! # Architecture
//!
//! ```text
//! ColorwaySpec (accent, primary, secondary, tertiary) + SynthesisOptions
//!     │
//!     ▼
//! preset.rs:   look up the preset, dispatch to its generator
//!     │
//!     ├── generate.rs: the full default stylesheet
//!     │       palette.rs:  brand and background ramps (tables.rs diffs)
//!     │       contrast.rs: override blocks for light base colors
//!     │
//!     ├── gradient.rs: overlay layering for gradient backgrounds
//!     ├── auto.rs:     backgrounds derived from the accent alone
//!     └── small theme-specific variable sets (cyan, solana, …)
//!     │
//!     ▼
//! sheet.rs:    StyleSheet of rules and sections, rendered once
//!     │
//!     ▼
//! CssText      (plain, or full + gradient stops)
//! ```
//!
//! Around the core: `id.rs` encodes colorways as shareable IDs,
//! `colorway.rs` reads Project Colorway source files, and `host.rs`
//! defines the traits a host implements to capture and apply colors.
//!
//! # Determinism
//!
//! Synthesis is a pure function of its inputs. The same spec, preset and
//! options always render byte-identical CSS.

// Single-char color channel names (h, s, l) are standard.
#![allow(clippy::many_single_char_names)]
// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]
// Generators are long lists of declarations, one per variable.
#![allow(clippy::too_many_lines)]
// Lightness arithmetic is exact-compared against CSS thresholds.
#![allow(clippy::float_cmp)]

pub mod auto;
pub mod colorway;
pub mod contrast;
pub mod error;
pub mod generate;
pub mod gradient;
pub mod host;
pub mod id;
pub mod palette;
pub mod preset;
pub mod sheet;
pub mod spec;
pub mod tables;

pub use auto::AutoPreset;
pub use colorway::{Colorway, SourceFile};
pub use error::{Error, Result};
pub use generate::generate_css;
pub use host::{ColorSource, StyleSink, apply_colorway, capture_current_colors};
pub use id::ColorwayId;
pub use preset::{ColorSlots, CssText, PRESETS, Preset, find_preset, synthesize};
pub use sheet::{Declaration, Rule, StyleSheet};
pub use spec::{ColorwaySpec, StyleHeader, SynthesisOptions};
