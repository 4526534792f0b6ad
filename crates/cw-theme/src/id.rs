//! Colorway IDs, the shareable text form of a colorway.
//!
//! An ID is the record
//!
//! ```text
//! #accent,#primary,#secondary,#tertiary|n:<name>|p:<preset>
//! ```
//!
//! with every character written as two lowercase hex digits of its
//! character code. The name and preset segments are optional; IDs copied
//! from the live client carry only the four colors.
//!
//! Decoding is strict: a malformed ID is rejected whole, never partially
//! applied.

use std::str::FromStr;

use cw_color::Rgb;
use tracing::debug;

use crate::error::{Error, Result};
use crate::spec::ColorwaySpec;

/// Prefix marking an ID embedded in a chat message.
pub const MESSAGE_PREFIX: &str = "colorway:";

/// Hex length of the shortest valid ID: four `#rrggbb` colors and three
/// commas.
pub const MIN_ENCODED_LEN: usize = 62;

const SEGMENT_SEPARATOR: char = '|';
const NAME_TAG: &str = "n:";
const PRESET_TAG: &str = "p:";

/// A decoded Colorway ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorwayId {
    pub spec: ColorwaySpec,
    pub name: Option<String>,
    pub preset: Option<String>,
}

impl ColorwayId {
    #[must_use]
    pub const fn new(spec: ColorwaySpec) -> Self {
        Self {
            spec,
            name: None,
            preset: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    /// Encode into the hex wire form.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColorwayId`] when the name or preset contains `|` or
    /// a non-ASCII character; either would produce an ID no decoder reads
    /// back.
    pub fn encode(&self) -> Result<String> {
        for (what, text) in [("name", &self.name), ("preset", &self.preset)] {
            if let Some(text) = text {
                check_segment(what, text)?;
            }
        }
        Ok(self.record().bytes().map(|b| format!("{b:02x}")).collect())
    }

    /// Decode the hex wire form.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColorwayId`] on odd length, non-hex digits, non-ASCII
    /// character codes, a color list that is not exactly four `#rrggbb`
    /// colors, or an unknown or repeated segment.
    ///
    /// Colors must use six hex digits, as [`encode`](Self::encode) writes
    /// them. `#rgb` shorthand is rejected here even though CSS color
    /// parsing accepts it; [`MIN_ENCODED_LEN`] assumes the long form.
    pub fn decode(encoded: &str) -> Result<Self> {
        let encoded = encoded.trim();
        if encoded.len() < MIN_ENCODED_LEN {
            return Err(Error::invalid_id(format!(
                "too short ({} hex digits, need at least {MIN_ENCODED_LEN})",
                encoded.len()
            )));
        }
        let record = hex_to_ascii(encoded)?;
        debug!(%record, "decoded colorway id");
        Self::from_record(&record)
    }

    /// Find and decode an ID in a message such as `colorway:2335…`.
    ///
    /// The ID runs from the prefix to the next whitespace.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidColorwayId`] when the prefix is missing or the ID
    /// does not decode.
    pub fn parse_message(text: &str) -> Result<Self> {
        let (_, rest) = text
            .split_once(MESSAGE_PREFIX)
            .ok_or_else(|| Error::invalid_id(format!("no '{MESSAGE_PREFIX}' prefix")))?;
        let encoded = rest.split_whitespace().next().unwrap_or_default();
        Self::decode(encoded)
    }

    /// The plain-text record before hex encoding.
    #[must_use]
    pub fn record(&self) -> String {
        let mut record = self.spec.to_string();
        if let Some(name) = &self.name {
            record.push(SEGMENT_SEPARATOR);
            record.push_str(NAME_TAG);
            record.push_str(name);
        }
        if let Some(preset) = &self.preset {
            record.push(SEGMENT_SEPARATOR);
            record.push_str(PRESET_TAG);
            record.push_str(preset);
        }
        record
    }

    fn from_record(record: &str) -> Result<Self> {
        let mut segments = record.split(SEGMENT_SEPARATOR);
        let colors = segments.next().unwrap_or_default();
        let spec = parse_colors(colors)?;

        let mut id = Self::new(spec);
        for segment in segments {
            if let Some(name) = segment.strip_prefix(NAME_TAG) {
                if id.name.replace(name.to_owned()).is_some() {
                    return Err(Error::invalid_id("name segment repeated"));
                }
            } else if let Some(preset) = segment.strip_prefix(PRESET_TAG) {
                if preset.is_empty() {
                    return Err(Error::invalid_id("empty preset segment"));
                }
                if id.preset.replace(preset.to_owned()).is_some() {
                    return Err(Error::invalid_id("preset segment repeated"));
                }
            } else {
                return Err(Error::invalid_id(format!("unknown segment '{segment}'")));
            }
        }
        Ok(id)
    }
}

impl FromStr for ColorwayId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

fn check_segment(what: &str, text: &str) -> Result<()> {
    if !text.is_ascii() {
        return Err(Error::invalid_id(format!("{what} must be ASCII")));
    }
    if text.contains(SEGMENT_SEPARATOR) {
        return Err(Error::invalid_id(format!("{what} must not contain '|'")));
    }
    Ok(())
}

fn hex_to_ascii(encoded: &str) -> Result<String> {
    if encoded.len() % 2 != 0 {
        return Err(Error::invalid_id("odd number of hex digits"));
    }
    encoded
        .as_bytes()
        .chunks_exact(2)
        .map(|pair| {
            let [hi, lo] = *pair else {
                return Err(Error::invalid_id("odd number of hex digits"));
            };
            let (Some(hi), Some(lo)) = (hex_digit(hi), hex_digit(lo)) else {
                return Err(Error::invalid_id("non-hex digit"));
            };
            let code = (hi << 4) | lo;
            if code.is_ascii() {
                Ok(char::from(code))
            } else {
                Err(Error::invalid_id(format!("character code {code:#04x} is not ASCII")))
            }
        })
        .collect()
}

fn hex_digit(byte: u8) -> Option<u8> {
    char::from(byte).to_digit(16).and_then(|d| u8::try_from(d).ok())
}

fn parse_colors(list: &str) -> Result<ColorwaySpec> {
    let colors: Vec<&str> = list.split(',').collect();
    let [accent, primary, secondary, tertiary] = *colors.as_slice() else {
        return Err(Error::invalid_id(format!(
            "expected 4 colors, found {}",
            colors.len()
        )));
    };
    let color = |text: &str| -> Result<Rgb> {
        let digits = text
            .strip_prefix('#')
            .ok_or_else(|| Error::invalid_id(format!("color '{text}' lacks '#'")))?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::invalid_id(format!("color '{text}' is not #rrggbb")));
        }
        Rgb::from_hex(digits).map_err(|e| Error::invalid_id(e.to_string()))
    };
    Ok(ColorwaySpec::new(
        color(accent)?,
        color(primary)?,
        color(secondary)?,
        color(tertiary)?,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const TEST_ID: &str = "233538363566322c233331333333382c233262326433312c233165316632327c6e3a546573747c703a64656661756c74";
    const COLORS_ONLY: &str = "233538363566322c233331333333382c233262326433312c23316531663232";

    fn blurple() -> ColorwaySpec {
        ColorwaySpec::default().with_accent(Rgb::new(0x58, 0x65, 0xf2))
    }

    #[test]
    fn encode_matches_wire_format() {
        let id = ColorwayId::new(blurple()).with_name("Test").with_preset("default");
        assert_eq!(id.record(), "#5865f2,#313338,#2b2d31,#1e1f22|n:Test|p:default");
        assert_eq!(id.encode().unwrap(), TEST_ID);
    }

    #[test]
    fn decode_reproduces_fields() {
        let id: ColorwayId = TEST_ID.parse().unwrap();
        assert_eq!(id.spec, blurple());
        assert_eq!(id.name.as_deref(), Some("Test"));
        assert_eq!(id.preset.as_deref(), Some("default"));
    }

    #[test]
    fn colors_only_id() {
        let id = ColorwayId::decode(COLORS_ONLY).unwrap();
        assert_eq!(id, ColorwayId::new(blurple()));
        assert_eq!(COLORS_ONLY.len(), MIN_ENCODED_LEN);
    }

    #[test]
    fn message_prefix() {
        let text = format!("try this one colorway:{TEST_ID} it's nice");
        let id = ColorwayId::parse_message(&text).unwrap();
        assert_eq!(id.name.as_deref(), Some("Test"));
        assert!(ColorwayId::parse_message(TEST_ID).is_err());
    }

    #[test]
    fn rejects_truncated() {
        let err = ColorwayId::decode(&TEST_ID[..40]).unwrap_err();
        assert!(matches!(err, Error::InvalidColorwayId { .. }));
        assert!(ColorwayId::decode(&format!("{TEST_ID}7")).is_err());
    }

    #[test]
    fn rejects_bad_records() {
        let encode = |record: &str| record.bytes().map(|b| format!("{b:02x}")).collect::<String>();
        for record in [
            "#5865f2,#313338,#2b2d31|n:Three colors only",
            "#5865f2,#313338,#2b2d31,#1e1f22,#000000",
            "5865f2,#313338,#2b2d31,#1e1f22|n:x",
            "#5865f2,#313338,#2b2d31,#1e1f2z|n:x",
            "#5865f2,#313338,#2b2d31,#1e1f22|x:what",
            "#5865f2,#313338,#2b2d31,#1e1f22|n:a|n:b",
            "#5865f2,#313338,#2b2d31,#1e1f22|p:",
            "# 5865f2,#313338,#2b2d31,#1e1f22|n:x",
            "#5865f2 ,#313338,#2b2d31,#1e1f22|n:x",
            "#fff,#313338,#2b2d31,#1e1f22|n:A name long enough for the floor",
        ] {
            assert!(ColorwayId::decode(&encode(record)).is_err(), "accepted {record}");
        }
    }

    #[test]
    fn rejects_non_ascii_codes() {
        let bad = format!("{COLORS_ONLY}7cff");
        assert!(ColorwayId::decode(&bad).is_err());
        assert!(ColorwayId::decode(&COLORS_ONLY.replace("23", "zz")).is_err());
    }

    #[test]
    fn encode_rejects_unencodable_names() {
        let id = ColorwayId::new(blurple()).with_name("Café");
        assert!(id.encode().is_err());
        let id = ColorwayId::new(blurple()).with_name("a|b");
        assert!(id.encode().is_err());
    }

    proptest! {
        #[test]
        fn roundtrip(
            colors in any::<[u8; 12]>(),
            name in proptest::option::of("[ -{}~]{0,24}"),
            preset in proptest::option::of("[a-zA-Z0-9]{1,16}"),
        ) {
            let rgb = |i: usize| Rgb::new(colors[i], colors[i + 1], colors[i + 2]);
            let spec = ColorwaySpec::new(rgb(0), rgb(3), rgb(6), rgb(9));
            let id = ColorwayId { spec, name, preset };
            let decoded = ColorwayId::decode(&id.encode().unwrap()).unwrap();
            prop_assert_eq!(decoded, id);
        }
    }
}
