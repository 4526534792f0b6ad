//! Stored colorway records and Project Colorway source files.
//!
//! A source file is a JSON document of the form
//!
//! ```json
//! { "colorways": [ { "name": "…", "accent": "#…", "primary": "#…",
//!                    "secondary": "#…", "tertiary": "#…",
//!                    "author": "…", "authorID": "…" } ] }
//! ```
//!
//! Colors are kept as the strings the file carries and parsed on demand,
//! so one bad entry does not reject the whole file.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::id::ColorwayId;
use crate::spec::{ColorwaySpec, StyleHeader};

/// A named colorway as stored and shared.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Colorway {
    pub name: String,
    pub accent: String,
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "authorID", default)]
    pub author_id: String,
    /// Preset the colorway was created with, if not the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(default)]
    pub is_gradient: bool,
    /// Gradient stop list, for gradient colorways.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linear_gradient: Option<String>,
}

impl Colorway {
    /// Record a spec under a name, with colors in `#rrggbb` form.
    #[must_use]
    pub fn new(name: impl Into<String>, spec: &ColorwaySpec) -> Self {
        Self {
            name: name.into(),
            accent: spec.accent.to_string(),
            primary: spec.primary.to_string(),
            secondary: spec.secondary.to_string(),
            tertiary: spec.tertiary.to_string(),
            ..Self::default()
        }
    }

    /// The four base colors.
    ///
    /// # Errors
    ///
    /// [`crate::Error::Color`] when a stored color does not parse.
    pub fn spec(&self) -> Result<ColorwaySpec> {
        ColorwaySpec::parse(&self.accent, &self.primary, &self.secondary, &self.tertiary)
    }

    /// The shareable Colorway ID for this record.
    ///
    /// # Errors
    ///
    /// Fails when a color does not parse or the name cannot be encoded.
    pub fn id(&self) -> Result<String> {
        let mut id = ColorwayId::new(self.spec()?).with_name(&self.name);
        id.preset.clone_from(&self.preset);
        id.encode()
    }

    /// Header metadata crediting this colorway's author.
    #[must_use]
    pub fn header(&self) -> StyleHeader {
        StyleHeader::new(&self.name, &self.author, &self.author_id)
    }
}

impl From<ColorwayId> for Colorway {
    fn from(id: ColorwayId) -> Self {
        Self {
            preset: id.preset,
            ..Self::new(id.name.unwrap_or_default(), &id.spec)
        }
    }
}

/// A Project Colorway source file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceFile {
    #[serde(default)]
    pub colorways: Vec<Colorway>,
}

impl SourceFile {
    /// Parse a source file from JSON text.
    ///
    /// # Errors
    ///
    /// [`crate::Error::SourceFile`] when the text is not a source file.
    pub fn from_json(text: &str) -> Result<Self> {
        let file: Self = serde_json::from_str(text)?;
        debug!(colorways = file.colorways.len(), "parsed colorway source");
        Ok(file)
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Colorway> {
        self.colorways.iter().find(|c| c.name == name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    const SOURCE: &str = r##"{
        "colorways": [
            {
                "name": "Blurple",
                "accent": "#5865f2",
                "primary": "#313338",
                "secondary": "#2b2d31",
                "tertiary": "#1e1f22",
                "author": "someone",
                "authorID": "1234"
            },
            {
                "name": "Sunset",
                "accent": "rgb(255, 128, 0)",
                "primary": "#2b1d1d",
                "secondary": "#241818",
                "tertiary": "#1a1111",
                "author": "someone else",
                "authorID": "5678",
                "preset": "gradientType2",
                "isGradient": true,
                "linearGradient": "90deg, #ff8000 0%, #2b1d1d 100%"
            }
        ]
    }"##;

    #[test]
    fn parses_source_file() {
        let file = SourceFile::from_json(SOURCE).unwrap();
        assert_eq!(file.colorways.len(), 2);

        let blurple = file.find("Blurple").unwrap();
        assert_eq!(blurple.author_id, "1234");
        assert_eq!(blurple.preset, None);
        assert!(!blurple.is_gradient);

        let sunset = file.find("Sunset").unwrap();
        assert!(sunset.is_gradient);
        assert_eq!(sunset.linear_gradient.as_deref(), Some("90deg, #ff8000 0%, #2b1d1d 100%"));
        assert_eq!(sunset.spec().unwrap().accent.to_string(), "#ff8000");
    }

    #[test]
    fn malformed_source_is_an_error() {
        let err = SourceFile::from_json(r#"{"colorways": [{"name": 3}]}"#).unwrap_err();
        assert!(matches!(err, Error::SourceFile(_)));
    }

    #[test]
    fn id_carries_name_and_preset() {
        let file = SourceFile::from_json(SOURCE).unwrap();
        let id = ColorwayId::decode(&file.colorways[1].id().unwrap()).unwrap();
        assert_eq!(id.name.as_deref(), Some("Sunset"));
        assert_eq!(id.preset.as_deref(), Some("gradientType2"));
        assert_eq!(id.spec.primary.to_string(), "#2b1d1d");
    }

    #[test]
    fn serializes_with_plugin_field_names() {
        let colorway = Colorway {
            author_id: "42".to_owned(),
            ..Colorway::new("Stock", &ColorwaySpec::default())
        };
        let json = serde_json::to_string(&colorway).unwrap();
        assert_eq!(
            json,
            r##"{"name":"Stock","accent":"#ffffff","primary":"#313338","secondary":"#2b2d31","tertiary":"#1e1f22","author":"","authorID":"42","isGradient":false}"##
        );
    }

    #[test]
    fn from_decoded_id() {
        let id = ColorwayId::new(ColorwaySpec::default())
            .with_name("Stock")
            .with_preset("cyan");
        let colorway = Colorway::from(id);
        assert_eq!(colorway.name, "Stock");
        assert_eq!(colorway.preset.as_deref(), Some("cyan"));
        assert_eq!(colorway.tertiary, "#1e1f22");
    }
}
