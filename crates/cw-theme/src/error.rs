//! Error types for colorway synthesis and the Colorway ID codec.

use cw_color::ColorError;
use thiserror::Error;

/// Errors produced by this crate.
///
/// Every failing operation rejects its whole input; nothing is partially
/// generated or partially decoded.
#[derive(Debug, Error)]
pub enum Error {
    /// A base color could not be read.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// A Colorway ID failed validation.
    #[error("invalid colorway id: {reason}")]
    InvalidColorwayId { reason: String },

    /// No preset is registered under this id.
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    /// A numeric option is outside its allowed range.
    #[error("{what} must be within {min}..={max}, got {value}")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The host did not report a color the capture needs.
    #[error("host did not report '{0}'")]
    MissingProperty(&'static str),

    /// A colorway source file is not valid JSON of the expected shape.
    #[error("malformed colorway source: {0}")]
    SourceFile(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_id(reason: impl Into<String>) -> Self {
        Self::InvalidColorwayId {
            reason: reason.into(),
        }
    }
}

/// Convenience alias for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
