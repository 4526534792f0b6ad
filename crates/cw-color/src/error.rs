// SPDX-License-Identifier: MIT
//
// Color parsing errors.

use thiserror::Error;

/// Errors produced while reading a color from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input is not a color this crate understands: wrong hex digit
    /// count, a non-numeric channel, or a channel outside its range.
    #[error("invalid color format '{input}': {reason}")]
    InvalidColorFormat { input: String, reason: &'static str },
}

impl ColorError {
    pub(crate) fn invalid(input: &str, reason: &'static str) -> Self {
        Self::InvalidColorFormat {
            input: input.to_owned(),
            reason,
        }
    }
}

/// Convenience alias for results carrying a [`ColorError`].
pub type Result<T> = std::result::Result<T, ColorError>;
